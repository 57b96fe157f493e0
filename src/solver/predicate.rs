use std::convert::Infallible;

use crate::dictionary::PrefixIndex;
use crate::graph::NodeId;
use crate::graph::GridGraph;
use crate::path::PathPredicate;

/// Viable while the letters spelled by the path start some dictionary word.
#[derive(Debug, Clone, Copy)]
pub struct FeasiblePrefix<'a> {
    index: &'a PrefixIndex,
    grid: &'a GridGraph,
}

impl<'a> FeasiblePrefix<'a> {
    pub fn new(index: &'a PrefixIndex, grid: &'a GridGraph) -> Self {
        Self { index, grid }
    }
}

impl PathPredicate for FeasiblePrefix<'_> {
    type Error = Infallible;

    fn check(&mut self, path: &[NodeId]) -> Result<bool, Self::Error> {
        Ok(self.index.has_feasible_prefix(&self.grid.letters_of(path)))
    }
}

/// Accepts a path whose letters spell a dictionary word exactly.
#[derive(Debug, Clone, Copy)]
pub struct ExactWord<'a> {
    index: &'a PrefixIndex,
    grid: &'a GridGraph,
}

impl<'a> ExactWord<'a> {
    pub fn new(index: &'a PrefixIndex, grid: &'a GridGraph) -> Self {
        Self { index, grid }
    }
}

impl PathPredicate for ExactWord<'_> {
    type Error = Infallible;

    fn check(&mut self, path: &[NodeId]) -> Result<bool, Self::Error> {
        Ok(self.index.contains_exact(&self.grid.letters_of(path)))
    }
}
