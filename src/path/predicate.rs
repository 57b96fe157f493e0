//! Predicates evaluated on partial paths during enumeration.
//!
//! A traversal consults two predicates every time it reaches a new node:
//! the *viability* predicate decides whether the current path may be
//! extended at all, and the *acceptance* predicate decides whether the
//! current path is yielded to the caller. Both see the full path from the
//! start node to the node just reached.

use crate::graph::NodeId;
use std::convert::Infallible;
use std::marker::PhantomData;

/// A test applied to a partial path.
///
/// Plain closures `FnMut(&[NodeId]) -> bool` implement this trait with
/// `Infallible` errors. Wrap a closure returning `Result<bool, E>` in
/// [`Fallible`] to let it abort a traversal.
pub trait PathPredicate {
    type Error;

    fn check(&mut self, path: &[NodeId]) -> Result<bool, Self::Error>;
}

impl<F> PathPredicate for F
where
    F: FnMut(&[NodeId]) -> bool,
{
    type Error = Infallible;

    fn check(&mut self, path: &[NodeId]) -> Result<bool, Self::Error> {
        Ok(self(path))
    }
}

/// Adapts a closure whose failure should abort the traversal.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> PathPredicate for Fallible<F>
where
    F: FnMut(&[NodeId]) -> Result<bool, E>,
{
    type Error = E;

    fn check(&mut self, path: &[NodeId]) -> Result<bool, Self::Error> {
        (self.0)(path)
    }
}

/// Holds for every path.
///
/// The error type is free so it can be paired with a fallible predicate.
#[derive(Debug)]
pub struct Always<E = Infallible>(PhantomData<fn() -> E>);

impl<E> Always<E> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for Always<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Always<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> Copy for Always<E> {}

impl<E> PathPredicate for Always<E> {
    type Error = E;

    fn check(&mut self, _path: &[NodeId]) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

/// Holds when the path ends at the given node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndsAt(pub NodeId);

impl PathPredicate for EndsAt {
    type Error = Infallible;

    fn check(&mut self, path: &[NodeId]) -> Result<bool, Self::Error> {
        Ok(path.last() == Some(&self.0))
    }
}

/// Holds while the given node appears nowhere but, possibly, at the end of
/// the path. Used as a viability predicate it stops a route from being
/// extended past its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvoidsBefore(pub NodeId);

impl PathPredicate for AvoidsBefore {
    type Error = Infallible;

    fn check(&mut self, path: &[NodeId]) -> Result<bool, Self::Error> {
        let interior = path.split_last().map_or(&[][..], |(_, rest)| rest);
        Ok(!interior.contains(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_predicates() {
        let mut longer_than_two = |path: &[NodeId]| path.len() > 2;
        assert_eq!(longer_than_two.check(&[0, 1]), Ok(false));
        assert_eq!(longer_than_two.check(&[0, 1, 2]), Ok(true));
    }

    #[test]
    fn fallible_propagates() {
        let mut refuse_node_3 = Fallible(|path: &[NodeId]| {
            if path.contains(&3) {
                Err("node 3")
            } else {
                Ok(true)
            }
        });
        assert_eq!(refuse_node_3.check(&[0, 1]), Ok(true));
        assert_eq!(refuse_node_3.check(&[0, 3]), Err("node 3"));
    }

    #[test]
    fn stock_predicates() {
        let mut always: Always = Always::new();
        assert_eq!(always.check(&[]), Ok(true));

        assert_eq!(EndsAt(4).check(&[0, 4]), Ok(true));
        assert_eq!(EndsAt(4).check(&[4, 0]), Ok(false));
        assert_eq!(EndsAt(4).check(&[]), Ok(false));

        assert_eq!(AvoidsBefore(4).check(&[0, 4]), Ok(true));
        assert_eq!(AvoidsBefore(4).check(&[4]), Ok(true));
        assert_eq!(AvoidsBefore(4).check(&[0, 4, 5]), Ok(false));
        assert_eq!(AvoidsBefore(4).check(&[]), Ok(true));
    }
}
