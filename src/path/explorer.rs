use std::convert::Infallible;
use std::iter::FusedIterator;

use super::error::PathError;
use super::predicate::{AvoidsBefore, EndsAt, PathPredicate};
use crate::graph::{Graph, NodeId};

/// One entry of the traversal stack.
#[derive(Debug, Default)]
struct SearchFrame {
    node: NodeId,
    /// Neighbors that were not on the path when this frame was pushed.
    untried: Vec<NodeId>,
    /// Index of the next entry of `untried` to descend into.
    cursor: usize,
    /// Whether the predicates have been evaluated for this frame.
    checked: bool,
}

impl SearchFrame {
    fn next_untried(&mut self) -> Option<NodeId> {
        let next = self.untried.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(next)
    }
}

/// Outcome of evaluating both predicates on the node just reached.
enum Visit {
    Prune,
    Emit,
    Extend,
}

/// Depth-first enumeration of simple paths, driven by an explicit stack.
///
/// The node indices of the frames, bottom to top, form the current path. A
/// frame's untried neighbors are filtered against the path when the frame is
/// pushed; that list stays valid because nodes are only ever added above it.
///
/// A `PathEnumerator` keeps its buffers between traversals, so one value can
/// be re-seeded for many start nodes of the same graph.
#[derive(Debug, Default)]
pub struct PathEnumerator {
    stack: Vec<SearchFrame>,
    path: Vec<NodeId>,
    on_path: Vec<bool>,
    spare: Vec<Vec<NodeId>>,
}

impl PathEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lazily enumerates the paths from `start` accepted by `accept`.
    ///
    /// On every node reached, `viable` is evaluated first; a `false` result
    /// abandons the node together with all of its untried neighbors. A viable
    /// path for which `accept` holds is yielded, and the search then carries
    /// on below it as if it had not been accepted. Neighbors are tried in the
    /// order the graph lists them.
    ///
    /// The first predicate error is yielded as `Err` and ends the sequence.
    ///
    /// # Errors
    /// Returns `PathError::StartOutOfRange` if `start` is not a node of
    /// `graph`.
    pub fn enumerate<'g, G, V, A>(
        graph: &'g G,
        start: NodeId,
        viable: V,
        accept: A,
    ) -> Result<Paths<'g, V, A>, PathError>
    where
        G: AsRef<Graph> + ?Sized,
        V: PathPredicate,
        A: PathPredicate<Error = V::Error>,
    {
        let graph: &'g Graph = graph.as_ref();
        let mut enumerator = Self::new();
        enumerator.seed(graph, start)?;
        Ok(Paths {
            graph,
            enumerator,
            viable,
            accept,
        })
    }

    /// Lazily enumerates every simple path from `start` to `finish`.
    ///
    /// A path is never extended past `finish`. When `start == finish` the
    /// only route is the single-node path.
    ///
    /// # Errors
    /// Returns `PathError::StartOutOfRange` or `PathError::FinishOutOfRange`
    /// for nodes outside the graph.
    pub fn routes<'g, G>(
        graph: &'g G,
        start: NodeId,
        finish: NodeId,
    ) -> Result<Routes<'g, AvoidsBefore, EndsAt>, PathError>
    where
        G: AsRef<Graph> + ?Sized,
    {
        let node_count = graph.as_ref().node_count();
        if finish >= node_count {
            return Err(PathError::FinishOutOfRange { finish, node_count });
        }
        let paths = Self::enumerate(graph, start, AvoidsBefore(finish), EndsAt(finish))?;
        Ok(paths.into_routes())
    }

    /// Returns the first route from `start` to `finish` in depth-first order,
    /// or `None` if `finish` is unreachable.
    pub fn first_route<G>(
        graph: &G,
        start: NodeId,
        finish: NodeId,
    ) -> Result<Option<Vec<NodeId>>, PathError>
    where
        G: AsRef<Graph> + ?Sized,
    {
        Ok(Self::routes(graph, start, finish)?.next())
    }

    /// Resets the traversal to a single frame for `start`.
    pub(crate) fn seed(&mut self, graph: &Graph, start: NodeId) -> Result<(), PathError> {
        let node_count = graph.node_count();
        if start >= node_count {
            return Err(PathError::StartOutOfRange { start, node_count });
        }
        self.restart(graph, start);
        Ok(())
    }

    /// Resets the traversal to a single frame for `start`, which the caller
    /// has already checked to be a node of `graph`.
    pub(crate) fn restart(&mut self, graph: &Graph, start: NodeId) {
        debug_assert!(graph.contains_node(start), "start node {} out of range", start);
        self.clear();
        self.on_path.clear();
        self.on_path.resize(graph.node_count(), false);
        self.push(graph, start);
    }

    /// Advances the traversal to the next accepted path.
    ///
    /// `graph` must be the graph the enumerator was seeded with.
    pub(crate) fn next_path<V, A>(
        &mut self,
        graph: &Graph,
        viable: &mut V,
        accept: &mut A,
    ) -> Option<Result<Vec<NodeId>, V::Error>>
    where
        V: PathPredicate,
        A: PathPredicate<Error = V::Error>,
    {
        loop {
            let checked = match self.stack.last_mut() {
                Some(frame) => std::mem::replace(&mut frame.checked, true),
                None => return None,
            };

            if !checked {
                match self.visit(viable, accept) {
                    Ok(Visit::Prune) => {
                        self.pop();
                        continue;
                    }
                    // The frame stays on the stack; the next call resumes
                    // by descending into its neighbors.
                    Ok(Visit::Emit) => return Some(Ok(self.path.clone())),
                    Ok(Visit::Extend) => {}
                    Err(e) => {
                        self.clear();
                        return Some(Err(e));
                    }
                }
            }

            let next = self.stack.last_mut().and_then(SearchFrame::next_untried);
            match next {
                Some(next) => self.push(graph, next),
                None => self.pop(),
            }
        }
    }

    fn visit<V, A>(&self, viable: &mut V, accept: &mut A) -> Result<Visit, V::Error>
    where
        V: PathPredicate,
        A: PathPredicate<Error = V::Error>,
    {
        if !viable.check(&self.path)? {
            return Ok(Visit::Prune);
        }
        if accept.check(&self.path)? {
            return Ok(Visit::Emit);
        }
        Ok(Visit::Extend)
    }

    fn push(&mut self, graph: &Graph, node: NodeId) {
        self.on_path[node] = true;
        self.path.push(node);

        let mut untried = self.spare.pop().unwrap_or_default();
        untried.extend(
            graph
                .neighbors(node)
                .iter()
                .copied()
                .filter(|&n| !self.on_path[n]),
        );
        self.stack.push(SearchFrame {
            node,
            untried,
            cursor: 0,
            checked: false,
        });
    }

    fn pop(&mut self) {
        if let Some(mut frame) = self.stack.pop() {
            self.on_path[frame.node] = false;
            self.path.pop();
            frame.untried.clear();
            self.spare.push(frame.untried);
        }
    }

    fn clear(&mut self) {
        while !self.stack.is_empty() {
            self.pop();
        }
    }
}

/// Lazy sequence of accepted paths, returned by [`PathEnumerator::enumerate`].
pub struct Paths<'g, V, A> {
    graph: &'g Graph,
    enumerator: PathEnumerator,
    viable: V,
    accept: A,
}

impl<'g, V, A> Paths<'g, V, A>
where
    V: PathPredicate<Error = Infallible>,
    A: PathPredicate<Error = Infallible>,
{
    /// Drops the `Result` wrapper when neither predicate can fail.
    pub fn into_routes(self) -> Routes<'g, V, A> {
        Routes(self)
    }
}

impl<V, A> Iterator for Paths<'_, V, A>
where
    V: PathPredicate,
    A: PathPredicate<Error = V::Error>,
{
    type Item = Result<Vec<NodeId>, V::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.enumerator
            .next_path(self.graph, &mut self.viable, &mut self.accept)
    }
}

impl<V, A> FusedIterator for Paths<'_, V, A>
where
    V: PathPredicate,
    A: PathPredicate<Error = V::Error>,
{
}

/// [`Paths`] for predicates that cannot fail.
pub struct Routes<'g, V, A>(Paths<'g, V, A>);

impl<V, A> Iterator for Routes<'_, V, A>
where
    V: PathPredicate<Error = Infallible>,
    A: PathPredicate<Error = Infallible>,
{
    type Item = Vec<NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.0.next()? {
            Ok(path) => Some(path),
            Err(never) => match never {},
        }
    }
}

impl<V, A> FusedIterator for Routes<'_, V, A>
where
    V: PathPredicate<Error = Infallible>,
    A: PathPredicate<Error = Infallible>,
{
}
