//! Breadth-first and depth-first search, and connected components.

use core::fmt;
use core::iter;

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use log::debug;

use crate::graph::guard::VersionGuard;
use crate::graph::{Graph, Subgraph};
use crate::{Error, Result};

/// Returns an error if the node position is invalid for the graph.
fn check_start<G: Graph + ?Sized>(graph: &G, start: usize) -> Result<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(Error::out_of_range(start, graph.node_count()))
    }
}

/// Starts a breadth-first search.
///
/// Each node reachable from `start` is yielded exactly once, in the order it
/// is discovered. If `omit_start` is true, the start node itself is not
/// yielded.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `start` is not a valid node position.
///
/// # Examples
///
/// ```
/// use pretree::graph::{self, AdjacencyGraph, GraphMut};
///
/// // 0 - 1 - 3
/// //  \
/// //   2
/// let mut graph: AdjacencyGraph<()> = AdjacencyGraph::new();
/// for _ in 0..4 {
///     graph.add_node(());
/// }
/// graph.add_edge(0, 1)?;
/// graph.add_edge(0, 2)?;
/// graph.add_edge(1, 3)?;
///
/// let order = graph::breadth_first_search(&graph, 0, false)?
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(order, [0, 1, 2, 3]);
/// # Ok::<_, pretree::Error>(())
/// ```
pub fn breadth_first_search<G: Graph + ?Sized>(
    graph: &G,
    start: usize,
    omit_start: bool,
) -> Result<BreadthFirstSearch<'_, G>> {
    check_start(graph, start)?;
    let mut visited = vec![false; graph.node_count()];
    visited[start] = true;
    Ok(BreadthFirstSearch {
        graph,
        visited,
        pending: iter::once(start).collect(),
        omit: omit_start.then(|| start),
        guard: VersionGuard::new(graph),
    })
}

/// Lazy breadth-first search.
///
/// Created by [`breadth_first_search`].
pub struct BreadthFirstSearch<'a, G: ?Sized> {
    /// Graph.
    graph: &'a G,
    /// Discovered nodes.
    visited: Vec<bool>,
    /// Discovered nodes whose neighbors are not yet examined.
    pending: VecDeque<usize>,
    /// Node not to be yielded.
    omit: Option<usize>,
    /// Structural version guard.
    guard: VersionGuard,
}

impl<G: Graph + ?Sized> Iterator for BreadthFirstSearch<'_, G> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Err(e) = self.guard.check(self.graph)? {
                return Some(Err(e));
            }
            let node = self.pending.pop_front()?;
            for neighbor in self.graph.neighbors(node) {
                if !self.visited[neighbor] {
                    self.visited[neighbor] = true;
                    self.pending.push_back(neighbor);
                }
            }
            if self.omit != Some(node) {
                return Some(Ok(node));
            }
        }
    }
}

impl<G: Graph + ?Sized> iter::FusedIterator for BreadthFirstSearch<'_, G> {}

impl<G: ?Sized> fmt::Debug for BreadthFirstSearch<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirstSearch")
            .field("pending", &self.pending)
            .field("omit", &self.omit)
            .finish_non_exhaustive()
    }
}

/// Starts a depth-first search.
///
/// Each node reachable from `start` is yielded exactly once, in preorder of
/// the depth-first search tree. If `omit_start` is true, the start node itself
/// is not yielded.
///
/// The search keeps an explicit stack of neighbor iterators, so its depth is
/// not limited by the call stack.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `start` is not a valid node position.
pub fn depth_first_search<G: Graph + ?Sized>(
    graph: &G,
    start: usize,
    omit_start: bool,
) -> Result<DepthFirstSearch<'_, G>> {
    check_start(graph, start)?;
    let mut visited = vec![false; graph.node_count()];
    visited[start] = true;
    Ok(DepthFirstSearch::with_visited(
        graph, start, omit_start, visited,
    ))
}

/// Lazy depth-first search.
///
/// Created by [`depth_first_search`].
pub struct DepthFirstSearch<'a, G: Graph + ?Sized + 'a> {
    /// Graph.
    graph: &'a G,
    /// Discovered nodes.
    visited: Vec<bool>,
    /// Start node, until it is yielded.
    start: Option<usize>,
    /// Neighbor iterators of the nodes on the current path.
    stack: Vec<G::Neighbors<'a>>,
    /// Structural version guard.
    guard: VersionGuard,
}

impl<'a, G: Graph + ?Sized> DepthFirstSearch<'a, G> {
    /// Creates a search with the given discovered set.
    ///
    /// `start` must already be marked as visited.
    fn with_visited(graph: &'a G, start: usize, omit_start: bool, visited: Vec<bool>) -> Self {
        debug_assert!(visited[start], "[precondition] start must be marked");
        Self {
            graph,
            visited,
            start: (!omit_start).then(|| start),
            stack: vec![graph.neighbors(start)],
            guard: VersionGuard::new(graph),
        }
    }

    /// Returns the discovered set, consuming the search.
    fn into_visited(self) -> Vec<bool> {
        self.visited
    }
}

impl<G: Graph + ?Sized> Iterator for DepthFirstSearch<'_, G> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.guard.check(self.graph)? {
            return Some(Err(e));
        }
        if let Some(start) = self.start.take() {
            return Some(Ok(start));
        }
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(neighbor) if !self.visited[neighbor] => {
                    self.visited[neighbor] = true;
                    self.stack.push(self.graph.neighbors(neighbor));
                    return Some(Ok(neighbor));
                }
                Some(_) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<G: Graph + ?Sized> iter::FusedIterator for DepthFirstSearch<'_, G> {}

impl<G: Graph + ?Sized> fmt::Debug for DepthFirstSearch<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirstSearch")
            .field("start", &self.start)
            .field("depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// Splits the graph into its connected components.
///
/// Components are yielded lazily, ordered by their lowest node position. Every
/// node belongs to exactly one component. Each component is the subgraph
/// induced by the nodes reachable from its lowest node.
///
/// # Examples
///
/// ```
/// use pretree::graph::{self, AdjacencyGraph, GraphMut};
///
/// let mut graph: AdjacencyGraph<char> = AdjacencyGraph::new();
/// for c in ['a', 'b', 'c', 'd'] {
///     graph.add_node(c);
/// }
/// graph.add_edge(0, 2)?;
/// graph.add_edge(1, 3)?;
///
/// let components = graph::connected_components(&graph)
///     .map(|c| c.map(|sub| sub.members().to_vec()))
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(components, [vec![0, 2], vec![1, 3]]);
/// # Ok::<_, pretree::Error>(())
/// ```
pub fn connected_components<G: Graph + ?Sized>(graph: &G) -> Components<'_, G> {
    Components {
        graph,
        visited: vec![false; graph.node_count()],
        seed: 0,
        guard: VersionGuard::new(graph),
    }
}

/// Lazy connected component extraction.
///
/// Created by [`connected_components`].
pub struct Components<'a, G: ?Sized> {
    /// Graph.
    graph: &'a G,
    /// Nodes already assigned to a component.
    visited: Vec<bool>,
    /// Lowest position that may not be assigned yet.
    seed: usize,
    /// Structural version guard.
    guard: VersionGuard,
}

impl<'a, G: Graph + ?Sized> Iterator for Components<'a, G> {
    type Item = Result<Subgraph<'a, G>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.guard.check(self.graph)? {
            return Some(Err(e));
        }
        let offset = self.visited[self.seed..].iter().position(|v| !v)?;
        let seed = self.seed + offset;
        self.visited[seed] = true;

        let visited = core::mem::take(&mut self.visited);
        let mut search = DepthFirstSearch::with_visited(self.graph, seed, false, visited);
        let mut members = Vec::new();
        for node in &mut search {
            match node {
                Ok(node) => members.push(node),
                Err(e) => {
                    self.guard.trip();
                    return Some(Err(e));
                }
            }
        }
        self.visited = search.into_visited();
        self.seed = seed + 1;

        debug!("component of {} nodes seeded at {}", members.len(), seed);
        Some(Ok(Subgraph::new(self.graph, members)))
    }
}

impl<G: Graph + ?Sized> iter::FusedIterator for Components<'_, G> {}

impl<G: ?Sized> fmt::Debug for Components<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Components")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
