//! Induced subgraph.

use core::fmt;
use core::iter;

use alloc::vec::Vec;

use crate::graph::{Graph, WeightedGraph};

/// Read-only view of a graph restricted to a subset of its nodes.
///
/// The subgraph has its own dense positions `0..len`, assigned in increasing
/// order of the positions in the underlying graph. Only edges whose both ends
/// are members are visible.
pub struct Subgraph<'a, G: ?Sized> {
    /// Underlying graph.
    graph: &'a G,
    /// Member positions in the underlying graph, sorted and deduplicated.
    members: Vec<usize>,
}

impl<'a, G: Graph + ?Sized> Subgraph<'a, G> {
    /// Creates a subgraph from the member positions of the underlying graph.
    ///
    /// Duplicates are ignored.
    ///
    /// # Panics
    ///
    /// Panics if any of the positions is invalid for the graph.
    #[must_use]
    pub fn new(graph: &'a G, mut members: Vec<usize>) -> Self {
        members.sort_unstable();
        members.dedup();
        assert!(
            members.last().map_or(true, |&last| graph.contains(last)),
            "[precondition] subgraph members must be valid node positions"
        );
        Self { graph, members }
    }

    /// Returns the underlying graph.
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Returns the member positions in the underlying graph, in ascending order.
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Converts a subgraph position to the position in the underlying graph.
    #[inline]
    #[must_use]
    pub fn to_graph_index(&self, index: usize) -> Option<usize> {
        self.members.get(index).copied()
    }

    /// Converts a position in the underlying graph to the subgraph position.
    ///
    /// Returns `None` if the node is not a member.
    #[inline]
    #[must_use]
    pub fn from_graph_index(&self, index: usize) -> Option<usize> {
        self.members.binary_search(&index).ok()
    }

    /// Returns the position in the underlying graph, panicking on a bad position.
    fn outer(&self, index: usize) -> usize {
        self.to_graph_index(index)
            .expect("[precondition] the node position must be valid")
    }
}

impl<G: ?Sized> Clone for Subgraph<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            members: self.members.clone(),
        }
    }
}

impl<G: ?Sized> fmt::Debug for Subgraph<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subgraph")
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}

impl<'a, G: Graph + ?Sized> Graph for Subgraph<'a, G> {
    type Value = G::Value;
    type Neighbors<'s> = SubgraphNeighbors<'s, G> where Self: 's;

    #[inline]
    fn node_count(&self) -> usize {
        self.members.len()
    }

    fn value(&self, index: usize) -> Option<&G::Value> {
        self.graph.value(self.to_graph_index(index)?)
    }

    fn neighbors(&self, index: usize) -> SubgraphNeighbors<'_, G> {
        SubgraphNeighbors {
            members: &self.members,
            inner: self.graph.neighbors(self.outer(index)),
        }
    }

    fn are_adjacent(&self, from: usize, to: usize) -> bool {
        match self.to_graph_index(to) {
            Some(to) => self.graph.are_adjacent(self.outer(from), to),
            None => false,
        }
    }

    #[inline]
    fn version(&self) -> u64 {
        self.graph.version()
    }
}

impl<'a, G: WeightedGraph + ?Sized> WeightedGraph for Subgraph<'a, G> {
    type Weight = G::Weight;

    fn edge_weight(&self, from: usize, to: usize) -> Option<G::Weight> {
        self.graph
            .edge_weight(self.to_graph_index(from)?, self.to_graph_index(to)?)
    }
}

/// Iterator over the neighbors of a [`Subgraph`] node, in subgraph positions.
pub struct SubgraphNeighbors<'s, G: Graph + ?Sized + 's> {
    /// Members of the subgraph.
    members: &'s [usize],
    /// Neighbors in the underlying graph.
    inner: G::Neighbors<'s>,
}

impl<'s, G: Graph + ?Sized + 's> Iterator for SubgraphNeighbors<'s, G> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let members = self.members;
        self.inner
            .by_ref()
            .find_map(|outer| members.binary_search(&outer).ok())
    }
}

impl<'s, G: Graph + ?Sized + 's> fmt::Debug for SubgraphNeighbors<'s, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubgraphNeighbors")
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}

impl<'s, G: Graph + ?Sized + 's> iter::FusedIterator for SubgraphNeighbors<'s, G> where
    G::Neighbors<'s>: iter::FusedIterator
{
}
