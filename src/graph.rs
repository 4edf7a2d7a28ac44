//! Graph abstraction and graph algorithms.
//!
//! Nodes are addressed by position: a graph with `n` nodes has positions
//! `0..n`. Positions are dense and may be reassigned by structural mutation,
//! so positions obtained before a mutation must not be reused after it.

mod adjacency;
mod astar;
pub(crate) mod guard;
mod search;
mod subgraph;

use core::ops::Add;

use crate::Result;

pub use self::adjacency::{AdjacencyGraph, Neighbors};
pub use self::astar::{astar, path_cost};
pub use self::search::{
    breadth_first_search, connected_components, depth_first_search, BreadthFirstSearch,
    Components, DepthFirstSearch,
};
pub use self::subgraph::{Subgraph, SubgraphNeighbors};

/// Read access to a graph.
pub trait Graph {
    /// Value stored in each node.
    type Value;
    /// Iterator over the positions of the neighbors of a node.
    type Neighbors<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes.
    #[must_use]
    fn node_count(&self) -> usize;

    /// Returns true if the graph has no nodes.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Returns true if `index` is a valid node position.
    #[inline]
    #[must_use]
    fn contains(&self, index: usize) -> bool {
        index < self.node_count()
    }

    /// Returns the value of the node, or `None` if the position is invalid.
    #[must_use]
    fn value(&self, index: usize) -> Option<&Self::Value>;

    /// Returns the positions of the nodes adjacent to the given node.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid node position.
    fn neighbors(&self, index: usize) -> Self::Neighbors<'_>;

    /// Returns true if `to` is a neighbor of `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not a valid node position.
    #[must_use]
    fn are_adjacent(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).any(|n| n == to)
    }

    /// Returns the structural version.
    ///
    /// The version changes whenever nodes or edges are added or removed.
    /// Traversals compare it on every step to detect modification.
    #[must_use]
    fn version(&self) -> u64;
}

/// Structural mutation of a graph.
pub trait GraphMut: Graph {
    /// Adds an isolated node and returns its position.
    fn add_node(&mut self, value: Self::Value) -> usize;

    /// Removes the node and all its edges, returning its value.
    ///
    /// Nodes after the removed one move one position down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`][`crate::Error::IndexOutOfRange`] if
    /// `index` is not a valid node position.
    fn remove_node(&mut self, index: usize) -> Result<Self::Value>;

    /// Adds an edge between the nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`][`crate::Error::IndexOutOfRange`] if
    /// either position is invalid.
    fn add_edge(&mut self, from: usize, to: usize) -> Result<()>;

    /// Removes the edge between the nodes.
    ///
    /// Returns `false` if there was no such edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`][`crate::Error::IndexOutOfRange`] if
    /// either position is invalid.
    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool>;

    /// Returns a mutable reference to the value of the node.
    #[must_use]
    fn value_mut(&mut self, index: usize) -> Option<&mut Self::Value>;
}

/// Graph whose edges carry a weight.
pub trait WeightedGraph: Graph {
    /// Edge weight.
    type Weight;

    /// Returns the weight of the edge from `from` to `to`, if the edge exists.
    ///
    /// Every neighbor reported by [`Graph::neighbors`] must have a weight.
    #[must_use]
    fn edge_weight(&self, from: usize, to: usize) -> Option<Self::Weight>;
}

/// Mutation of a weighted graph.
pub trait WeightedGraphMut: WeightedGraph + GraphMut {
    /// Adds an edge with the given weight, replacing the weight if the edge
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`][`crate::Error::IndexOutOfRange`] if
    /// either position is invalid.
    fn add_weighted_edge(&mut self, from: usize, to: usize, weight: Self::Weight) -> Result<()>;

    /// Changes the weight of an existing edge.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`][`crate::Error::IndexOutOfRange`] if either
    ///   position is invalid.
    /// * [`Error::InvalidOperation`][`crate::Error::InvalidOperation`] if the
    ///   edge does not exist.
    fn set_edge_weight(&mut self, from: usize, to: usize, weight: Self::Weight) -> Result<()>;
}

/// Path cost usable by cost-based search.
///
/// This is the arithmetic the search needs from a weight type: a zero, addition,
/// and comparison. It is implemented for all primitive numeric types.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> {
    /// The cost of an empty path.
    #[must_use]
    fn zero() -> Self;

    /// Adds two costs, returning `None` if the sum is not representable.
    ///
    /// Floating point sums never fail; they saturate to infinity.
    #[must_use]
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_cost {
    (int => $($ty:ty),*) => {
        $(
            impl Cost for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }
            }
        )*
    };
    (float => $($ty:ty),*) => {
        $(
            impl Cost for $ty {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}
impl_cost!(int => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_cost!(float => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_zero() {
        assert_eq!(<u32 as Cost>::zero(), 0);
        assert_eq!(<i64 as Cost>::zero() + 3, 3);
        assert_eq!(<f64 as Cost>::zero(), 0.0);
    }

    #[test]
    fn cost_checked_add() {
        assert_eq!(Cost::checked_add(200_u8, 55), Some(255));
        assert_eq!(Cost::checked_add(200_u8, 56), None);
        assert_eq!(Cost::checked_add(i8::MIN, -1), None);
        assert_eq!(Cost::checked_add(f32::MAX, f32::MAX), Some(f32::INFINITY));
    }
}
