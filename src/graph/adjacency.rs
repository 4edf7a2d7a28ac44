//! Adjacency-list graph.

use core::iter;
use core::slice;

use alloc::vec::Vec;

use log::trace;

use crate::graph::{Graph, GraphMut, WeightedGraph, WeightedGraphMut};
use crate::{Error, Result};

/// Undirected graph stored as adjacency lists.
///
/// Each edge is recorded in the lists of both endpoints, so
/// `are_adjacent(a, b) == are_adjacent(b, a)`. Neighbors are enumerated in the
/// order their edges were added. A self loop is recorded once.
///
/// # Examples
///
/// ```
/// use pretree::graph::{AdjacencyGraph, Graph, GraphMut};
///
/// let mut graph: AdjacencyGraph<&str> = AdjacencyGraph::new();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// let c = graph.add_node("c");
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
///
/// assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), [b, c]);
/// assert!(graph.are_adjacent(c, a));
///
/// // Positions are dense: removing `a` moves `b` and `c` down.
/// assert_eq!(graph.remove_node(a)?, "a");
/// assert_eq!(graph.value(0), Some(&"b"));
/// assert!(!graph.are_adjacent(0, 1));
/// # Ok::<_, pretree::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<T, W = ()> {
    /// Node values.
    values: Vec<T>,
    /// Adjacency lists with edge weights, parallel to `values`.
    edges: Vec<Vec<(usize, W)>>,
    /// Structural version.
    version: u64,
}

impl<T, W> AdjacencyGraph<T, W> {
    /// Creates an empty graph.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let (loops, ends) = self.edges.iter().enumerate().fold(
            (0, 0),
            |(loops, ends), (node, list)| {
                let own = list.iter().filter(|(to, _)| *to == node).count();
                (loops + own, ends + list.len() - own)
            },
        );
        loops + ends / 2
    }

    /// Returns the node values in position order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns an error if the position is invalid.
    fn check(&self, index: usize) -> Result<()> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(Error::out_of_range(index, self.values.len()))
        }
    }

    /// Records that the structure changed.
    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Returns the position of `to` in the adjacency list of `from`.
    fn position_in_list(&self, from: usize, to: usize) -> Option<usize> {
        self.edges[from].iter().position(|(n, _)| *n == to)
    }

    /// Inserts or overwrites the edge in both adjacency lists.
    fn put_edge(&mut self, from: usize, to: usize, weight: W)
    where
        W: Clone,
    {
        let put = |edges: &mut Vec<(usize, W)>, to: usize, weight: W| {
            match edges.iter_mut().find(|(n, _)| *n == to) {
                Some(entry) => entry.1 = weight,
                None => edges.push((to, weight)),
            }
        };
        if from != to {
            put(&mut self.edges[to], from, weight.clone());
        }
        put(&mut self.edges[from], to, weight);
    }
}

impl<T, W> Default for AdjacencyGraph<T, W> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            edges: Vec::new(),
            version: 0,
        }
    }
}

impl<T, W> Graph for AdjacencyGraph<T, W> {
    type Value = T;
    type Neighbors<'a> = Neighbors<'a, W> where Self: 'a;

    #[inline]
    fn node_count(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn value(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    fn neighbors(&self, index: usize) -> Neighbors<'_, W> {
        let list = self
            .edges
            .get(index)
            .expect("[precondition] the node position must be valid");
        Neighbors { inner: list.iter() }
    }

    fn are_adjacent(&self, from: usize, to: usize) -> bool {
        self.position_in_list(from, to).is_some()
    }

    #[inline]
    fn version(&self) -> u64 {
        self.version
    }
}

impl<T, W: Clone + Default> GraphMut for AdjacencyGraph<T, W> {
    fn add_node(&mut self, value: T) -> usize {
        let index = self.values.len();
        self.values.push(value);
        self.edges.push(Vec::new());
        self.bump();
        trace!("added node {}", index);
        index
    }

    fn remove_node(&mut self, index: usize) -> Result<T> {
        self.check(index)?;
        let value = self.values.remove(index);
        self.edges.remove(index);
        for list in &mut self.edges {
            list.retain(|(to, _)| *to != index);
            for (to, _) in list.iter_mut() {
                if *to > index {
                    *to -= 1;
                }
            }
        }
        self.bump();
        trace!("removed node {}, {} nodes left", index, self.values.len());
        Ok(value)
    }

    fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.add_weighted_edge(from, to, W::default())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check(from)?;
        self.check(to)?;
        let pos = match self.position_in_list(from, to) {
            Some(v) => v,
            None => return Ok(false),
        };
        self.edges[from].remove(pos);
        if from != to {
            let back = self
                .position_in_list(to, from)
                .expect("[consistency] undirected edges are recorded at both ends");
            self.edges[to].remove(back);
        }
        self.bump();
        trace!("removed edge {} -- {}", from, to);
        Ok(true)
    }

    #[inline]
    fn value_mut(&mut self, index: usize) -> Option<&mut T> {
        self.values.get_mut(index)
    }
}

impl<T, W: Clone> WeightedGraph for AdjacencyGraph<T, W> {
    type Weight = W;

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.edges
            .get(from)?
            .iter()
            .find(|(n, _)| *n == to)
            .map(|(_, w)| w.clone())
    }
}

impl<T, W: Clone + Default> WeightedGraphMut for AdjacencyGraph<T, W> {
    fn add_weighted_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        self.put_edge(from, to, weight);
        self.bump();
        trace!("added edge {} -- {}", from, to);
        Ok(())
    }

    fn set_edge_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        if self.position_in_list(from, to).is_none() {
            return Err(Error::InvalidOperation("the edge does not exist"));
        }
        // Weight changes are not structural; the version is kept.
        self.put_edge(from, to, weight);
        Ok(())
    }
}

/// Iterator over the neighbor positions of an [`AdjacencyGraph`] node.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, W> {
    /// Adjacency list entries.
    inner: slice::Iter<'a, (usize, W)>,
}

impl<W> Iterator for Neighbors<'_, W> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.inner.next().map(|(to, _)| *to)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<W> ExactSizeIterator for Neighbors<'_, W> {}

impl<W> iter::FusedIterator for Neighbors<'_, W> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> AdjacencyGraph<char, u32> {
        let mut graph = AdjacencyGraph::new();
        for c in ['a', 'b', 'c'] {
            graph.add_node(c);
        }
        graph.add_weighted_edge(0, 1, 1).expect("valid positions");
        graph.add_weighted_edge(1, 2, 2).expect("valid positions");
        graph.add_weighted_edge(2, 0, 3).expect("valid positions");
        graph
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = triangle();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight(1, 0), Some(1));
        assert_eq!(graph.edge_weight(0, 2), Some(3));
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn readding_an_edge_overwrites_the_weight() {
        let mut graph = triangle();
        graph.add_weighted_edge(1, 0, 7).expect("valid positions");
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight(0, 1), Some(7));
    }

    #[test]
    fn self_loop_is_recorded_once() {
        let mut graph = triangle();
        graph.add_edge(1, 1).expect("valid positions");
        assert_eq!(graph.neighbors(1).filter(|&n| n == 1).count(), 1);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.remove_edge(1, 1).expect("valid positions"));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn remove_node_renumbers() {
        let mut graph = triangle();
        let version = graph.version();
        assert_eq!(graph.remove_node(0), Ok('a'));
        assert_ne!(graph.version(), version);
        assert_eq!(graph.values(), &['b', 'c']);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), [1]);
        assert_eq!(graph.edge_weight(0, 1), Some(2));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn set_weight_of_missing_edge() {
        let mut graph = triangle();
        graph.remove_edge(0, 1).expect("valid positions");
        assert_eq!(
            graph.set_edge_weight(0, 1, 5),
            Err(Error::InvalidOperation("the edge does not exist"))
        );
        assert_eq!(
            graph.add_edge(0, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
    }
}
