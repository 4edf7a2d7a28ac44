//! A* shortest path search.

use core::cmp::Ordering;

use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::graph::{Cost, WeightedGraph};
use crate::{Error, Result};

/// Error returned when a path cost does not fit in the weight type.
const OVERFLOW: Error = Error::InvalidArgument("path cost overflows the weight type");

/// Frontier entry.
///
/// Ordered so that the max-heap pops the smallest estimated total cost first,
/// and among equal estimates the entry inserted first.
#[derive(Debug, Clone, Copy)]
struct Frontier<W> {
    /// Estimated total cost through the node (`g + h`).
    estimate: W,
    /// Insertion sequence number.
    seq: u64,
    /// Node position.
    node: usize,
    /// Cost from the start when this entry was pushed.
    cost: W,
}

impl<W: PartialOrd> PartialEq for Frontier<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Frontier<W> {}

impl<W: PartialOrd> PartialOrd for Frontier<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for Frontier<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Incomparable estimates (NaN) are rejected before they are pushed.
        other
            .estimate
            .partial_cmp(&self.estimate)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Finds a cheapest path from `start` to `target` with A* search.
///
/// `heuristic(node, target)` estimates the remaining cost from `node`. It must
/// never be negative; if it never overestimates the true remaining cost, the
/// returned path is a cheapest one.
///
/// Returns the node positions of the path, from `start` to `target`
/// inclusive. If `target` is unreachable, the returned path is empty.
///
/// Among frontier nodes with the same estimated total cost, the one inserted
/// (or last re-inserted with an improved cost) earliest is expanded first, so
/// results are reproducible.
///
/// # Errors
///
/// * [`Error::IndexOutOfRange`] if `start` or `target` is not a valid node
///   position.
/// * [`Error::InvalidArgument`] if an edge weight or heuristic value met
///   during the search is negative or not comparable, if a path cost met
///   during the search overflows the weight type, or if the graph reports a
///   neighbor without an edge weight.
///
/// # Examples
///
/// ```
/// use pretree::graph::{self, AdjacencyGraph, GraphMut, WeightedGraphMut};
///
/// // 0 --1-- 1 --1-- 2
/// //  \_____5_______/
/// let mut graph: AdjacencyGraph<(), u32> = AdjacencyGraph::new();
/// for _ in 0..3 {
///     graph.add_node(());
/// }
/// graph.add_weighted_edge(0, 1, 1)?;
/// graph.add_weighted_edge(1, 2, 1)?;
/// graph.add_weighted_edge(0, 2, 5)?;
///
/// let path = graph::astar(&graph, 0, 2, |_, _| 0)?;
/// assert_eq!(path, [0, 1, 2]);
/// assert_eq!(graph::path_cost(&graph, &path), Some(2));
/// # Ok::<_, pretree::Error>(())
/// ```
pub fn astar<G, H>(graph: &G, start: usize, target: usize, mut heuristic: H) -> Result<Vec<usize>>
where
    G: WeightedGraph + ?Sized,
    G::Weight: Cost,
    H: FnMut(usize, usize) -> G::Weight,
{
    let len = graph.node_count();
    for index in [start, target] {
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }
    }
    let zero = G::Weight::zero();
    let mut estimate = |node: usize, cost: G::Weight| -> Result<G::Weight> {
        let h = heuristic(node, target);
        if h >= zero {
            cost.checked_add(h).ok_or(OVERFLOW)
        } else {
            Err(Error::InvalidArgument(
                "heuristic values must be non-negative",
            ))
        }
    };

    let mut best: Vec<Option<G::Weight>> = vec![None; len];
    let mut came_from: Vec<Option<usize>> = vec![None; len];
    let mut closed = vec![false; len];
    let mut open = BinaryHeap::new();
    let mut seq = 0_u64;

    best[start] = Some(zero);
    open.push(Frontier {
        estimate: estimate(start, zero)?,
        seq,
        node: start,
        cost: zero,
    });

    let mut expanded = 0_usize;
    while let Some(Frontier { node, cost, .. }) = open.pop() {
        if closed[node] || best[node].map_or(false, |b| b < cost) {
            // Stale entry superseded by a cheaper re-insertion.
            continue;
        }
        if node == target {
            let path = reconstruct(&came_from, start, target);
            debug!(
                "A* reached {} from {} in {} steps after {} expansions",
                target,
                start,
                path.len() - 1,
                expanded
            );
            return Ok(path);
        }
        closed[node] = true;
        expanded += 1;

        for neighbor in graph.neighbors(node) {
            if closed[neighbor] {
                continue;
            }
            let weight = graph.edge_weight(node, neighbor).ok_or(Error::InvalidArgument(
                "the graph reports a neighbor without an edge weight",
            ))?;
            if weight.partial_cmp(&zero).map_or(true, Ordering::is_lt) {
                return Err(Error::InvalidArgument("edge weights must be non-negative"));
            }
            let tentative = cost.checked_add(weight).ok_or(OVERFLOW)?;
            if best[neighbor].map_or(false, |known| tentative >= known) {
                continue;
            }
            best[neighbor] = Some(tentative);
            came_from[neighbor] = Some(node);
            seq += 1;
            trace!("A* frontier <- {} (cost so far improved)", neighbor);
            open.push(Frontier {
                estimate: estimate(neighbor, tentative)?,
                seq,
                node: neighbor,
                cost: tentative,
            });
        }
    }

    debug!(
        "A* found no path from {} to {} after {} expansions",
        start, target, expanded
    );
    Ok(Vec::new())
}

/// Follows predecessors back from `target` and returns the path in order.
fn reconstruct(came_from: &[Option<usize>], start: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        current = came_from[current]
            .expect("[consistency] every reached node except the start has a predecessor");
        path.push(current);
    }
    path.reverse();
    path
}

/// Returns the sum of the edge weights along the path.
///
/// Returns `None` if the path is empty, two consecutive nodes are not joined
/// by an edge, or the sum overflows the weight type. A single-node path costs
/// zero.
#[must_use]
pub fn path_cost<G>(graph: &G, path: &[usize]) -> Option<G::Weight>
where
    G: WeightedGraph + ?Sized,
    G::Weight: Cost,
{
    if path.is_empty() {
        return None;
    }
    path.windows(2).try_fold(G::Weight::zero(), |acc, pair| {
        graph
            .edge_weight(pair[0], pair[1])
            .and_then(|w| acc.checked_add(w))
    })
}
