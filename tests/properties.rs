use proptest::prelude::*;

use pretree::graph::{self, AdjacencyGraph, GraphMut, WeightedGraph, WeightedGraphMut};
use pretree::tree::{self, AttachAt, Tree};
use pretree::PreorderTree;

/// Builds a tree by attaching each new node as the last child of a node
/// chosen by the seed.
fn grow(seeds: &[usize]) -> PreorderTree<usize> {
    let mut tree = PreorderTree::with_root(0);
    for (value, &seed) in seeds.iter().enumerate() {
        let parent = seed % tree.len();
        tree.attach_at(
            PreorderTree::with_root(value + 1),
            AttachAt::LastChildOf(parent),
        )
        .expect("the parent is a valid position");
    }
    tree
}

fn arb_tree() -> impl Strategy<Value = PreorderTree<usize>> {
    prop::collection::vec(any::<usize>(), 0..40).prop_map(|seeds| grow(&seeds))
}

proptest! {
    #[test]
    fn weight_is_sum_of_child_subtrees(tree in arb_tree()) {
        for i in 0..tree.len() {
            let sum: usize = tree.children(i).map(|c| tree.weights()[c] + 1).sum();
            prop_assert_eq!(tree.weights()[i], sum);
            prop_assert!(i + tree.weights()[i] < tree.len());
        }
    }

    #[test]
    fn parent_of_first_child(tree in arb_tree()) {
        for i in 0..tree.len() {
            if let Some(child) = tree.first_child(i) {
                prop_assert_eq!(tree.parent(child), Some(i));
            }
            if let Some(next) = tree.next_sibling(i) {
                prop_assert_eq!(tree.prev_sibling(next), Some(i));
                prop_assert_eq!(tree.parent(next), tree.parent(i));
            }
        }
    }

    #[test]
    fn traversals_visit_every_node(tree in arb_tree()) {
        let n = tree.len();
        let pre = tree::preorder(&tree).collect::<Result<Vec<_>, _>>().unwrap();
        prop_assert_eq!(pre, (0..n).collect::<Vec<_>>());

        let mut post = tree::postorder(&tree).collect::<Result<Vec<_>, _>>().unwrap();
        prop_assert_eq!(post.last().copied(), Some(0));
        post.sort_unstable();
        prop_assert_eq!(post, (0..n).collect::<Vec<_>>());

        let mut level = tree::level_order(&tree).collect::<Result<Vec<_>, _>>().unwrap();
        prop_assert_eq!(level.first().copied(), Some(0));
        level.sort_unstable();
        prop_assert_eq!(level, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn attach_then_detach_is_identity(
        tree in arb_tree(),
        subtree in arb_tree(),
        seed in any::<usize>(),
    ) {
        let parent = seed % tree.len();
        let mut grown = tree.clone();
        grown.attach(subtree.clone(), parent).unwrap();
        prop_assert_eq!(grown.len(), tree.len() + subtree.len());
        prop_assert_eq!(grown.weights()[0] + 1, grown.len());

        let detached = grown.detach(parent + 1).unwrap();
        prop_assert_eq!(detached, subtree);
        prop_assert_eq!(grown, tree);
    }

    #[test]
    fn detach_keeps_both_parts_valid(tree in arb_tree(), seed in any::<usize>()) {
        let index = seed % tree.len();
        let mut rest = tree.clone();
        let detached = rest.detach(index).unwrap();
        prop_assert_eq!(detached.len(), tree.weights()[index] + 1);
        prop_assert_eq!(detached.len() + rest.len(), tree.len());

        let (values, weights) = rest.into_parts();
        prop_assert!(PreorderTree::from_parts(values, weights).is_ok());
        let (values, weights) = detached.into_parts();
        prop_assert!(PreorderTree::from_parts(values, weights).is_ok());
    }

    #[test]
    fn searches_over_tree_reach_everything(tree in arb_tree(), seed in any::<usize>()) {
        let start = seed % tree.len();
        let mut bfs = graph::breadth_first_search(&tree, start, false)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let mut dfs = graph::depth_first_search(&tree, start, false)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        bfs.sort_unstable();
        dfs.sort_unstable();
        prop_assert_eq!(&bfs, &(0..tree.len()).collect::<Vec<_>>());
        prop_assert_eq!(bfs, dfs);
    }

    #[test]
    fn astar_finds_shortest_distance(
        n in 1_usize..10,
        edges in prop::collection::vec((any::<usize>(), any::<usize>(), 0_u32..10), 0..30),
    ) {
        let mut graph: AdjacencyGraph<(), u32> = AdjacencyGraph::new();
        for _ in 0..n {
            graph.add_node(());
        }
        // Reference distances by Floyd-Warshall.
        let mut dist = vec![vec![None::<u32>; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        for (from, to, weight) in edges {
            let (from, to) = (from % n, to % n);
            graph.add_weighted_edge(from, to, weight).unwrap();
        }
        for from in 0..n {
            for to in 0..n {
                if from != to {
                    if let Some(w) = graph.edge_weight(from, to) {
                        dist[from][to] = Some(w);
                    }
                }
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                        if dist[i][j].map_or(true, |d| a + b < d) {
                            dist[i][j] = Some(a + b);
                        }
                    }
                }
            }
        }

        for target in 0..n {
            let path = graph::astar(&graph, 0, target, |_, _| 0).unwrap();
            prop_assert_eq!(graph::path_cost(&graph, &path), dist[0][target]);
        }
    }
}
