use pretty_assertions::assert_eq;

use pretree::graph::Graph;
use pretree::tree::{AttachAt, BinaryTree, Tree, TreeMut};
use pretree::{Error, PreorderTree, TreeBuilder};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

//  A
//  |-- B
//  |   `-- D
//  `-- C
fn abdc() -> PreorderTree<&'static str> {
    TreeBuilder::new("A")
        .child("B")
        .child("D")
        .parent()
        .sibling("C")
        .build()
}

fn value_of(tree: &PreorderTree<&'static str>, index: Option<usize>) -> Option<&'static str> {
    index.map(|index| tree.values()[index])
}

#[test]
fn encoding() {
    let tree = abdc();
    assert_eq!(tree.values(), &["A", "B", "D", "C"]);
    assert_eq!(tree.weights(), &[3, 1, 0, 0]);
    assert_eq!(tree.len(), 4);
    assert!(!tree.is_empty());
}

#[test]
fn navigation() {
    let tree = abdc();
    assert_eq!(value_of(&tree, tree.parent(2)), Some("B"));
    assert_eq!(value_of(&tree, tree.parent(3)), Some("A"));
    assert_eq!(value_of(&tree, tree.parent(0)), None);
    assert_eq!(
        tree.children(0).map(|i| tree.values()[i]).collect::<Vec<_>>(),
        ["B", "C"]
    );
    assert_eq!(value_of(&tree, tree.next_sibling(1)), Some("C"));
    assert_eq!(value_of(&tree, tree.next_sibling(2)), None);
    assert_eq!(value_of(&tree, tree.prev_sibling(3)), Some("B"));
    assert!(tree.is_leaf(3));
}

#[test]
fn detach_inner_node() {
    init_logger();

    let mut tree = abdc();
    let b = tree.detach(1).expect("valid position");
    assert_eq!(tree.values(), &["A", "C"]);
    assert_eq!(tree.weights(), &[1, 0]);
    assert_eq!(b.values(), &["B", "D"]);
    assert_eq!(b.weights(), &[1, 0]);
}

#[test]
fn attach_then_detach_restores() {
    init_logger();

    let original = abdc();
    let subtree = TreeBuilder::new("X").child("Y").sibling("Z").build();

    let mut tree = original.clone();
    tree.attach(subtree.clone(), 1).expect("valid parent");
    assert_eq!(tree.values(), &["A", "B", "X", "Y", "Z", "D", "C"]);
    assert_eq!(tree.weights(), &[6, 4, 2, 0, 0, 0, 0]);

    let detached = tree.detach(2).expect("valid position");
    assert_eq!(detached, subtree);
    assert_eq!(tree, original);
}

#[test]
fn attach_through_trait() {
    fn graft<T: TreeMut>(tree: &mut T, subtree: T) -> Result<(), Error> {
        let root = tree.root().expect("the tree is not empty");
        tree.attach_at(subtree, AttachAt::LastChildOf(root))
    }

    let mut tree = abdc();
    graft(&mut tree, PreorderTree::with_root("E")).expect("valid destination");
    assert_eq!(tree.values(), &["A", "B", "D", "C", "E"]);
    assert_eq!(tree.weights(), &[4, 1, 0, 0, 0]);
}

#[test]
fn binary_view() {
    let tree = abdc();
    assert_eq!(value_of(&tree, tree.left(0)), Some("B"));
    assert_eq!(value_of(&tree, tree.right(0)), Some("C"));
    assert_eq!(value_of(&tree, tree.left(1)), Some("D"));
    assert_eq!(value_of(&tree, tree.right(1)), None);
    assert_eq!(value_of(&tree, tree.left(3)), None);
}

#[test]
fn node_handles() {
    let tree = abdc();
    assert_eq!(
        tree.node(4).err(),
        Some(Error::IndexOutOfRange { index: 4, len: 4 })
    );
    let d = tree.node(2).expect("valid position");
    assert_eq!(*d.value(), "D");
    assert_eq!(d.depth(), 2);
    assert!(!d.is_root());
    assert_eq!(
        d.ancestors().map(|n| *n.value()).collect::<Vec<_>>(),
        ["B", "A"]
    );
    let root = tree.root().expect("the tree is not empty");
    assert_eq!(
        root.children().map(|n| *n.value()).collect::<Vec<_>>(),
        ["B", "C"]
    );
    assert_eq!(root.subtree_len(), tree.len());
}

#[test]
fn duplicate_values_are_distinct_nodes() {
    let mut tree = TreeBuilder::new(1).child(1).child(1).parent().sibling(1).build();
    assert_eq!(tree.parent(2), Some(1));
    assert_eq!(tree.parent(3), Some(0));
    let detached = tree.detach(1).expect("valid position");
    assert_eq!(detached.weights(), &[1, 0]);
    assert_eq!(tree.weights(), &[1, 0]);
}

#[test]
fn graph_view() {
    let tree = abdc();
    assert_eq!(tree.node_count(), 4);
    assert!(tree.are_adjacent(2, 1));
    assert!(tree.are_adjacent(1, 2));
    assert!(!tree.are_adjacent(2, 3));
    assert_eq!(Graph::value(&tree, 3), Some(&"C"));
}

#[test]
fn value_edits_keep_version() {
    let mut tree = abdc();
    *tree.value_mut(3).expect("valid position") = "E";
    assert_eq!(tree.values(), &["A", "B", "D", "E"]);
    assert_eq!(tree.version(), 0);
    assert_eq!(tree.value_mut(4), None);
}

#[test]
fn into_parts_round_trip() {
    let (values, weights) = abdc().into_parts();
    let tree = PreorderTree::from_parts(values, weights).expect("valid encoding");
    assert_eq!(tree, abdc());
}

#[test]
fn debug_print() {
    let tree = abdc();
    let root = tree.root().expect("the tree is not empty");
    assert_eq!(root.debug_print().to_string(), "A\n|-- B\n|   `-- D\n`-- C");
    assert_eq!(
        format!("{:?}", root.debug_print()),
        "\"A\"\n|-- \"B\"\n|   `-- \"D\"\n`-- \"C\""
    );
}
