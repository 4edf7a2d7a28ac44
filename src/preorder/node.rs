//! Node.

use crate::preorder::debug_print::DebugPrint;
use crate::preorder::traverse::{Ancestors, Children};
use crate::preorder::PreorderTree;
use crate::tree::Tree;

/// Immutable reference to a node.
///
/// A node is a pair of a tree and a position. The handle borrows the tree, so
/// it cannot outlive a structural change; obtain a new one with
/// [`PreorderTree::node`] after attaching or detaching.
#[derive(Debug)]
pub struct Node<'a, T> {
    /// Tree.
    tree: &'a PreorderTree<T>,
    /// Position in preorder.
    index: usize,
}

impl<T> Clone for Node<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<'a, T> Node<'a, T> {
    /// Creates a new `Node` object.
    #[must_use]
    pub(super) fn new(tree: &'a PreorderTree<T>, index: usize) -> Option<Self> {
        if index >= tree.len() {
            return None;
        }
        Some(Self { tree, index })
    }

    /// Creates a node for a position known to be valid.
    fn at(&self, index: usize) -> Self {
        Self::new(self.tree, index).expect("[consistency] the position must be in the tree")
    }

    /// Returns the position of the node.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the tree the node belongs to.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &'a PreorderTree<T> {
        self.tree
    }

    /// Returns a reference to the value of the node.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &'a T {
        &self.tree.values()[self.index]
    }

    /// Returns the number of descendants.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> usize {
        self.tree.weights()[self.index]
    }

    /// Returns the number of nodes in the subtree, including the node itself.
    #[inline]
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        self.weight() + 1
    }

    /// Returns the values of the subtree in preorder.
    ///
    /// The node is the first element.
    #[must_use]
    pub fn subtree_values(&self) -> &'a [T] {
        &self.tree.values()[self.index..=(self.index + self.weight())]
    }

    /// Returns true if the node is the root.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.index == 0
    }

    /// Returns true if the node has no children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.weight() == 0
    }

    /// Returns the number of ancestors.
    ///
    /// The root is depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Returns the parent node.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.tree.parent(self.index).map(|index| self.at(index))
    }

    /// Returns the first child node.
    #[must_use]
    pub fn first_child(&self) -> Option<Self> {
        self.tree.first_child(self.index).map(|index| self.at(index))
    }

    /// Returns the last child node.
    #[must_use]
    pub fn last_child(&self) -> Option<Self> {
        self.children().last()
    }

    /// Returns the next sibling node.
    #[must_use]
    pub fn next_sibling(&self) -> Option<Self> {
        self.tree.next_sibling(self.index).map(|index| self.at(index))
    }

    /// Returns the previous sibling node.
    #[must_use]
    pub fn prev_sibling(&self) -> Option<Self> {
        self.tree.prev_sibling(self.index).map(|index| self.at(index))
    }

    /// Returns an iterator of the children.
    #[inline]
    #[must_use]
    pub fn children(&self) -> Children<'a, T> {
        Children::new(self.tree, self.index)
    }

    /// Returns an iterator of the ancestors, from the parent to the root.
    #[inline]
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'a, T> {
        Ancestors::new(self.tree, self.index)
    }

    /// Returns the pretty-printable proxy object of the subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pretree::TreeBuilder;
    ///
    /// let tree = TreeBuilder::new("root")
    ///     .child("0")
    ///     .child("0-0")
    ///     .sibling("0-1")
    ///     .parent()
    ///     .sibling("1")
    ///     .build();
    /// let root = tree.root().expect("the tree is not empty");
    ///
    /// let printable = root.debug_print();
    /// let expected = "root\n\
    ///                 |-- 0\n\
    ///                 |   |-- 0-0\n\
    ///                 |   `-- 0-1\n\
    ///                 `-- 1";
    /// assert_eq!(printable.to_string(), expected);
    ///
    /// let expected_debug = r#""root"
    /// |-- "0"
    /// |   |-- "0-0"
    /// |   `-- "0-1"
    /// `-- "1""#;
    /// assert_eq!(format!("{:?}", printable), expected_debug);
    /// ```
    #[inline]
    #[must_use]
    pub fn debug_print(&self) -> DebugPrint<'a, T> {
        DebugPrint::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use crate::TreeBuilder;

    #[test]
    fn relations() {
        // a(b(c, d), e)
        let tree = TreeBuilder::new('a')
            .child('b')
            .child('c')
            .sibling('d')
            .parent()
            .sibling('e')
            .build();
        let d = tree.node(3).expect("valid position");
        assert_eq!(*d.value(), 'd');
        assert_eq!(d.depth(), 2);
        assert_eq!(d.prev_sibling().map(|n| *n.value()), Some('c'));
        assert!(d.next_sibling().is_none());
        assert_eq!(
            d.ancestors().map(|n| *n.value()).collect::<Vec<_>>(),
            ['b', 'a']
        );

        let b = d.parent().expect("d has a parent");
        assert_eq!(b.subtree_len(), 3);
        assert_eq!(b.subtree_values(), &['b', 'c', 'd']);
        assert_eq!(b.last_child().map(|n| n.index()), Some(3));
        assert!(!b.is_leaf());
        assert!(b.parent().map_or(false, |n| n.is_root()));
    }
}
