//! Tree builder.

use core::mem;

use alloc::vec;
use alloc::vec::Vec;

use crate::preorder::PreorderTree;

/// Tree builder.
///
/// `TreeBuilder` remembers "the current node".
///
/// * [`TreeBuilder::child()`][`TreeBuilder::child`] creates a new child node
///   (as the last child) to the current node.
/// * [`TreeBuilder::sibling()`][`TreeBuilder::sibling`] creates a new next
///   sibling of the current node.
/// * [`TreeBuilder::parent()`][`TreeBuilder::parent`] makes the parent the new
///   current node.
///
/// New nodes always land at the end of the preorder sequence, so each
/// insertion only updates the weights of the current path from the root.
///
/// # Examples
///
/// ```
/// use pretree::TreeBuilder;
///
/// let mut builder = TreeBuilder::new("root");
/// builder
///     .child("0")
///     .child("0-0")
///     .sibling("0-1")
///     .parent()
///     .sibling("1")
///     .child("1-0");
///
/// // Tree:
/// //  root
/// //  |-- 0
/// //  |   |-- 0-0
/// //  |   `-- 0-1
/// //  `-- 1
/// //      `-- 1-0 (<-- current)
/// assert_eq!(builder.current_index(), 5);
///
/// builder.parent().sibling("2");
/// let tree = builder.build();
/// assert_eq!(tree.values(), &["root", "0", "0-0", "0-1", "1", "1-0", "2"]);
/// assert_eq!(tree.weights(), &[6, 2, 0, 0, 1, 0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder<T> {
    /// Tree under construction.
    tree: PreorderTree<T>,
    /// Positions of the nodes from the root to the current node.
    path: Vec<usize>,
}

impl<T> TreeBuilder<T> {
    /// Creates a root node and the tree builder for the root node.
    #[must_use]
    pub fn new(root: T) -> Self {
        Self {
            tree: PreorderTree::with_root(root),
            path: vec![0],
        }
    }

    /// Returns a reference to the tree under construction.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &PreorderTree<T> {
        &self.tree
    }

    /// Returns the position of the current node.
    ///
    /// # Panics
    ///
    /// Panics if the tree has already been taken by [`build`][`Self::build`].
    #[inline]
    #[must_use]
    pub fn current_index(&self) -> usize {
        *self
            .path
            .last()
            .expect("[precondition] the builder must not be used after `build`")
    }

    /// Appends a child node to the current node, and changes the current node to it.
    ///
    /// # Panics
    ///
    /// Panics if the tree has already been taken by [`build`][`Self::build`].
    pub fn child(&mut self, value: T) -> &mut Self {
        assert!(
            !self.path.is_empty(),
            "[precondition] the builder must not be used after `build`"
        );
        let index = self.tree.preorder.len();
        self.tree.preorder.push(value);
        self.tree.weights.push(0);
        for &ancestor in &self.path {
            self.tree.weights[ancestor] += 1;
        }
        self.path.push(index);
        self
    }

    /// Adds a next sibling node to the current node, and changes the current node to it.
    ///
    /// # Panics
    ///
    /// Panics if the current node is the root.
    pub fn sibling(&mut self, value: T) -> &mut Self {
        self.parent().child(value)
    }

    /// Tries to change the current node to the parent of the current node.
    pub fn try_parent(&mut self) -> Option<&mut Self> {
        if self.path.len() < 2 {
            return None;
        }
        self.path.pop();
        Some(self)
    }

    /// Changes the current node to the parent of the current node.
    ///
    /// # Panics
    ///
    /// Panics if the current node is the root.
    pub fn parent(&mut self) -> &mut Self {
        self.try_parent()
            .expect("[precondition] the current node should not be the root")
    }

    /// Takes the built tree out of the builder.
    ///
    /// The builder cannot add nodes afterwards.
    #[must_use]
    pub fn build(&mut self) -> PreorderTree<T> {
        self.path.clear();
        mem::take(&mut self.tree)
    }
}
