//! Tree abstraction and tree traversals.

mod traverse;

use core::iter;

use crate::graph::Graph;
use crate::Result;

pub use self::traverse::{
    inorder, inorder_from, level_order, level_order_from, postorder, postorder_from, preorder,
    preorder_from, Inorder, LevelOrder, Postorder, Preorder,
};

/// Rooted tree.
///
/// A tree is a graph that is connected, acyclic, and rooted: every node except
/// the root has exactly one parent. Children of a node are ordered.
///
/// Methods taking a node position panic if the position is invalid, in the
/// same way as [`Graph::neighbors`].
pub trait Tree: Graph {
    /// Returns the root, or `None` if the tree is empty.
    #[must_use]
    fn root(&self) -> Option<usize>;

    /// Returns the parent of the node, or `None` for the root.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid node position.
    #[must_use]
    fn parent(&self, index: usize) -> Option<usize>;

    /// Returns the first child of the node.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid node position.
    #[must_use]
    fn first_child(&self, index: usize) -> Option<usize>;

    /// Returns the next sibling of the node.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid node position.
    #[must_use]
    fn next_sibling(&self, index: usize) -> Option<usize>;

    /// Returns the previous sibling of the node.
    ///
    /// The default implementation walks the siblings forward from the first
    /// child of the parent.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid node position.
    #[must_use]
    fn prev_sibling(&self, index: usize) -> Option<usize> {
        let parent = self.parent(index)?;
        let mut current = self
            .first_child(parent)
            .expect("[consistency] the parent must have a child including the node");
        if current == index {
            return None;
        }
        loop {
            let next = self
                .next_sibling(current)
                .expect("[consistency] the node must be found among the siblings");
            if next == index {
                return Some(current);
            }
            current = next;
        }
    }

    /// Returns an iterator of the children of the node, in order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid node position.
    #[must_use]
    fn children(&self, index: usize) -> ChildIndices<'_, Self> {
        ChildIndices {
            tree: self,
            next: self.first_child(index),
        }
    }

    /// Returns true if the node has no children.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid node position.
    #[inline]
    #[must_use]
    fn is_leaf(&self, index: usize) -> bool {
        self.first_child(index).is_none()
    }
}

/// Structural mutation of a tree by moving whole subtrees.
pub trait TreeMut: Tree + Sized {
    /// Inserts `subtree` at the destination.
    ///
    /// Positions of nodes at or after the insertion point change.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`][`crate::Error::IndexOutOfRange`] if the
    ///   anchor of the destination is not a valid node position.
    /// * [`Error::InvalidArgument`][`crate::Error::InvalidArgument`] if
    ///   `subtree` is empty.
    /// * [`Error::InvalidOperation`][`crate::Error::InvalidOperation`] if the
    ///   destination is a sibling of the root.
    fn attach_at(&mut self, subtree: Self, dest: AttachAt) -> Result<()>;

    /// Inserts `subtree` as the first child of `parent`.
    ///
    /// # Errors
    ///
    /// Same as [`attach_at`][`Self::attach_at`].
    #[inline]
    fn attach(&mut self, subtree: Self, parent: usize) -> Result<()> {
        self.attach_at(subtree, AttachAt::FirstChildOf(parent))
    }

    /// Removes the subtree rooted at the node and returns it as a new tree.
    ///
    /// Detaching the root moves the whole tree out and leaves `self` empty.
    /// Positions of nodes after the removed range change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`][`crate::Error::IndexOutOfRange`] if
    /// `index` is not a valid node position.
    fn detach(&mut self, index: usize) -> Result<Self>;
}

/// Binary tree view of a tree.
///
/// The left child is the first child, and the right child is the sibling
/// right after the left child. A node with a single child therefore has a
/// left child but no right child.
pub trait BinaryTree: Tree {
    /// Returns the left child of the node.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid node position.
    #[inline]
    #[must_use]
    fn left(&self, index: usize) -> Option<usize> {
        self.first_child(index)
    }

    /// Returns the right child of the node.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid node position.
    #[inline]
    #[must_use]
    fn right(&self, index: usize) -> Option<usize> {
        self.left(index).and_then(|left| self.next_sibling(left))
    }
}

/// Destination of an attached subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// All variants have the common suffix "Of", but this is intended.
// Variants would be used as, for example, `AttachAt::FirstChildOf(parent)`.
#[allow(clippy::enum_variant_names)]
pub enum AttachAt {
    /// As the first child.
    FirstChildOf(usize),
    /// As the last child.
    LastChildOf(usize),
    /// As the previous sibling.
    PreviousSiblingOf(usize),
    /// As the next sibling.
    NextSiblingOf(usize),
}

impl AttachAt {
    /// Returns the node position the destination is relative to.
    #[inline]
    #[must_use]
    pub fn anchor(self) -> usize {
        match self {
            Self::FirstChildOf(v)
            | Self::LastChildOf(v)
            | Self::PreviousSiblingOf(v)
            | Self::NextSiblingOf(v) => v,
        }
    }
}

/// Iterator over the children of a node.
///
/// Created by [`Tree::children`].
#[derive(Debug)]
pub struct ChildIndices<'a, T: ?Sized> {
    /// Tree.
    tree: &'a T,
    /// Next child to yield.
    next: Option<usize>,
}

impl<T: ?Sized> Clone for ChildIndices<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
        }
    }
}

impl<T: Tree + ?Sized> Iterator for ChildIndices<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let next = self.next?;
        self.next = self.tree.next_sibling(next);
        Some(next)
    }
}

impl<T: Tree + ?Sized> iter::FusedIterator for ChildIndices<'_, T> {}
