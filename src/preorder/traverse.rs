//! Iterators over related nodes.

use core::iter;

use crate::preorder::{Node, PreorderTree};
use crate::tree::{ChildIndices, Tree};

/// Iterator of the neighbors of a node in the undirected tree graph.
///
/// Yields the parent (if any), and then the children in order.
#[derive(Debug)]
pub struct TreeNeighbors<'a, T> {
    /// Parent, not yet yielded.
    parent: Option<usize>,
    /// Children.
    children: ChildIndices<'a, PreorderTree<T>>,
}

impl<'a, T> TreeNeighbors<'a, T> {
    /// Creates a new iterator.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid position.
    pub(super) fn new(tree: &'a PreorderTree<T>, index: usize) -> Self {
        Self {
            parent: tree.parent(index),
            children: tree.children(index),
        }
    }
}

impl<T> Clone for TreeNeighbors<'_, T> {
    fn clone(&self) -> Self {
        Self {
            parent: self.parent,
            children: self.children.clone(),
        }
    }
}

impl<T> Iterator for TreeNeighbors<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.parent.take().or_else(|| self.children.next())
    }
}

impl<T> iter::FusedIterator for TreeNeighbors<'_, T> {}

/// Iterator of children.
#[derive(Debug)]
pub struct Children<'a, T> {
    /// Tree.
    tree: &'a PreorderTree<T>,
    /// Positions of the remaining children.
    indices: ChildIndices<'a, PreorderTree<T>>,
}

impl<'a, T> Children<'a, T> {
    /// Creates a new iterator.
    pub(super) fn new(tree: &'a PreorderTree<T>, parent: usize) -> Self {
        Self {
            tree,
            indices: tree.children(parent),
        }
    }
}

impl<T> Clone for Children<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            indices: self.indices.clone(),
        }
    }
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = Node<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        Some(
            self.tree
                .node(index)
                .expect("[consistency] a child must be in the tree"),
        )
    }
}

impl<T> iter::FusedIterator for Children<'_, T> {}

/// Iterator of ancestors, from the parent to the root.
#[derive(Debug)]
pub struct Ancestors<'a, T> {
    /// Tree.
    tree: &'a PreorderTree<T>,
    /// Node whose parent is yielded next.
    current: Option<usize>,
}

impl<'a, T> Ancestors<'a, T> {
    /// Creates a new iterator.
    pub(super) fn new(tree: &'a PreorderTree<T>, index: usize) -> Self {
        Self {
            tree,
            current: Some(index),
        }
    }
}

impl<T> Clone for Ancestors<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = Node<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let parent = self.tree.parent(self.current?);
        self.current = parent;
        parent.map(|index| {
            self.tree
                .node(index)
                .expect("[consistency] an ancestor must be in the tree")
        })
    }
}

impl<T> iter::FusedIterator for Ancestors<'_, T> {}
