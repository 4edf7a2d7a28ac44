//! Tree traversal.
//!
//! Every traversal keeps its own explicit stack or queue, so the depth of the
//! tree is not limited by the call stack. Traversals borrow the tree and yield
//! node positions; they are lazy and may be dropped at any point.

use core::iter;

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::graph::guard::VersionGuard;
use crate::tree::{BinaryTree, Tree};
use crate::{Error, Result};

/// Returns an error if the node position is invalid for the tree.
fn check_toplevel<T: Tree + ?Sized>(tree: &T, index: usize) -> Result<()> {
    if tree.contains(index) {
        Ok(())
    } else {
        Err(Error::out_of_range(index, tree.node_count()))
    }
}

/// Returns the preorder traversal of the whole tree.
///
/// Each node is yielded before its children, children in order.
/// An empty tree yields nothing.
#[must_use]
pub fn preorder<T: Tree + ?Sized>(tree: &T) -> Preorder<'_, T> {
    Preorder::with_toplevel(tree, tree.root())
}

/// Returns the preorder traversal of the subtree rooted at `index`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `index` is not a valid node position.
pub fn preorder_from<T: Tree + ?Sized>(tree: &T, index: usize) -> Result<Preorder<'_, T>> {
    check_toplevel(tree, index)?;
    Ok(Preorder::with_toplevel(tree, Some(index)))
}

/// Preorder traversal.
#[derive(Debug)]
pub struct Preorder<'a, T: ?Sized> {
    /// Tree.
    tree: &'a T,
    /// Next node to visit at each depth.
    ///
    /// The first entry is the toplevel, whose siblings are never visited.
    stack: Vec<Option<usize>>,
    /// Structural version guard.
    guard: VersionGuard,
}

impl<'a, T: Tree + ?Sized> Preorder<'a, T> {
    /// Creates a traversal from a toplevel node.
    ///
    /// The toplevel does not need to be the root of a tree.
    fn with_toplevel(tree: &'a T, toplevel: Option<usize>) -> Self {
        Self {
            tree,
            stack: toplevel.into_iter().map(Some).collect(),
            guard: VersionGuard::new(tree),
        }
    }
}

impl<T: Tree + ?Sized> Iterator for Preorder<'_, T> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.guard.check(self.tree)? {
            return Some(Err(e));
        }
        loop {
            let depth = self.stack.len();
            let cursor = self.stack.last_mut()?;
            match *cursor {
                Some(node) => {
                    *cursor = if depth > 1 {
                        self.tree.next_sibling(node)
                    } else {
                        None
                    };
                    if let Some(child) = self.tree.first_child(node) {
                        self.stack.push(Some(child));
                    }
                    return Some(Ok(node));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<T: Tree + ?Sized> iter::FusedIterator for Preorder<'_, T> {}

/// Returns the postorder traversal of the whole tree.
///
/// Each node is yielded after all of its children, children in order.
/// An empty tree yields nothing.
#[must_use]
pub fn postorder<T: Tree + ?Sized>(tree: &T) -> Postorder<'_, T> {
    Postorder::with_toplevel(tree, tree.root())
}

/// Returns the postorder traversal of the subtree rooted at `index`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `index` is not a valid node position.
pub fn postorder_from<T: Tree + ?Sized>(tree: &T, index: usize) -> Result<Postorder<'_, T>> {
    check_toplevel(tree, index)?;
    Ok(Postorder::with_toplevel(tree, Some(index)))
}

/// Postorder traversal.
#[derive(Debug)]
pub struct Postorder<'a, T: ?Sized> {
    /// Tree.
    tree: &'a T,
    /// Nodes on the current path, each with its next unvisited child.
    stack: Vec<(usize, Option<usize>)>,
    /// Structural version guard.
    guard: VersionGuard,
}

impl<'a, T: Tree + ?Sized> Postorder<'a, T> {
    /// Creates a traversal from a toplevel node.
    fn with_toplevel(tree: &'a T, toplevel: Option<usize>) -> Self {
        Self {
            tree,
            stack: toplevel
                .map(|node| (node, tree.first_child(node)))
                .into_iter()
                .collect(),
            guard: VersionGuard::new(tree),
        }
    }
}

impl<T: Tree + ?Sized> Iterator for Postorder<'_, T> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.guard.check(self.tree)? {
            return Some(Err(e));
        }
        loop {
            let (node, next_child) = self.stack.last_mut()?;
            match *next_child {
                Some(child) => {
                    *next_child = self.tree.next_sibling(child);
                    let grandchild = self.tree.first_child(child);
                    self.stack.push((child, grandchild));
                }
                None => {
                    let node = *node;
                    self.stack.pop();
                    return Some(Ok(node));
                }
            }
        }
    }
}

impl<T: Tree + ?Sized> iter::FusedIterator for Postorder<'_, T> {}

/// Returns the level order (breadth-first) traversal of the whole tree.
///
/// Nodes are yielded level by level, and left to right within a level.
/// An empty tree yields nothing.
#[must_use]
pub fn level_order<T: Tree + ?Sized>(tree: &T) -> LevelOrder<'_, T> {
    LevelOrder::with_toplevel(tree, tree.root())
}

/// Returns the level order traversal of the subtree rooted at `index`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `index` is not a valid node position.
pub fn level_order_from<T: Tree + ?Sized>(tree: &T, index: usize) -> Result<LevelOrder<'_, T>> {
    check_toplevel(tree, index)?;
    Ok(LevelOrder::with_toplevel(tree, Some(index)))
}

/// Level order traversal.
#[derive(Debug)]
pub struct LevelOrder<'a, T: ?Sized> {
    /// Tree.
    tree: &'a T,
    /// Nodes to visit.
    pending: VecDeque<usize>,
    /// Structural version guard.
    guard: VersionGuard,
}

impl<'a, T: Tree + ?Sized> LevelOrder<'a, T> {
    /// Creates a traversal from a toplevel node.
    fn with_toplevel(tree: &'a T, toplevel: Option<usize>) -> Self {
        Self {
            tree,
            pending: toplevel.into_iter().collect(),
            guard: VersionGuard::new(tree),
        }
    }
}

impl<T: Tree + ?Sized> Iterator for LevelOrder<'_, T> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.guard.check(self.tree)? {
            return Some(Err(e));
        }
        let node = self.pending.pop_front()?;
        self.pending.extend(self.tree.children(node));
        Some(Ok(node))
    }
}

impl<T: Tree + ?Sized> iter::FusedIterator for LevelOrder<'_, T> {}

/// Returns the inorder (symmetric) traversal of the whole binary tree.
///
/// The left subtree is yielded first, then the node, then the right subtree.
/// An empty tree yields nothing.
///
/// Meeting a node with more than two children yields
/// [`Error::InvalidOperation`] and ends the traversal.
#[must_use]
pub fn inorder<T: BinaryTree + ?Sized>(tree: &T) -> Inorder<'_, T> {
    Inorder::with_toplevel(tree, tree.root())
}

/// Returns the inorder traversal of the binary subtree rooted at `index`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `index` is not a valid node position.
pub fn inorder_from<T: BinaryTree + ?Sized>(tree: &T, index: usize) -> Result<Inorder<'_, T>> {
    check_toplevel(tree, index)?;
    Ok(Inorder::with_toplevel(tree, Some(index)))
}

/// Inorder traversal of a binary tree.
#[derive(Debug)]
pub struct Inorder<'a, T: ?Sized> {
    /// Tree.
    tree: &'a T,
    /// Root of the subtree to descend into next.
    current: Option<usize>,
    /// Nodes whose right subtree is pending.
    stack: Vec<usize>,
    /// Structural version guard.
    guard: VersionGuard,
}

impl<'a, T: BinaryTree + ?Sized> Inorder<'a, T> {
    /// Creates a traversal from a toplevel node.
    fn with_toplevel(tree: &'a T, toplevel: Option<usize>) -> Self {
        Self {
            tree,
            current: toplevel,
            stack: vec![],
            guard: VersionGuard::new(tree),
        }
    }
}

impl<T: BinaryTree + ?Sized> Iterator for Inorder<'_, T> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.guard.check(self.tree)? {
            return Some(Err(e));
        }
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = self.tree.left(node);
        }
        let node = self.stack.pop()?;
        let right = self.tree.right(node);
        if right.map_or(false, |right| self.tree.next_sibling(right).is_some()) {
            self.guard.trip();
            return Some(Err(Error::InvalidOperation(
                "inorder traversal requires at most two children per node",
            )));
        }
        self.current = right;
        Some(Ok(node))
    }
}

impl<T: BinaryTree + ?Sized> iter::FusedIterator for Inorder<'_, T> {}
