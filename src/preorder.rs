//! Preorder/weight tree.
//!
//! A tree is stored as two parallel sequences of the same length: node values
//! in preorder, and the weight of each node, i.e. the number of its
//! descendants. The subtree rooted at position `i` occupies the contiguous
//! range `i..=i + weight[i]`, so the first child of `i` is `i + 1` and the
//! next sibling of a child `c` is `c + weight[c] + 1`.
//!
//! There are no node objects and no links: parents are found by scanning the
//! weights to the left, and moving a subtree is a splice of both sequences.

mod builder;
mod debug_print;
mod node;
mod traverse;

use alloc::vec;
use alloc::vec::Vec;

use log::trace;

use crate::graph::Graph;
use crate::tree::{AttachAt, BinaryTree, Tree, TreeMut};
use crate::{Error, Result};

pub use self::builder::TreeBuilder;
pub use self::debug_print::DebugPrint;
pub use self::node::Node;
pub use self::traverse::{Ancestors, Children, TreeNeighbors};

/// Tree encoded as preorder values and descendant counts.
///
/// # Examples
///
/// ```
/// use pretree::tree::Tree;
/// use pretree::PreorderTree;
///
/// let mut tree = PreorderTree::with_root("A");
/// tree.attach(PreorderTree::with_root("C"), 0)?;
/// tree.attach(PreorderTree::from_parts(vec!["B", "D"], vec![1, 0])?, 0)?;
///
/// assert_eq!(tree.values(), &["A", "B", "D", "C"]);
/// assert_eq!(tree.weights(), &[3, 1, 0, 0]);
/// assert_eq!(tree.parent(2), Some(1));
/// assert_eq!(tree.parent(3), Some(0));
/// assert_eq!(tree.children(0).collect::<Vec<_>>(), [1, 3]);
/// assert_eq!(tree.next_sibling(1), Some(3));
/// assert_eq!(tree.next_sibling(2), None);
/// # Ok::<_, pretree::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PreorderTree<T> {
    /// Node values in preorder.
    preorder: Vec<T>,
    /// Number of descendants of each node.
    weights: Vec<usize>,
    /// Structural version.
    version: u64,
}

impl<T> Default for PreorderTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PreorderTree<T> {
    /// Creates an empty tree.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            preorder: Vec::new(),
            weights: Vec::new(),
            version: 0,
        }
    }

    /// Creates a tree with only the root node.
    #[must_use]
    pub fn with_root(value: T) -> Self {
        Self {
            preorder: vec![value],
            weights: vec![0],
            version: 0,
        }
    }

    /// Creates a tree from preorder values and weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the sequences have different
    /// lengths or the weights do not describe a single tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pretree::{Error, PreorderTree};
    ///
    /// assert!(PreorderTree::from_parts(vec!['a', 'b'], vec![1, 0]).is_ok());
    /// // Two roots.
    /// assert!(matches!(
    ///     PreorderTree::from_parts(vec!['a', 'b'], vec![0, 0]),
    ///     Err(Error::InvalidArgument(_))
    /// ));
    /// ```
    pub fn from_parts(values: Vec<T>, weights: Vec<usize>) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(Error::InvalidArgument(
                "values and weights must have the same length",
            ));
        }
        validate_weights(&weights)?;
        Ok(Self {
            preorder: values,
            weights,
            version: 0,
        })
    }

    /// Decomposes the tree into preorder values and weights.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Vec<usize>) {
        (self.preorder, self.weights)
    }

    /// Returns the node values in preorder.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.preorder
    }

    /// Returns the number of descendants of each node, in preorder.
    #[inline]
    #[must_use]
    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    /// Returns the number of nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.preorder.len()
    }

    /// Returns true if the tree has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preorder.is_empty()
    }

    /// Returns the structural version.
    ///
    /// The version changes on every attach and detach.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the value of the node.
    #[inline]
    #[must_use]
    pub fn value(&self, index: usize) -> Option<&T> {
        self.preorder.get(index)
    }

    /// Returns a mutable reference to the value of the node.
    ///
    /// Changing a value is not a structural change.
    #[inline]
    #[must_use]
    pub fn value_mut(&mut self, index: usize) -> Option<&mut T> {
        self.preorder.get_mut(index)
    }

    /// Returns the number of descendants of the node.
    #[inline]
    #[must_use]
    pub fn weight(&self, index: usize) -> Option<usize> {
        self.weights.get(index).copied()
    }

    /// Returns the root node, or `None` if the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<Node<'_, T>> {
        Node::new(self, 0)
    }

    /// Returns the node at the position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a valid position.
    pub fn node(&self, index: usize) -> Result<Node<'_, T>> {
        Node::new(self, index).ok_or_else(|| Error::out_of_range(index, self.len()))
    }

    /// Inserts `subtree` at the destination.
    ///
    /// Every ancestor of the inserted subtree gains `subtree.len()`
    /// descendants. Positions at or after the insertion point shift.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`] if the anchor of `dest` is not a valid
    ///   position.
    /// * [`Error::InvalidArgument`] if `subtree` is empty.
    /// * [`Error::InvalidOperation`] if `dest` is a sibling of the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pretree::tree::AttachAt;
    /// use pretree::{PreorderTree, TreeBuilder};
    ///
    /// let mut tree = TreeBuilder::new(0).child(1).sibling(2).build();
    /// tree.attach_at(PreorderTree::with_root(3), AttachAt::LastChildOf(0))?;
    /// tree.attach_at(PreorderTree::with_root(4), AttachAt::NextSiblingOf(1))?;
    /// tree.attach_at(PreorderTree::with_root(5), AttachAt::FirstChildOf(1))?;
    /// assert_eq!(tree.values(), &[0, 1, 5, 4, 2, 3]);
    /// assert_eq!(tree.weights(), &[5, 1, 0, 0, 0, 0]);
    /// # Ok::<_, pretree::Error>(())
    /// ```
    pub fn attach_at(&mut self, subtree: Self, dest: AttachAt) -> Result<()> {
        let anchor = dest.anchor();
        if anchor >= self.len() {
            return Err(Error::out_of_range(anchor, self.len()));
        }
        if subtree.is_empty() {
            return Err(Error::InvalidArgument("the subtree to attach is empty"));
        }
        let (parent, position) = match dest {
            AttachAt::FirstChildOf(parent) => (parent, parent + 1),
            AttachAt::LastChildOf(parent) => (parent, parent + self.weights[parent] + 1),
            AttachAt::PreviousSiblingOf(sibling) | AttachAt::NextSiblingOf(sibling) => {
                let parent = self.parent_index(sibling).ok_or(Error::InvalidOperation(
                    "the root cannot have siblings",
                ))?;
                let position = match dest {
                    AttachAt::PreviousSiblingOf(_) => sibling,
                    _ => sibling + self.weights[sibling] + 1,
                };
                (parent, position)
            }
        };

        let size = subtree.len();
        for ancestor in self.ancestor_indices(parent) {
            self.weights[ancestor] += size;
        }
        let (values, weights) = subtree.into_parts();
        self.preorder.splice(position..position, values);
        self.weights.splice(position..position, weights);
        self.bump();
        trace!(
            "attached a subtree of {} nodes at position {} under {}",
            size,
            position,
            parent
        );
        Ok(())
    }

    /// Inserts `subtree` as the first child of `parent`.
    ///
    /// # Errors
    ///
    /// Same as [`attach_at`][`Self::attach_at`].
    #[inline]
    pub fn attach(&mut self, subtree: Self, parent: usize) -> Result<()> {
        self.attach_at(subtree, AttachAt::FirstChildOf(parent))
    }

    /// Removes the subtree rooted at the node and returns it as a new tree.
    ///
    /// Every ancestor of the node loses the removed nodes from its weight.
    /// Detaching the root moves out the whole tree and leaves `self` empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a valid position.
    pub fn detach(&mut self, index: usize) -> Result<Self> {
        if index >= self.len() {
            return Err(Error::out_of_range(index, self.len()));
        }
        let size = self.weights[index] + 1;
        if let Some(parent) = self.parent_index(index) {
            for ancestor in self.ancestor_indices(parent) {
                self.weights[ancestor] -= size;
            }
        }
        let range = index..(index + size);
        let preorder: Vec<T> = self.preorder.drain(range.clone()).collect();
        let weights: Vec<usize> = self.weights.drain(range).collect();
        self.bump();
        trace!(
            "detached a subtree of {} nodes at position {}, {} nodes remain",
            size,
            index,
            self.len()
        );
        Ok(Self {
            preorder,
            weights,
            version: 0,
        })
    }

    /// Removes the subtree rooted at a non-root node and returns it.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`] if `index` is not a valid position.
    /// * [`Error::InvalidOperation`] if the node is the root.
    pub fn detach_descendant(&mut self, index: usize) -> Result<Self> {
        if index == 0 && !self.is_empty() {
            return Err(Error::InvalidOperation(
                "the root cannot be detached as a descendant",
            ));
        }
        self.detach(index)
    }

    /// Records a structural change.
    #[inline]
    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Panics if the position is invalid.
    #[inline]
    fn assert_contains(&self, index: usize) {
        assert!(
            index < self.len(),
            "[precondition] node position {} is out of range for a tree with {} nodes",
            index,
            self.len()
        );
    }

    /// Returns the parent position of the node.
    ///
    /// The parent is the nearest preceding node whose subtree covers `index`.
    fn parent_index(&self, index: usize) -> Option<usize> {
        (0..index)
            .rev()
            .find(|&i| i + self.weights[i] >= index)
    }

    /// Returns the positions of the node and all its ancestors, nearest first.
    fn ancestor_indices(&self, index: usize) -> Vec<usize> {
        let mut indices = vec![index];
        let mut current = index;
        while let Some(parent) = self.parent_index(current) {
            indices.push(parent);
            current = parent;
        }
        indices
    }
}

/// Checks that the weights describe a single tree in preorder.
fn validate_weights(weights: &[usize]) -> Result<()> {
    let len = weights.len();
    if let Some(&root) = weights.first() {
        if root + 1 != len {
            return Err(Error::InvalidArgument(
                "the root must have every other node as a descendant",
            ));
        }
    }
    // Last positions of the subtrees enclosing the current node.
    let mut open_ends: Vec<usize> = Vec::new();
    for (index, &weight) in weights.iter().enumerate() {
        let end = index
            .checked_add(weight)
            .filter(|&end| end < len)
            .ok_or(Error::InvalidArgument("a subtree extends past the last node"))?;
        while open_ends.last().map_or(false, |&parent_end| parent_end < index) {
            open_ends.pop();
        }
        if open_ends.last().map_or(false, |&parent_end| end > parent_end) {
            return Err(Error::InvalidArgument(
                "a subtree extends past the subtree of its parent",
            ));
        }
        open_ends.push(end);
    }
    Ok(())
}

impl<T: PartialEq> PartialEq for PreorderTree<T> {
    /// Compares the values and the shape, ignoring the structural version.
    fn eq(&self, other: &Self) -> bool {
        self.weights == other.weights && self.preorder == other.preorder
    }
}

impl<T: Eq> Eq for PreorderTree<T> {}

impl<T> Graph for PreorderTree<T> {
    type Value = T;
    type Neighbors<'a> = TreeNeighbors<'a, T> where Self: 'a;

    #[inline]
    fn node_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn value(&self, index: usize) -> Option<&T> {
        self.preorder.get(index)
    }

    fn neighbors(&self, index: usize) -> TreeNeighbors<'_, T> {
        TreeNeighbors::new(self, index)
    }

    #[inline]
    fn version(&self) -> u64 {
        self.version
    }
}

impl<T> Tree for PreorderTree<T> {
    #[inline]
    fn root(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    fn parent(&self, index: usize) -> Option<usize> {
        self.assert_contains(index);
        self.parent_index(index)
    }

    fn first_child(&self, index: usize) -> Option<usize> {
        self.assert_contains(index);
        if self.weights[index] > 0 {
            Some(index + 1)
        } else {
            None
        }
    }

    fn next_sibling(&self, index: usize) -> Option<usize> {
        self.assert_contains(index);
        let parent = self.parent_index(index)?;
        let next = index + self.weights[index] + 1;
        if next <= parent + self.weights[parent] {
            Some(next)
        } else {
            None
        }
    }
}

impl<T> BinaryTree for PreorderTree<T> {
    fn right(&self, index: usize) -> Option<usize> {
        let left = self.left(index)?;
        let right = left + self.weights[left] + 1;
        if right <= index + self.weights[index] {
            Some(right)
        } else {
            None
        }
    }
}

impl<T> TreeMut for PreorderTree<T> {
    #[inline]
    fn attach_at(&mut self, subtree: Self, dest: AttachAt) -> Result<()> {
        PreorderTree::attach_at(self, subtree, dest)
    }

    #[inline]
    fn detach(&mut self, index: usize) -> Result<Self> {
        PreorderTree::detach(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `A(B(D), C)`.
    fn sample() -> PreorderTree<char> {
        PreorderTree::from_parts(vec!['A', 'B', 'D', 'C'], vec![3, 1, 0, 0])
            .expect("valid encoding")
    }

    #[test]
    fn navigation() {
        let tree = sample();
        assert_eq!(Tree::root(&tree), Some(0));
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.parent(3), Some(0));
        assert_eq!(tree.first_child(0), Some(1));
        assert_eq!(tree.first_child(2), None);
        assert_eq!(tree.next_sibling(1), Some(3));
        assert_eq!(tree.next_sibling(2), None);
        assert_eq!(tree.next_sibling(0), None);
        assert_eq!(tree.prev_sibling(3), Some(1));
        assert_eq!(tree.prev_sibling(1), None);
        assert_eq!(tree.left(0), Some(1));
        assert_eq!(tree.right(0), Some(3));
        assert_eq!(tree.right(1), None);
    }

    #[test]
    fn neighbors_are_parent_then_children() {
        let tree = sample();
        assert_eq!(tree.neighbors(0).collect::<Vec<_>>(), [1, 3]);
        assert_eq!(tree.neighbors(1).collect::<Vec<_>>(), [0, 2]);
        assert_eq!(tree.neighbors(3).collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn attach_to_sibling_of_root() {
        let mut tree = sample();
        assert_eq!(
            tree.attach_at(PreorderTree::with_root('X'), AttachAt::NextSiblingOf(0)),
            Err(Error::InvalidOperation("the root cannot have siblings"))
        );
        assert_eq!(tree, sample());
    }

    #[test]
    fn attach_empty_or_out_of_range() {
        let mut tree = sample();
        assert_eq!(
            tree.attach(PreorderTree::new(), 0),
            Err(Error::InvalidArgument("the subtree to attach is empty"))
        );
        assert_eq!(
            tree.attach(PreorderTree::with_root('X'), 4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(tree.version(), 0);
    }

    #[test]
    fn attach_as_previous_sibling() {
        let mut tree = sample();
        tree.attach_at(PreorderTree::with_root('X'), AttachAt::PreviousSiblingOf(3))
            .expect("valid destination");
        assert_eq!(tree.values(), &['A', 'B', 'D', 'X', 'C']);
        assert_eq!(tree.weights(), &[4, 1, 0, 0, 0]);
        assert_eq!(tree.version(), 1);
    }

    #[test]
    fn detach_root_leaves_empty_tree() {
        let mut tree = sample();
        let whole = tree.detach(0).expect("valid position");
        assert!(tree.is_empty());
        assert_eq!(whole, sample());
        assert!(Tree::root(&tree).is_none());
    }

    #[test]
    fn detach_descendant_rejects_root() {
        let mut tree = sample();
        assert!(matches!(
            tree.detach_descendant(0),
            Err(Error::InvalidOperation(_))
        ));
        let d = tree.detach_descendant(2).expect("valid position");
        assert_eq!(d.values(), &['D']);
        assert_eq!(tree.weights(), &[2, 0, 0]);
    }

    #[test]
    fn from_parts_rejects_broken_encodings() {
        let invalid = |weights: Vec<usize>| {
            let values = vec![(); weights.len()];
            matches!(
                PreorderTree::from_parts(values, weights),
                Err(Error::InvalidArgument(_))
            )
        };
        assert!(invalid(vec![1]));
        assert!(invalid(vec![2, 2, 0]));
        assert!(invalid(vec![3, 1, 1, 0]));
        assert!(!invalid(vec![]));
        assert!(!invalid(vec![3, 0, 1, 0]));
        assert!(matches!(
            PreorderTree::from_parts(vec![(); 2], vec![1]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    #[should_panic(expected = "[precondition]")]
    fn navigation_out_of_range_panics() {
        let _ = sample().parent(4);
    }

    #[test]
    fn equality_ignores_version() {
        let mut tree = sample();
        let c = tree.detach(3).expect("valid position");
        tree.attach_at(c, AttachAt::LastChildOf(0))
            .expect("valid destination");
        assert_ne!(tree.version(), 0);
        assert_eq!(tree, sample());
    }
}
