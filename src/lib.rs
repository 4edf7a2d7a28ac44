//! Pointer-free trees and generic graph search.
//!
//! The central type is [`PreorderTree`], a general tree of arbitrary arity
//! encoded as two parallel sequences: node values in preorder, and the number
//! of descendants ("weight") of each node. There are no node objects and no
//! parent pointers; every structural query is index arithmetic over the weight
//! sequence.
//!
//! The algorithms are written against the abstractions in [`graph`] and
//! [`tree`], so they work with any implementation of those traits:
//!
//! * tree traversals: [`tree::preorder`], [`tree::postorder`],
//!   [`tree::level_order`], [`tree::inorder`],
//! * graph searches: [`graph::breadth_first_search`],
//!   [`graph::depth_first_search`], [`graph::connected_components`],
//!   [`graph::astar`].
//!
//! All of them are lazy, one-shot iterators (except A*, which returns the
//! finished path), and they are iterative: trees far deeper than the call
//! stack can be traversed.
//!
//! # Examples
//!
//! ```
//! use pretree::tree;
//! use pretree::TreeBuilder;
//!
//! //  A
//! //  |-- B
//! //  |   `-- D
//! //  `-- C
//! let mut tree = TreeBuilder::new("A")
//!     .child("B")
//!     .child("D")
//!     .parent()
//!     .sibling("C")
//!     .build();
//! assert_eq!(tree.values(), &["A", "B", "D", "C"]);
//! assert_eq!(tree.weights(), &[3, 1, 0, 0]);
//!
//! let b = tree.detach(1)?;
//! assert_eq!(tree.values(), &["A", "C"]);
//! assert_eq!(b.values(), &["B", "D"]);
//!
//! let order = tree::postorder(&tree).collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(order, [1, 0]);
//! # Ok::<_, pretree::Error>(())
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::must_use_candidate)]

extern crate alloc;

mod error;
pub mod graph;
pub mod preorder;
pub mod tree;

pub use self::error::{Error, Result};
pub use self::preorder::{Node, PreorderTree, TreeBuilder};
