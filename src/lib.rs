//! This crate exposes a link-based Binary Search Tree (BST) that stores
//! ordered values and can be rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The invariants of the tree in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less
//!    than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value. Duplicates are kept and always
//!    route right when added. Rebalancing may put a duplicate on the left of
//!    its twin, which searches tolerate.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the
//! root `Node` to a leaf `Node`. This tree does not balance itself as values
//! are added, so inserting sorted values produces a tree shaped like a linked
//! list. [`OrderedTree::rebalance`] rebuilds the tree with the minimum
//! possible height and [`OrderedTree::is_balanced`] reports whether that is
//! worth doing.
//!
//! ```
//! use linked_bst::OrderedTree;
//!
//! let mut tree: OrderedTree<i32> = (1..=7).collect();
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod linked;


pub use error::{TreeError, TreeResult};
pub use linked::OrderedTree;
