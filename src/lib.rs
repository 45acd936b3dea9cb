//! This crate exposes the canonical introductory data structures and
//! ordering algorithms, mostly for educational purposes.
//!
//! ## Containers
//!
//! - [`Stack`]: Last-In-First-Out. Items are pushed onto and popped off the
//!   same end.
//! - [`Queue`]: First-In-First-Out. Items are enqueued at the back and
//!   dequeued from the front.
//! - [`LinkedList`]: a singly linked chain of nodes supporting appends,
//!   insertion after a known node, deletion by value and linear search.
//! - [`BinarySearchTree`]: an unbalanced Binary Search Tree. For every `Node`,
//!   all the `Node`s in its left subtree hold smaller values and all the
//!   `Node`s in its right subtree hold values greater than or equal to its own.
//!   Searching takes `O(height)`, and since nothing keeps the tree balanced the
//!   height can grow to the number of elements (insert them in ascending order,
//!   for instance). The tree naturally supports sorted iteration by visiting the
//!   left subtree, then the subtree root, then the right subtree.
//!
//! ## Algorithms
//!
//! - [`sort`]: bubble, insertion, merge and quick sort.
//! - [`search`]: linear, binary and interpolation search.
//!
//! Nothing in here returns an error. Anything that can come up empty (popping
//! an empty stack, searching for a missing element, ...) returns an `Option`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod linked_list;
pub mod queue;
pub mod search;
pub mod sort;
pub mod stack;


pub use bst::BinarySearchTree;
pub use linked_list::{LinkedList, NodeId};
pub use queue::Queue;
pub use search::{binary_search, interpolation_search, linear_search};
pub use sort::{bubble_sort, insertion_sort, merge_sort, quick_sort};
pub use stack::Stack;
