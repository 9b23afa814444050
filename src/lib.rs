//! A set of ordered values stored in an unbalanced Binary Search Tree, [`OrderedTree`], along
//! with tools for drawing the tree and measuring how deep it grows.
//!
//! Each value lives in its own [`Node`]. Everything down a node's left link compares less than
//! the node's value and everything down its right link compares greater, so equal values have
//! nowhere to go and are stored once. Lookups, inserts and deletes follow one path down from the
//! root and cost `O(depth)`, and reading the nodes left-to-right gives the values sorted.
//!
//! Nothing ever rotates the tree. Its shape is decided by the order values arrive in: a random
//! order tends to stay near `lg N` deep while sorted input builds a chain `N` nodes deep. The
//! [`stats`] module samples random trees to show where typical depths land.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod diagram;
pub mod stats;
pub mod tree;

pub use tree::{InOrder, Node, OrderedTree};
