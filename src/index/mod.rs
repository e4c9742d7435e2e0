//! Index structures (chained-leaf B+Tree).
//!
//! # Components
//! - [`BPlusTree`] - The ordered index: insert, search, range scan, ordered
//!   traversal, delete
//! - [`Items`] - Lazy ascending iterator over the leaf chain
//! - [`Node`] / [`LeafNode`] / [`InternalNode`] - Tagged node representation
//!   and node-local operations
//! - [`NodeArena`] - Slot storage owning every node

mod arena;
mod iter;
mod node;
mod tree;

/// Key type stored by the index.
pub type Key = i64;

/// Value type stored by the index.
pub type Value = i64;

pub use arena::NodeArena;
pub use iter::Items;
pub use node::{InternalNode, LeafNode, Node};
pub use tree::BPlusTree;
