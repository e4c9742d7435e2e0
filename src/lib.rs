//! Leafchain - an in-memory B+Tree index with chained leaves.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           Leafchain                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Tree API (index/tree)                    │   │
//! │  │   insert · search · range_search · iter · delete         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Node layer (index/node)                    │   │
//! │  │   Leaf ⇄ Internal · locate · split · borrow · merge      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Node arena (index/arena)                    │   │
//! │  │        Vec slots + free list, NodeId handles             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                                                                 │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Benchmark harness (harness/, feature-gated)        │   │
//! │  │   workload → phases → measurements → CSV report          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tree keeps keys sorted across a chain of leaf nodes, so point lookup
//! costs a root-to-leaf descent while range scans and full ordered traversal
//! ride the chain without re-descending: the classic B+Tree trade against a
//! hash index (fast lookup, no order) or a sorted array (fast scan, slow
//! insert).
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, capacity rules)
//! - [`index`] - The chained-leaf B+Tree
//! - `harness` - Comparison-benchmark collaborators (feature `benchmarks`)
//!
//! # Quick Start
//! ```
//! use leafchain::BPlusTree;
//!
//! let mut tree = BPlusTree::with_capacity(4).unwrap();
//! tree.insert(10, 100);
//! tree.insert(3, 30);
//!
//! assert_eq!(tree.search(10), Some(100));
//! assert_eq!(tree.range_search(0, 50), vec![(3, 30), (10, 100)]);
//! assert!(tree.delete(3));
//! ```

// Core modules
pub mod common;
pub mod index;

// Benchmark collaborators (opt-in; pulls in workload/report dependencies)
#[cfg(feature = "benchmarks")]
pub mod harness;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, MIN_CAPACITY};
pub use common::{Error, NodeId, Result};
pub use index::{BPlusTree, Items, Key, Value};
