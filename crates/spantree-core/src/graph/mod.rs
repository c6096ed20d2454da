//! In-memory graph model and breadth-first spanning trees.
//!
//! Provides the read-only [`AdjacencyGraph`], the [`GraphTraversal`] trait the
//! tree builder is generic over, the pure [`build_spanning_tree`] function and
//! root-to-vertex path lookup.
//!
//! # Example
//!
//! ```rust
//! use spantree_core::graph::{build_spanning_tree, AdjacencyGraph};
//!
//! let graph: AdjacencyGraph = [
//!     ("a".to_string(), vec!["b".to_string()]),
//!     ("b".to_string(), vec!["a".to_string()]),
//!     ("c".to_string(), vec![]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let tree = build_spanning_tree(&graph, &"a".to_string());
//! assert_eq!(tree.children(&"a".to_string()), ["b".to_string()]);
//! assert!(!tree.contains(&"c".to_string()));
//! ```

mod adjacency;
pub mod path;
mod spanning_tree;

#[cfg(test)]
mod spanning_tree_tests;

pub use adjacency::{AdjacencyGraph, GraphTraversal, UndeclaredVertexPolicy, Vertex};
pub use path::shortest_path;
pub use spanning_tree::{build_spanning_tree, SpanningTree};
