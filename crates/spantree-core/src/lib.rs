//! # spantree-core
//!
//! Breadth-first spanning trees rooted at every vertex of a graph.
//!
//! Given an adjacency relation, `spantree` builds the shortest-hop spanning
//! tree for each vertex as root and returns all of them at once. The per-root
//! traversals are independent and run on a bounded rayon pool against one
//! shared, immutable graph.
//!
//! ## Features
//!
//! - **Deterministic BFS trees**: tie-breaks follow neighbor order exactly
//! - **Bounded parallelism**: fixed-size worker pool, no per-vertex threads
//! - **Failure isolation**: a failing root never takes its siblings down
//! - **Word ladders**: build one-edit-apart word graphs from plain text
//! - **Path lookup**: shortest-hop paths straight from a computed tree
//!
//! ## Quick Start
//!
//! ```rust
//! use spantree_core::codec::{decode_graph, encode};
//! use spantree_core::graph::UndeclaredVertexPolicy;
//! use spantree_core::ParallelTreeBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = decode_graph(
//!         r#"{"a":["b"],"b":["a"],"c":[]}"#,
//!         UndeclaredVertexPolicy::Tolerate,
//!     )?;
//!
//!     let results = ParallelTreeBuilder::new().build_all(&graph)?;
//!     assert!(results.is_complete());
//!
//!     let json = encode(&results, false)?;
//!     assert_eq!(json, r#"{"a":{"a":["b"],"b":[]},"b":{"b":["a"],"a":[]},"c":{"c":[]}}"#);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod config;
pub mod error;
pub mod graph;
pub mod ladder;
pub mod parallel;
#[cfg(test)]
mod test_support;

pub use config::SpantreeConfig;
pub use error::{Error, Result};
pub use graph::{
    build_spanning_tree, shortest_path, AdjacencyGraph, GraphTraversal, SpanningTree,
    UndeclaredVertexPolicy,
};
pub use ladder::build_ladder_graph;
pub use parallel::{BuildSummary, ParallelConfig, ParallelTreeBuilder, ResultSet, ThreadConfig};
