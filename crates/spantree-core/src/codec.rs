//! JSON boundary: adjacency documents in, tree documents out.
//!
//! Decoding happens entirely before any traversal starts, so malformed input
//! is reported as a typed [`Error::Decode`] and never yields partial output.

use std::io::Read;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{AdjacencyGraph, SpanningTree, UndeclaredVertexPolicy};
use crate::parallel::ResultSet;

/// Decodes an adjacency object (`{"vertex": ["neighbor", ...], ...}`).
///
/// Key order and neighbor order are preserved.
pub fn decode_graph(input: &str, policy: UndeclaredVertexPolicy) -> Result<AdjacencyGraph> {
    let adjacency: IndexMap<String, Vec<String>> = serde_json::from_str(input)?;
    AdjacencyGraph::from_adjacency_with_policy(adjacency, policy)
}

/// Reads `reader` to the end and decodes it with [`decode_graph`].
pub fn read_graph<R: Read>(mut reader: R, policy: UndeclaredVertexPolicy) -> Result<AdjacencyGraph> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    decode_graph(&input, policy)
}

/// Decodes a document produced by [`encode`] from a [`ResultSet`]
/// (`{"root": {"vertex": ["child", ...], ...}, ...}`).
pub fn decode_result_set(input: &str) -> Result<ResultSet> {
    let trees: IndexMap<String, SpanningTree> = serde_json::from_str(input)?;
    Ok(ResultSet::from_trees(trees))
}

/// Reads `reader` to the end and decodes it with [`decode_result_set`].
pub fn read_result_set<R: Read>(mut reader: R) -> Result<ResultSet> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    decode_result_set(&input)
}

/// Encodes any output document, pretty-printed with a 2-space indent or compact.
pub fn encode<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(Error::from)
}
