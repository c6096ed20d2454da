//! Read-only adjacency graph built once from a decoded vertex → neighbors map.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier for a graph vertex.
///
/// Blanket-implemented for every hashable, cloneable, displayable type that
/// can be shared across worker threads (`String`, `u64`, `&'static str`...).
pub trait Vertex: Eq + Hash + Clone + fmt::Display + Send + Sync {}

impl<T> Vertex for T where T: Eq + Hash + Clone + fmt::Display + Send + Sync {}

/// Trait for graph traversal over any adjacency source.
///
/// Implementors must be safe to read from many threads at once; the
/// orchestrator shares a single `&G` across its whole worker pool.
pub trait GraphTraversal {
    /// Vertex identifier type.
    type Vertex: Vertex;

    /// Returns the ordered neighbor sequence of `vertex`.
    ///
    /// Vertices without an adjacency entry have no neighbors.
    fn neighbors(&self, vertex: &Self::Vertex) -> &[Self::Vertex];

    /// Returns every declared vertex, in graph order.
    fn vertex_ids(&self) -> Vec<Self::Vertex>;
}

/// What to do with neighbor ids that are not declared as top-level vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndeclaredVertexPolicy {
    /// Accept them; they behave as vertices with zero neighbors.
    #[default]
    Tolerate,
    /// Fail graph construction with [`Error::UndeclaredVertex`].
    Reject,
}

/// Immutable adjacency graph.
///
/// Vertex order and neighbor order are preserved exactly as given. Duplicate
/// neighbors, self-loops and asymmetric edges are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyGraph<V: Vertex = String> {
    adjacency: IndexMap<V, Vec<V>>,
}

impl<V: Vertex> AdjacencyGraph<V> {
    /// Builds a graph from a decoded adjacency map, tolerating undeclared vertices.
    #[must_use]
    pub fn from_adjacency(adjacency: IndexMap<V, Vec<V>>) -> Self {
        Self { adjacency }
    }

    /// Builds a graph from a decoded adjacency map under the given policy.
    ///
    /// # Errors
    ///
    /// Returns `Error::UndeclaredVertex` for the first undeclared neighbor
    /// when `policy` is [`UndeclaredVertexPolicy::Reject`].
    pub fn from_adjacency_with_policy(
        adjacency: IndexMap<V, Vec<V>>,
        policy: UndeclaredVertexPolicy,
    ) -> Result<Self> {
        let graph = Self::from_adjacency(adjacency);
        if let Some((vertex, referenced_by)) = graph.first_undeclared() {
            match policy {
                UndeclaredVertexPolicy::Reject => {
                    return Err(Error::UndeclaredVertex {
                        vertex: vertex.to_string(),
                        referenced_by: referenced_by.to_string(),
                    });
                }
                UndeclaredVertexPolicy::Tolerate => {
                    tracing::warn!(
                        vertex = %vertex,
                        referenced_by = %referenced_by,
                        "graph references undeclared vertices; treating them as leaves"
                    );
                }
            }
        }
        Ok(graph)
    }

    /// Returns all declared vertices in graph order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Returns the number of declared vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total length of all neighbor sequences.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no declared vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns true if `vertex` is declared as a top-level vertex.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns neighbor ids that have no adjacency entry, each once, in
    /// order of first reference.
    #[must_use]
    pub fn undeclared_vertices(&self) -> Vec<&V> {
        let mut seen = FxHashSet::default();
        self.adjacency
            .values()
            .flatten()
            .filter(|n| !self.adjacency.contains_key(*n) && seen.insert(*n))
            .collect()
    }

    /// Borrows the underlying adjacency map.
    #[must_use]
    pub fn as_map(&self) -> &IndexMap<V, Vec<V>> {
        &self.adjacency
    }

    fn first_undeclared(&self) -> Option<(&V, &V)> {
        self.adjacency.iter().find_map(|(vertex, neighbors)| {
            neighbors
                .iter()
                .find(|n| !self.adjacency.contains_key(*n))
                .map(|n| (n, vertex))
        })
    }
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V: Vertex> GraphTraversal for AdjacencyGraph<V> {
    type Vertex = V;

    fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    fn vertex_ids(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }
}

impl<V: Vertex> FromIterator<(V, Vec<V>)> for AdjacencyGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<V>)>>(iter: I) -> Self {
        Self::from_adjacency(iter.into_iter().collect())
    }
}

impl<'de, V> Deserialize<'de> for AdjacencyGraph<V>
where
    V: Vertex + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        IndexMap::deserialize(deserializer).map(Self::from_adjacency)
    }
}
