//! Breadth-first spanning tree construction.
//!
//! [`build_spanning_tree`] is a pure function of a graph and a root: it reads
//! only the shared graph and writes only the tree it returns, so any number
//! of invocations may run concurrently against the same graph.

use std::collections::VecDeque;
use std::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::adjacency::{GraphTraversal, Vertex};
use super::path::shortest_path;

/// Shortest-hop spanning tree: vertex → ordered children.
///
/// Built trees keep keys in dequeue order. Every vertex reachable from the
/// root is a key exactly once; leaves map to `[]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "V: Serialize + Eq + Hash",
    deserialize = "V: Deserialize<'de> + Eq + Hash"
))]
pub struct SpanningTree<V = String> {
    edges: IndexMap<V, Vec<V>>,
}

impl<V: Eq + Hash> PartialEq for SpanningTree<V> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl<V: Eq + Hash> Eq for SpanningTree<V> {}

impl<V: Vertex> SpanningTree<V> {
    /// Wraps an already-built vertex → children map.
    ///
    /// Used when reading trees back from their serialized form; the map is
    /// taken as-is.
    #[must_use]
    pub fn from_edges(edges: IndexMap<V, Vec<V>>) -> Self {
        Self { edges }
    }

    /// Returns the root: the first vertex that is nobody's child.
    ///
    /// For built trees this is the first key. Decoded trees may list their
    /// keys in any order.
    #[must_use]
    pub fn root(&self) -> Option<&V> {
        let parents = self.parent_map();
        self.edges.keys().find(|vertex| !parents.contains_key(vertex))
    }

    /// Returns the children of `vertex` (empty if absent or a leaf).
    #[must_use]
    pub fn children(&self, vertex: &V) -> &[V] {
        self.edges.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `vertex` is in the tree.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.edges.contains_key(vertex)
    }

    /// Returns the number of vertices in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the tree has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the number of tree edges (parent → child links).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Iterates vertices in dequeue order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.edges.keys()
    }

    /// Iterates `(vertex, children)` pairs in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> {
        self.edges.iter().map(|(v, c)| (v, c.as_slice()))
    }

    /// Maps every non-root vertex to its parent.
    #[must_use]
    pub fn parent_map(&self) -> FxHashMap<&V, &V> {
        let mut parents = FxHashMap::default();
        for (parent, children) in &self.edges {
            for child in children {
                parents.insert(child, parent);
            }
        }
        parents
    }

    /// Hop count from the root to `vertex`, or `None` if it is not in the tree.
    #[must_use]
    pub fn depth_of(&self, vertex: &V) -> Option<usize> {
        shortest_path(self, self.root()?, vertex).map(|path| path.len() - 1)
    }

    /// Borrows the underlying vertex → children map.
    #[must_use]
    pub fn as_map(&self) -> &IndexMap<V, Vec<V>> {
        &self.edges
    }

    /// Consumes the tree, returning the vertex → children map.
    #[must_use]
    pub fn into_map(self) -> IndexMap<V, Vec<V>> {
        self.edges
    }
}

/// Builds the breadth-first spanning tree of `graph` rooted at `root`.
///
/// A neighbor is claimed by the first dequeued vertex that lists it, and
/// within one vertex neighbors are claimed in sequence order, so the result
/// is fully determined by the graph's neighbor order. Vertices are marked
/// visited before they are enqueued; each is enqueued at most once.
///
/// A root with no adjacency entry yields `{root: []}`.
#[must_use]
pub fn build_spanning_tree<'g, G>(graph: &'g G, root: &'g G::Vertex) -> SpanningTree<G::Vertex>
where
    G: GraphTraversal + ?Sized,
{
    let mut edges = IndexMap::new();
    let mut visited: FxHashSet<&G::Vertex> = FxHashSet::default();
    let mut queue = VecDeque::new();

    visited.insert(root);
    queue.push_back(root);

    while let Some(vertex) = queue.pop_front() {
        let mut children = Vec::new();
        for neighbor in graph.neighbors(vertex) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
                children.push(neighbor.clone());
            }
        }
        edges.insert(vertex.clone(), children);
    }

    SpanningTree { edges }
}
