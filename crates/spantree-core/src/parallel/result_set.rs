//! Aggregated per-root outcomes of an all-roots build.

use std::time::Duration;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Error, Result};
use crate::graph::{shortest_path, SpanningTree, Vertex};

/// Counts reported after every unit of work has been joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildSummary {
    /// Number of roots processed.
    pub roots: usize,
    /// Roots whose tree was built.
    pub succeeded: usize,
    /// Roots whose unit of work failed.
    pub failed: usize,
    /// Sum of vertex counts over all successful trees.
    pub tree_vertices: usize,
    /// Wall-clock time from launch to join.
    pub elapsed: Duration,
}

/// Mapping root → tree-or-error, one entry per root in launch order.
///
/// Serializes as a JSON object `root → tree` containing only the successful
/// entries; inspect [`ResultSet::failures`] for the rest.
#[derive(Debug)]
pub struct ResultSet<V: Vertex = String> {
    outcomes: IndexMap<V, Result<SpanningTree<V>>>,
    elapsed: Duration,
}

impl<V: Vertex> ResultSet<V> {
    pub(crate) fn from_outcomes<I>(outcomes: I, elapsed: Duration) -> Self
    where
        I: IntoIterator<Item = (V, Result<SpanningTree<V>>)>,
    {
        Self {
            outcomes: outcomes.into_iter().collect(),
            elapsed,
        }
    }

    /// Wraps already-built trees, e.g. trees decoded from a previous run.
    #[must_use]
    pub fn from_trees(trees: IndexMap<V, SpanningTree<V>>) -> Self {
        Self::from_outcomes(
            trees.into_iter().map(|(root, tree)| (root, Ok(tree))),
            Duration::ZERO,
        )
    }

    /// Returns the number of roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if there are no roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns the outcome for `root`.
    #[must_use]
    pub fn get(&self, root: &V) -> Option<&Result<SpanningTree<V>>> {
        self.outcomes.get(root)
    }

    /// Returns the tree for `root` if it was built successfully.
    #[must_use]
    pub fn tree(&self, root: &V) -> Option<&SpanningTree<V>> {
        self.outcomes.get(root).and_then(|outcome| outcome.as_ref().ok())
    }

    /// Iterates all outcomes in launch order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &Result<SpanningTree<V>>)> {
        self.outcomes.iter()
    }

    /// Iterates successful trees in launch order.
    pub fn trees(&self) -> impl Iterator<Item = (&V, &SpanningTree<V>)> {
        self.outcomes
            .iter()
            .filter_map(|(root, outcome)| outcome.as_ref().ok().map(|tree| (root, tree)))
    }

    /// Iterates failed roots in launch order.
    pub fn failures(&self) -> impl Iterator<Item = (&V, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|(root, outcome)| outcome.as_ref().err().map(|err| (root, err)))
    }

    /// Returns true if every root produced a tree.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcomes.values().all(std::result::Result::is_ok)
    }

    /// Summarizes successes, failures and timing.
    #[must_use]
    pub fn summary(&self) -> BuildSummary {
        let mut summary = BuildSummary {
            roots: self.outcomes.len(),
            elapsed: self.elapsed,
            ..BuildSummary::default()
        };
        for outcome in self.outcomes.values() {
            match outcome {
                Ok(tree) => {
                    summary.succeeded += 1;
                    summary.tree_vertices += tree.len();
                }
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }

    /// Shortest-hop path from `source` to `destination`, read off the tree
    /// rooted at `source`.
    ///
    /// Returns `Ok(None)` when `destination` is unreachable from `source`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownRoot` if there is no successful tree for `source`.
    pub fn path(&self, source: &V, destination: &V) -> Result<Option<Vec<V>>> {
        let tree = self
            .tree(source)
            .ok_or_else(|| Error::UnknownRoot(source.to_string()))?;
        Ok(shortest_path(tree, source, destination))
    }

    /// Consumes the set, returning the trees.
    ///
    /// # Errors
    ///
    /// Returns the first per-root failure, if any.
    pub fn into_trees(self) -> Result<IndexMap<V, SpanningTree<V>>> {
        self.outcomes
            .into_iter()
            .map(|(root, outcome)| outcome.map(|tree| (root, tree)))
            .collect()
    }
}

impl<V> Serialize for ResultSet<V>
where
    V: Vertex + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let succeeded = self.outcomes.values().filter(|o| o.is_ok()).count();
        let mut map = serializer.serialize_map(Some(succeeded))?;
        for (root, tree) in self.trees() {
            map.serialize_entry(root, tree)?;
        }
        map.end()
    }
}
