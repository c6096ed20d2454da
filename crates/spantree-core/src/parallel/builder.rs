//! ParallelTreeBuilder: one BFS spanning tree per root on a bounded pool.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use rustc_hash::FxHashSet;

use super::{ParallelConfig, ResultSet};
use crate::error::{Error, Result};
use crate::graph::{build_spanning_tree, GraphTraversal, SpanningTree};

/// Parallel tree construction engine using rayon for root-level parallelism.
///
/// Each root's traversal is independent, making it embarrassingly parallel.
/// The graph is shared by reference across the pool; each unit writes only
/// into its own slot of the pre-allocated output vector.
#[derive(Debug, Default)]
pub struct ParallelTreeBuilder {
    config: ParallelConfig,
}

impl ParallelTreeBuilder {
    /// Creates a new builder with default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ParallelConfig::default(),
        }
    }

    /// Creates a builder with the given config.
    #[must_use]
    pub fn with_config(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// Returns the active config.
    #[must_use]
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Builds a spanning tree rooted at every vertex of `graph`.
    ///
    /// The result has exactly one entry per vertex, in graph order.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for an invalid config and `Error::ThreadPool`
    /// if the worker pool cannot be created. Per-root failures are not
    /// errors here; they are recorded in the returned [`ResultSet`].
    pub fn build_all<G>(&self, graph: &G) -> Result<ResultSet<G::Vertex>>
    where
        G: GraphTraversal + Sync + ?Sized,
    {
        let roots = graph.vertex_ids();
        self.build_from_roots(graph, &roots)
    }

    /// Builds one spanning tree per entry of `roots`.
    ///
    /// Duplicate roots are computed once, at their first position.
    pub fn build_from_roots<G>(
        &self,
        graph: &G,
        roots: &[G::Vertex],
    ) -> Result<ResultSet<G::Vertex>>
    where
        G: GraphTraversal + Sync + ?Sized,
    {
        self.config.validate()?;

        let started = Instant::now();
        let mut seen = FxHashSet::default();
        let roots: Vec<&G::Vertex> = roots.iter().filter(|r| seen.insert(*r)).collect();

        let mut outcomes = Vec::with_capacity(roots.len());
        if self.config.should_parallelize(roots.len()) {
            let threads = self.config.effective_threads();
            tracing::debug!(roots = roots.len(), threads, "building trees on worker pool");

            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("spantree-worker-{i}"))
                .build()?;
            pool.install(|| {
                roots
                    .par_iter()
                    .map(|root| build_isolated(graph, root))
                    .collect_into_vec(&mut outcomes);
            });
        } else {
            tracing::debug!(roots = roots.len(), "building trees sequentially");
            outcomes.extend(roots.iter().map(|root| build_isolated(graph, root)));
        }

        let result_set = ResultSet::from_outcomes(
            roots.into_iter().cloned().zip(outcomes),
            started.elapsed(),
        );

        let summary = result_set.summary();
        tracing::info!(
            roots = summary.roots,
            succeeded = summary.succeeded,
            failed = summary.failed,
            tree_vertices = summary.tree_vertices,
            elapsed = ?summary.elapsed,
            "built spanning trees"
        );

        Ok(result_set)
    }
}

/// Runs one unit of work, turning a panic into a per-root error.
fn build_isolated<G>(graph: &G, root: &G::Vertex) -> Result<SpanningTree<G::Vertex>>
where
    G: GraphTraversal + ?Sized,
{
    match panic::catch_unwind(AssertUnwindSafe(|| build_spanning_tree(graph, root))) {
        Ok(tree) => {
            tracing::debug!(root = %root, vertices = tree.len(), "tree built");
            Ok(tree)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(root = %root, %message, "tree construction failed");
            Err(Error::TaskPanicked {
                root: root.to_string(),
                message,
            })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
