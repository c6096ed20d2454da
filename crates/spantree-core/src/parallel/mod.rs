//! Parallel all-roots spanning tree construction.
//!
//! One unit of work per root vertex, executed on a bounded rayon pool. Every
//! unit reads the same immutable graph and owns exactly one output slot, so
//! no locks are involved; a unit that panics fails only its own root.

mod builder;
mod result_set;

pub use builder::ParallelTreeBuilder;
pub use result_set::{BuildSummary, ResultSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Thread configuration for the worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "ThreadSetting", into = "ThreadSetting")]
pub enum ThreadConfig {
    /// Automatically detect optimal thread count based on CPU.
    #[default]
    Auto,
    /// Use a fixed number of threads.
    Fixed(usize),
}

impl ThreadConfig {
    /// Returns the effective number of threads to use.
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        match self {
            ThreadConfig::Auto => {
                let cpus = std::thread::available_parallelism()
                    .map(std::num::NonZeroUsize::get)
                    .unwrap_or(1);
                // Leave 1 core for other work, minimum 1 thread
                (cpus.saturating_sub(1)).max(1)
            }
            ThreadConfig::Fixed(n) => *n,
        }
    }
}

/// Serialized form of [`ThreadConfig`]: `"auto"` or a thread count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ThreadSetting {
    Count(usize),
    Keyword(String),
}

impl TryFrom<ThreadSetting> for ThreadConfig {
    type Error = String;

    fn try_from(setting: ThreadSetting) -> std::result::Result<Self, Self::Error> {
        match setting {
            ThreadSetting::Count(n) => Ok(ThreadConfig::Fixed(n)),
            ThreadSetting::Keyword(word) if word.eq_ignore_ascii_case("auto") => {
                Ok(ThreadConfig::Auto)
            }
            ThreadSetting::Keyword(word) => Err(format!(
                "invalid thread setting '{word}', expected \"auto\" or a positive integer"
            )),
        }
    }
}

impl From<ThreadConfig> for ThreadSetting {
    fn from(config: ThreadConfig) -> Self {
        match config {
            ThreadConfig::Auto => ThreadSetting::Keyword("auto".to_string()),
            ThreadConfig::Fixed(n) => ThreadSetting::Count(n),
        }
    }
}

/// Configuration for parallel tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Worker pool size.
    pub threads: ThreadConfig,
    /// Minimum number of roots to use the worker pool; smaller batches run
    /// sequentially on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            threads: ThreadConfig::Auto,
            parallel_threshold: 32,
        }
    }
}

impl ParallelConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Builder: set thread config.
    #[must_use]
    pub fn with_threads(mut self, threads: ThreadConfig) -> Self {
        self.threads = threads;
        self
    }

    /// Builder: set fixed thread count.
    #[must_use]
    pub fn with_fixed_threads(mut self, count: usize) -> Self {
        self.threads = ThreadConfig::Fixed(count);
        self
    }

    /// Determines if the worker pool should be used for `root_count` roots.
    #[must_use]
    pub fn should_parallelize(&self, root_count: usize) -> bool {
        root_count >= self.parallel_threshold && self.effective_threads() > 1
    }

    /// Gets effective thread count for this config.
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        self.threads.effective_threads()
    }

    /// Checks the config for values the pool cannot honor.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when a fixed thread count of zero is requested.
    pub fn validate(&self) -> Result<()> {
        if self.threads == ThreadConfig::Fixed(0) {
            return Err(Error::Config(
                "threads must be \"auto\" or at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
