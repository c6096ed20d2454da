//! Error types for spantree-core.

use thiserror::Error;

/// Errors produced while decoding graphs, building trees or loading config.
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not a well-formed adjacency document.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A neighbor id is not declared as a top-level vertex (strict policy only).
    #[error("Undeclared vertex '{vertex}' referenced by '{referenced_by}'")]
    UndeclaredVertex {
        /// The neighbor id with no adjacency entry.
        vertex: String,
        /// The vertex whose neighbor list mentions it.
        referenced_by: String,
    },

    /// The tree computation for one root panicked.
    #[error("Tree construction for root '{root}' panicked: {message}")]
    TaskPanicked {
        /// Root whose unit of work failed.
        root: String,
        /// Panic payload, when it was a string.
        message: String,
    },

    /// The worker pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// No successful tree exists for the requested root.
    #[error("Unknown root: {0}")]
    UnknownRoot(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err.to_string())
    }
}

/// Result type alias for spantree operations.
pub type Result<T> = std::result::Result<T, Error>;
