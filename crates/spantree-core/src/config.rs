//! Layered configuration: defaults, then a TOML file, then `SPANTREE_*` env vars.
//!
//! ```toml
//! undeclared_vertices = "reject"
//!
//! [parallel]
//! threads = "auto"        # or a positive integer
//! parallel_threshold = 32
//!
//! [output]
//! pretty = true
//! ```
//!
//! Nested keys are reachable from the environment with a double underscore,
//! e.g. `SPANTREE_PARALLEL__THREADS=4`.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::UndeclaredVertexPolicy;
use crate::parallel::ParallelConfig;

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "spantree.toml";

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "SPANTREE_";

/// Output encoding options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output (2-space indent).
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpantreeConfig {
    /// Handling of neighbor ids with no adjacency entry.
    pub undeclared_vertices: UndeclaredVertexPolicy,
    /// Worker pool settings.
    pub parallel: ParallelConfig,
    /// Output encoding.
    pub output: OutputConfig,
}

impl SpantreeConfig {
    /// Builds the provider chain without extracting it.
    ///
    /// With `path = None` the default file is used if present. An explicit
    /// path must exist.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let figment = Figment::from(Serialized::defaults(Self::default()));
        let figment = match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                figment.merge(Toml::file(path))
            }
            None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        };
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Loads and validates the configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_figment(&Self::figment(path)?)
    }

    /// Extracts and validates a configuration from any figment.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be honored.
    pub fn validate(&self) -> Result<()> {
        self.parallel.validate()
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
