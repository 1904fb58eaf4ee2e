//! Configuration for graphstep
//!
//! Configuration is read from `graphstep.toml` in the working root, or from
//! an explicit path. A missing file yields the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphstepError, Result};

pub use types::{DijkstraConfig, GraphConfig, GraphstepConfig, ReplayConfig, CONFIG_FILE_NAME};

impl GraphstepConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphstepConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphstepError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the config file: an explicit path must exist, otherwise
    /// `graphstep.toml` under `root` is used when present.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let resolved: PathBuf = if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            };
            return Self::load(&resolved);
        }

        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            tracing::trace!(root = %root.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Reject values the engines and replay loop cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.graph.default_weight.is_finite() {
            return Err(GraphstepError::invalid_value(
                "graph.default_weight",
                self.graph.default_weight,
            ));
        }
        Ok(())
    }
}
