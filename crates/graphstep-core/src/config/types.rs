//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// File name looked up in the working root
pub const CONFIG_FILE_NAME: &str = "graphstep.toml";

/// Top-level graphstep configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphstepConfig {
    /// Defaults for graphs built from the command line
    #[serde(default)]
    pub graph: GraphConfig,

    /// Playback pacing
    #[serde(default)]
    pub replay: ReplayConfig,

    /// Shortest-path engine behavior
    #[serde(default)]
    pub dijkstra: DijkstraConfig,
}

/// Defaults applied when building a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Build directed graphs unless `--directed` says otherwise
    #[serde(default)]
    pub directed: bool,

    /// Weight used for edges given without one
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            default_weight: default_weight(),
        }
    }
}

/// Replay pacing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Milliseconds between revealed steps
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

/// Shortest-path engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraConfig {
    /// Emit a step for vertices settled at infinite distance
    #[serde(default = "default_emit_unreachable")]
    pub emit_unreachable: bool,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        Self {
            emit_unreachable: default_emit_unreachable(),
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

fn default_interval_ms() -> u64 {
    2000
}

fn default_emit_unreachable() -> bool {
    true
}
