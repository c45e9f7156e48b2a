//! Workspace configuration, loaded from TOML.

mod dbscan_config;
mod defaults;
mod hierarchy_config;
mod kmeans_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use dbscan_config::DbscanConfig;
pub use hierarchy_config::HierarchyConfig;
pub use kmeans_config::KMeansConfig;

use crate::errors::{ClusteringError, ClusteringResult};

/// Top-level configuration covering every algorithm.
///
/// All fields default, so a partial TOML file only overrides what it names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    pub kmeans: KMeansConfig,
    pub dbscan: DbscanConfig,
    pub hierarchy: HierarchyConfig,
}

impl ClusteringConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(input: &str) -> ClusteringResult<Self> {
        toml::from_str(input).map_err(|e| ClusteringError::ConfigError {
            message: e.to_string(),
        })
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> ClusteringResult<String> {
        toml::to_string_pretty(self).map_err(|e| ClusteringError::ConfigError {
            message: e.to_string(),
        })
    }

    /// Load from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> ClusteringResult<Self> {
        let contents =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ClusteringError::ConfigError {
                message: format!("{}: {e}", path.as_ref().display()),
            })?;
        Self::from_toml_str(&contents)
    }
}
