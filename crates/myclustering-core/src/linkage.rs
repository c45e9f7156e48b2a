//! Linkage criteria for agglomerative clustering.

use serde::{Deserialize, Serialize};

/// How the distance between two merged clusters is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Linkage {
    /// Minimum pairwise distance between members.
    Single,
    /// Maximum pairwise distance between members.
    Complete,
    /// Unweighted average of pairwise distances (UPGMA).
    Average,
    /// Minimum increase of within-cluster variance. Euclidean only.
    Ward,
}

impl Default for Linkage {
    fn default() -> Self {
        Self::Average
    }
}

impl Linkage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Complete => "complete",
            Self::Average => "average",
            Self::Ward => "ward",
        }
    }
}
