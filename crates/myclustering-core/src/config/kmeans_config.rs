use serde::{Deserialize, Serialize};

use super::defaults;
use crate::metric::DistanceMetric;

/// K-means configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansConfig {
    /// Number of clusters (k).
    pub n_clusters: usize,
    /// Iteration cap for the centroid-update loop.
    pub max_iter: usize,
    /// Convergence tolerance on maximum centroid displacement.
    pub tolerance: f64,
    /// Assignment metric. Only (squared) Euclidean is valid for k-means.
    pub metric: DistanceMetric,
    /// RNG seed for k-means++ initialisation.
    pub seed: u64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            n_clusters: defaults::DEFAULT_N_CLUSTERS,
            max_iter: defaults::DEFAULT_MAX_ITER,
            tolerance: defaults::DEFAULT_TOLERANCE,
            metric: DistanceMetric::Euclidean,
            seed: defaults::DEFAULT_SEED,
        }
    }
}
