use serde::{Deserialize, Serialize};

use super::defaults;
use crate::metric::DistanceMetric;

/// DBSCAN configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DbscanConfig {
    /// Neighbourhood radius.
    pub eps: f64,
    /// Core-point threshold, self included.
    pub min_samples: usize,
    /// Neighbourhood metric.
    pub metric: DistanceMetric,
}

impl Default for DbscanConfig {
    fn default() -> Self {
        Self {
            eps: defaults::DEFAULT_EPS,
            min_samples: defaults::DEFAULT_MIN_SAMPLES,
            metric: DistanceMetric::Euclidean,
        }
    }
}
