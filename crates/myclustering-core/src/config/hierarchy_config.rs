use serde::{Deserialize, Serialize};

use crate::linkage::Linkage;
use crate::metric::DistanceMetric;

/// Agglomerative clustering configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Merge criterion.
    pub linkage: Linkage,
    /// Pairwise metric. Ward linkage requires Euclidean.
    pub metric: DistanceMetric,
}
