//! Seams between algorithm crates and callers.

use ndarray::ArrayView2;

use crate::assignment::Assignment;
use crate::errors::ClusteringResult;

/// A clustering estimator.
///
/// Object-safe so pipelines can hold `Box<dyn IClusterer>` and swap
/// algorithms behind one interface.
pub trait IClusterer: Send + Sync {
    /// Fit the estimator and return per-sample labels.
    fn fit_predict(&mut self, data: ArrayView2<'_, f64>) -> ClusteringResult<Assignment>;

    /// Number of clusters found, or `None` before fitting.
    fn n_clusters(&self) -> Option<usize>;

    /// Human-readable estimator name.
    fn name(&self) -> &str;
}
