//! Lloyd iteration with parallel assignment and empty-cluster repair.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;
use tracing::{debug, info};

use myclustering_core::config::KMeansConfig;
use myclustering_core::constants::{DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};
use myclustering_core::dataset::{validate_dataset, validate_query};
use myclustering_core::{
    Assignment, ClusteringError, ClusteringResult, DistanceMetric, IClusterer,
};

use crate::init;

/// State recorded by a successful fit.
#[derive(Debug, Clone)]
struct Fitted {
    centroids: Array2<f64>,
    inertia: f64,
    n_iter: usize,
    converged: bool,
}

/// K-means estimator.
///
/// Builder-style configuration, then [`KMeans::fit`] / [`KMeans::predict`]:
///
/// ```
/// use myclustering_kmeans::KMeans;
/// use ndarray::array;
///
/// let data = array![[0.0, 0.0], [0.1, 0.0], [9.0, 9.0], [9.1, 9.0]];
/// let mut kmeans = KMeans::new(2).max_iter(100).seed(7);
/// let assignment = kmeans.fit(data.view()).unwrap();
/// assert_eq!(assignment.n_clusters(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    n_clusters: usize,
    max_iter: usize,
    tolerance: f64,
    metric: DistanceMetric,
    seed: u64,
    fitted: Option<Fitted>,
}

impl KMeans {
    /// Create an estimator for `n_clusters` clusters with default settings.
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: DEFAULT_MAX_ITER,
            tolerance: DEFAULT_TOLERANCE,
            metric: DistanceMetric::Euclidean,
            seed: 0,
            fitted: None,
        }
    }

    /// Build from a [`KMeansConfig`].
    pub fn from_config(config: &KMeansConfig) -> Self {
        Self {
            n_clusters: config.n_clusters,
            max_iter: config.max_iter,
            tolerance: config.tolerance,
            metric: config.metric,
            seed: config.seed,
            fitted: None,
        }
    }

    /// Iteration cap for the centroid-update loop.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Convergence tolerance on maximum centroid displacement.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Assignment metric. Only (squared) Euclidean is accepted at fit time.
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// RNG seed for k-means++ initialisation.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fitted centroids, one row per cluster.
    pub fn centroids(&self) -> Option<&Array2<f64>> {
        self.fitted.as_ref().map(|f| &f.centroids)
    }

    /// Within-cluster sum of squared distances after the fit.
    pub fn inertia(&self) -> Option<f64> {
        self.fitted.as_ref().map(|f| f.inertia)
    }

    /// Iterations run before stopping.
    pub fn n_iter(&self) -> Option<usize> {
        self.fitted.as_ref().map(|f| f.n_iter)
    }

    /// Whether the fit stopped on tolerance rather than the iteration cap.
    pub fn converged(&self) -> Option<bool> {
        self.fitted.as_ref().map(|f| f.converged)
    }

    /// Fit the estimator and return per-sample labels.
    pub fn fit(&mut self, data: ArrayView2<'_, f64>) -> ClusteringResult<Assignment> {
        self.validate_params()?;
        validate_dataset(data)?;

        let n = data.nrows();
        if n < self.n_clusters {
            return Err(ClusteringError::InsufficientSamples {
                required: self.n_clusters,
                found: n,
            });
        }

        let mut rng = fastrand::Rng::with_seed(self.seed);
        let mut centroids = init::kmeans_plus_plus(data, self.n_clusters, &mut rng);

        let mut n_iter = 0;
        let mut converged = false;

        for iter in 1..=self.max_iter {
            n_iter = iter;
            let assigned = assign_all(data, centroids.view());
            let new_centroids = update_centroids(data, &assigned, centroids.view());

            let shift = max_centroid_shift(centroids.view(), new_centroids.view());
            centroids = new_centroids;

            debug!(iter, shift, "centroid update");

            if shift < self.tolerance {
                converged = true;
                break;
            }
        }

        // Final assignment against the settled centroids.
        let assigned = assign_all(data, centroids.view());
        let inertia: f64 = assigned.iter().map(|&(_, d2)| d2).sum();
        let labels: Vec<i64> = assigned.iter().map(|&(c, _)| c as i64).collect();

        info!(
            k = self.n_clusters,
            n_iter,
            converged,
            inertia,
            "k-means fit complete"
        );

        self.fitted = Some(Fitted {
            centroids,
            inertia,
            n_iter,
            converged,
        });
        Ok(Assignment::new(labels))
    }

    /// Assign new points to the fitted centroids.
    pub fn predict(&self, data: ArrayView2<'_, f64>) -> ClusteringResult<Assignment> {
        let fitted = self.fitted.as_ref().ok_or(ClusteringError::NotFitted)?;
        validate_query(data, fitted.centroids.ncols())?;
        let assigned = assign_all(data, fitted.centroids.view());
        Ok(Assignment::new(
            assigned.iter().map(|&(c, _)| c as i64).collect(),
        ))
    }

    fn validate_params(&self) -> ClusteringResult<()> {
        if self.n_clusters == 0 {
            return Err(ClusteringError::invalid_parameter(
                "n_clusters",
                "must be at least 1",
            ));
        }
        if self.max_iter == 0 {
            return Err(ClusteringError::invalid_parameter(
                "max_iter",
                "must be at least 1",
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ClusteringError::invalid_parameter(
                "tolerance",
                "must be finite and non-negative",
            ));
        }
        match self.metric {
            DistanceMetric::Euclidean | DistanceMetric::SquaredEuclidean => Ok(()),
            other => Err(ClusteringError::invalid_parameter(
                "metric",
                format!("{} is not valid for k-means; centroid means minimise only the (squared) Euclidean objective", other.name()),
            )),
        }
    }
}

impl IClusterer for KMeans {
    fn fit_predict(&mut self, data: ArrayView2<'_, f64>) -> ClusteringResult<Assignment> {
        self.fit(data)
    }

    fn n_clusters(&self) -> Option<usize> {
        self.fitted.as_ref().map(|_| self.n_clusters)
    }

    fn name(&self) -> &str {
        "kmeans"
    }
}

/// Parallel assignment step: nearest centroid and squared distance per row.
fn assign_all(data: ArrayView2<'_, f64>, centroids: ArrayView2<'_, f64>) -> Vec<(usize, f64)> {
    (0..data.nrows())
        .into_par_iter()
        .map(|i| nearest_centroid(data.row(i), centroids))
        .collect()
}

fn nearest_centroid(
    point: ArrayView1<'_, f64>,
    centroids: ArrayView2<'_, f64>,
) -> (usize, f64) {
    let mut best = 0usize;
    let mut best_d2 = f64::INFINITY;
    for (c, centroid) in centroids.axis_iter(Axis(0)).enumerate() {
        let d2: f64 = point
            .iter()
            .zip(centroid.iter())
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum();
        if d2 < best_d2 {
            best = c;
            best_d2 = d2;
        }
    }
    (best, best_d2)
}

/// Update step: mean of members per cluster, with empty-cluster repair.
fn update_centroids(
    data: ArrayView2<'_, f64>,
    assigned: &[(usize, f64)],
    current: ArrayView2<'_, f64>,
) -> Array2<f64> {
    let k = current.nrows();
    let dims = current.ncols();
    let mut sums = Array2::<f64>::zeros((k, dims));
    let mut counts = vec![0usize; k];

    for (i, &(c, _)) in assigned.iter().enumerate() {
        let row = data.row(i);
        let mut sum = sums.row_mut(c);
        sum.zip_mut_with(&row, |s, &v| *s += v);
        counts[c] += 1;
    }

    // A centroid that lost all members is reseeded to the point currently
    // farthest from its nearest centroid, so k clusters survive the update.
    let mut distances: Vec<f64> = assigned.iter().map(|&(_, d2)| d2).collect();
    for c in 0..k {
        if counts[c] == 0 {
            let farthest = distances
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| i)
                .unwrap_or(0);
            sums.row_mut(c).assign(&data.row(farthest));
            counts[c] = 1;
            distances[farthest] = 0.0;
        }
    }

    for c in 0..k {
        let denom = counts[c] as f64;
        sums.row_mut(c).mapv_inplace(|v| v / denom);
    }
    sums
}

/// Maximum Euclidean displacement between old and new centroids.
fn max_centroid_shift(old: ArrayView2<'_, f64>, new: ArrayView2<'_, f64>) -> f64 {
    old.axis_iter(Axis(0))
        .zip(new.axis_iter(Axis(0)))
        .map(|(a, b)| {
            a.iter()
                .zip(b.iter())
                .map(|(x, y)| {
                    let d = x - y;
                    d * d
                })
                .sum::<f64>()
                .sqrt()
        })
        .fold(0.0, f64::max)
}
