//! Neighbourhood queries and cluster expansion.

use std::collections::VecDeque;

use ndarray::ArrayView2;
use rayon::prelude::*;
use tracing::info;

use myclustering_core::config::DbscanConfig;
use myclustering_core::constants::{DEFAULT_EPS, DEFAULT_MIN_SAMPLES};
use myclustering_core::dataset::validate_dataset;
use myclustering_core::{
    Assignment, ClusteringError, ClusteringResult, DistanceMetric, IClusterer, NOISE,
};

/// DBSCAN estimator.
///
/// Cluster ids are assigned in scan order, so a fit is deterministic for a
/// given dataset and parameters.
#[derive(Debug, Clone)]
pub struct Dbscan {
    eps: f64,
    min_samples: usize,
    metric: DistanceMetric,
    found: Option<usize>,
}

impl Dbscan {
    /// `eps`: neighbourhood radius; `min_samples`: core-point threshold,
    /// self included.
    pub fn new(eps: f64, min_samples: usize) -> Self {
        Self {
            eps,
            min_samples,
            metric: DistanceMetric::Euclidean,
            found: None,
        }
    }

    /// Build from a [`DbscanConfig`].
    pub fn from_config(config: &DbscanConfig) -> Self {
        Self::new(config.eps, config.min_samples).metric(config.metric)
    }

    /// Estimator with library defaults (eps 0.5, min_samples 5).
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_EPS, DEFAULT_MIN_SAMPLES)
    }

    /// Neighbourhood metric.
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Fit and label; noise is -1.
    pub fn fit(&mut self, data: ArrayView2<'_, f64>) -> ClusteringResult<Assignment> {
        self.validate_params()?;
        validate_dataset(data)?;

        let n = data.nrows();
        let eps = self.eps;
        let metric = self.metric;

        // Neighbour lists, rows in parallel. Self is always a neighbour.
        let neighbours: Vec<Vec<usize>> = (0..n)
            .into_par_iter()
            .map(|i| {
                let row = data.row(i);
                (0..n)
                    .filter(|&j| metric.distance(row, data.row(j)) <= eps)
                    .collect()
            })
            .collect();

        let core: Vec<bool> = neighbours
            .iter()
            .map(|nbrs| nbrs.len() >= self.min_samples)
            .collect();

        let mut labels = vec![NOISE; n];
        let mut cluster_id = 0i64;

        for i in 0..n {
            if labels[i] != NOISE || !core[i] {
                continue;
            }
            // Breadth-first expansion from a fresh core point.
            labels[i] = cluster_id;
            let mut queue: VecDeque<usize> = neighbours[i].iter().copied().collect();
            while let Some(q) = queue.pop_front() {
                if labels[q] != NOISE {
                    continue;
                }
                labels[q] = cluster_id;
                if core[q] {
                    queue.extend(neighbours[q].iter().copied());
                }
            }
            cluster_id += 1;
        }

        let assignment = Assignment::new(labels);
        self.found = Some(assignment.n_clusters());
        info!(
            n_samples = n,
            clusters = assignment.n_clusters(),
            noise = assignment.n_noise(),
            "dbscan fit complete"
        );
        Ok(assignment)
    }

    fn validate_params(&self) -> ClusteringResult<()> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(ClusteringError::invalid_parameter(
                "eps",
                "must be finite and positive",
            ));
        }
        if self.min_samples == 0 {
            return Err(ClusteringError::invalid_parameter(
                "min_samples",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl IClusterer for Dbscan {
    fn fit_predict(&mut self, data: ArrayView2<'_, f64>) -> ClusteringResult<Assignment> {
        self.fit(data)
    }

    fn n_clusters(&self) -> Option<usize> {
        self.found
    }

    fn name(&self) -> &str {
        "dbscan"
    }
}
