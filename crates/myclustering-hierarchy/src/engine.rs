//! Agglomerative merge loop over the Lance–Williams recurrence.

use ndarray::ArrayView2;
use tracing::{debug, info};

use myclustering_core::config::HierarchyConfig;
use myclustering_core::dataset::validate_dataset;
use myclustering_core::{
    Assignment, ClusteringError, ClusteringResult, DistanceMetric, IClusterer, Linkage,
};

use crate::dendrogram::{Dendrogram, MergeStep};
use crate::matrix;

/// Agglomerative clustering estimator.
///
/// [`fit`](Self::fit) returns the full [`Dendrogram`]; the
/// [`IClusterer`] surface additionally cuts it into `n_clusters` flat
/// clusters (default 2).
#[derive(Debug, Clone)]
pub struct AgglomerativeClustering {
    linkage: Linkage,
    metric: DistanceMetric,
    n_clusters: usize,
    fitted: Option<Dendrogram>,
}

impl AgglomerativeClustering {
    pub fn new(linkage: Linkage) -> Self {
        Self {
            linkage,
            metric: DistanceMetric::Euclidean,
            n_clusters: 2,
            fitted: None,
        }
    }

    /// Build from a [`HierarchyConfig`].
    pub fn from_config(config: &HierarchyConfig) -> Self {
        Self::new(config.linkage).metric(config.metric)
    }

    /// Pairwise metric. Ward linkage accepts Euclidean only.
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Flat cluster count used by [`IClusterer::fit_predict`].
    pub fn n_clusters(mut self, n_clusters: usize) -> Self {
        self.n_clusters = n_clusters;
        self
    }

    /// Dendrogram from the last fit.
    pub fn dendrogram(&self) -> Option<&Dendrogram> {
        self.fitted.as_ref()
    }

    /// Run the n−1 merges and return the dendrogram.
    pub fn fit(&mut self, data: ArrayView2<'_, f64>) -> ClusteringResult<Dendrogram> {
        validate_dataset(data)?;
        if self.linkage == Linkage::Ward && self.metric != DistanceMetric::Euclidean {
            return Err(ClusteringError::invalid_parameter(
                "metric",
                format!("ward linkage requires euclidean, got {}", self.metric.name()),
            ));
        }

        let n = data.nrows();

        // Ward runs the recurrence on squared Euclidean distances and
        // reports square roots of the accumulated cost (scipy convention).
        let working_metric = if self.linkage == Linkage::Ward {
            DistanceMetric::SquaredEuclidean
        } else {
            self.metric
        };
        let condensed = matrix::pairwise_distances(data, working_metric)?;

        // Full working matrix indexed by slot; slot j is retired into slot i
        // on each merge (i < j).
        let mut dist = vec![0.0f64; n * n];
        for i in 0..n {
            for j in 0..n {
                dist[i * n + j] = condensed.get(i, j);
            }
        }

        let mut active = vec![true; n];
        let mut sizes = vec![1usize; n];
        let mut ids: Vec<usize> = (0..n).collect();
        let mut steps = Vec::with_capacity(n.saturating_sub(1));

        for t in 0..n.saturating_sub(1) {
            // Closest active pair; ties go to the lowest (i, j).
            let (mut best_i, mut best_j, mut best_d) = (usize::MAX, usize::MAX, f64::INFINITY);
            for i in 0..n {
                if !active[i] {
                    continue;
                }
                for j in i + 1..n {
                    if active[j] && dist[i * n + j] < best_d {
                        best_d = dist[i * n + j];
                        best_i = i;
                        best_j = j;
                    }
                }
            }

            let (i, j) = (best_i, best_j);
            let (si, sj) = (sizes[i], sizes[j]);
            let merged_size = si + sj;
            let height = if self.linkage == Linkage::Ward {
                best_d.max(0.0).sqrt()
            } else {
                best_d
            };

            let (left, right) = if ids[i] < ids[j] {
                (ids[i], ids[j])
            } else {
                (ids[j], ids[i])
            };
            debug!(step = t, left, right, height, "merge");
            steps.push(MergeStep {
                left,
                right,
                distance: height,
                size: merged_size,
            });

            // Lance–Williams update of every surviving cluster's distance to
            // the merged cluster, written into slot i.
            for k in 0..n {
                if !active[k] || k == i || k == j {
                    continue;
                }
                let dki = dist[k.min(i) * n + k.max(i)];
                let dkj = dist[k.min(j) * n + k.max(j)];
                let updated = match self.linkage {
                    Linkage::Single => dki.min(dkj),
                    Linkage::Complete => dki.max(dkj),
                    Linkage::Average => {
                        (si as f64 * dki + sj as f64 * dkj) / merged_size as f64
                    }
                    Linkage::Ward => {
                        let sk = sizes[k] as f64;
                        ((si as f64 + sk) * dki + (sj as f64 + sk) * dkj
                            - sk * best_d)
                            / (merged_size as f64 + sk)
                    }
                };
                dist[k.min(i) * n + k.max(i)] = updated;
                dist[k.max(i) * n + k.min(i)] = updated;
            }

            active[j] = false;
            sizes[i] = merged_size;
            ids[i] = n + t;
        }

        info!(
            n_samples = n,
            merges = steps.len(),
            linkage = self.linkage.name(),
            "agglomerative fit complete"
        );

        let dendrogram = Dendrogram::new(n, steps);
        self.fitted = Some(dendrogram.clone());
        Ok(dendrogram)
    }
}

impl IClusterer for AgglomerativeClustering {
    fn fit_predict(&mut self, data: ArrayView2<'_, f64>) -> ClusteringResult<Assignment> {
        let dendrogram = self.fit(data)?;
        let k = self.n_clusters.min(dendrogram.n_samples());
        dendrogram.cut(k)
    }

    fn n_clusters(&self) -> Option<usize> {
        self.fitted
            .as_ref()
            .map(|d| self.n_clusters.min(d.n_samples()))
    }

    fn name(&self) -> &str {
        "agglomerative"
    }
}
