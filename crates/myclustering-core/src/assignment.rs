//! The label model shared by every algorithm.
//!
//! Flat labels use `-1` for noise; the grouped view splits samples into
//! clusters (largest first) and a noise list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Label given to samples that belong to no cluster.
pub const NOISE: i64 = -1;

/// Per-sample cluster labels produced by a fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// One label per input row. Cluster ids start at 0; noise is -1.
    labels: Vec<i64>,
}

impl Assignment {
    /// Wrap raw labels. Cluster ids need not be contiguous.
    pub fn new(labels: Vec<i64>) -> Self {
        Self { labels }
    }

    /// Flat per-sample labels.
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of distinct non-noise clusters.
    pub fn n_clusters(&self) -> usize {
        let mut ids: Vec<i64> = self.labels.iter().copied().filter(|&l| l >= 0).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// Number of noise samples.
    pub fn n_noise(&self) -> usize {
        self.labels.iter().filter(|&&l| l == NOISE).count()
    }

    /// Fraction of samples labelled noise. 0.0 for an empty assignment.
    pub fn noise_ratio(&self) -> f64 {
        if self.labels.is_empty() {
            return 0.0;
        }
        self.n_noise() as f64 / self.labels.len() as f64
    }

    /// Grouped view: sample indices per cluster, largest cluster first.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut map: HashMap<i64, Vec<usize>> = HashMap::new();
        for (idx, &label) in self.labels.iter().enumerate() {
            if label >= 0 {
                map.entry(label).or_default().push(idx);
            }
        }
        let mut clusters: Vec<Vec<usize>> = map.into_values().collect();
        // Largest first; equal sizes ordered by first member for determinism.
        clusters.sort_by_key(|c| (std::cmp::Reverse(c.len()), c[0]));
        clusters
    }

    /// Indices of noise samples, in input order.
    pub fn noise(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &l)| l == NOISE)
            .map(|(i, _)| i)
            .collect()
    }
}
