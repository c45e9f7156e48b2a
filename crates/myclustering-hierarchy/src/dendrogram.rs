//! Merge history of a hierarchical fit, plus flat cuts.

use serde::{Deserialize, Serialize};

use myclustering_core::{Assignment, ClusteringError, ClusteringResult};

/// One agglomeration step.
///
/// Cluster ids: `0..n` are leaves; the cluster created by step `t` has id
/// `n + t`. `left < right` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeStep {
    pub left: usize,
    pub right: usize,
    /// Merge height under the fitted linkage.
    pub distance: f64,
    /// Total samples in the merged cluster.
    pub size: usize,
}

/// Ordered merge history for `n_samples` leaves: exactly n−1 steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dendrogram {
    n_samples: usize,
    steps: Vec<MergeStep>,
}

impl Dendrogram {
    /// Assemble from a merge history. Produced by
    /// [`crate::AgglomerativeClustering::fit`]; exposed for (de)serialization.
    pub fn new(n_samples: usize, steps: Vec<MergeStep>) -> Self {
        Self { n_samples, steps }
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn steps(&self) -> &[MergeStep] {
        &self.steps
    }

    /// Cut into exactly `k` flat clusters by undoing the last k−1 merges.
    pub fn cut(&self, k: usize) -> ClusteringResult<Assignment> {
        if k == 0 || k > self.n_samples {
            return Err(ClusteringError::invalid_parameter(
                "k",
                format!("must be in 1..={} for {} samples", self.n_samples, self.n_samples),
            ));
        }
        Ok(self.apply_merges(self.n_samples - k))
    }

    /// Cut at a merge height: apply the leading merges with
    /// `distance <= threshold`.
    pub fn cut_at_distance(&self, threshold: f64) -> ClusteringResult<Assignment> {
        if !threshold.is_finite() {
            return Err(ClusteringError::invalid_parameter(
                "threshold",
                "must be finite",
            ));
        }
        let n_merges = self
            .steps
            .iter()
            .take_while(|s| s.distance <= threshold)
            .count();
        Ok(self.apply_merges(n_merges))
    }

    /// Left-to-right leaf ordering for dendrogram rendering.
    pub fn leaf_order(&self) -> Vec<usize> {
        if self.steps.is_empty() {
            return (0..self.n_samples).collect();
        }
        let n = self.n_samples;
        let root = n + self.steps.len() - 1;
        let mut order = Vec::with_capacity(n);
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if id < n {
                order.push(id);
            } else {
                let step = &self.steps[id - n];
                // Right first so the left subtree is emitted first.
                stack.push(step.right);
                stack.push(step.left);
            }
        }
        order
    }

    /// Apply the first `n_merges` steps and label the surviving sets,
    /// numbered from 0 in order of first appearance.
    fn apply_merges(&self, n_merges: usize) -> Assignment {
        let n = self.n_samples;
        let mut parent: Vec<usize> = (0..n).collect();
        // Representative leaf for each cluster id seen so far.
        let mut reps: Vec<usize> = (0..n).collect();

        for step in self.steps.iter().take(n_merges) {
            let ra = find(&mut parent, reps[step.left]);
            let rb = find(&mut parent, reps[step.right]);
            parent[rb] = ra;
            reps.push(ra);
        }

        let mut labels = vec![0i64; n];
        let mut next_label = 0i64;
        let mut label_of_root = std::collections::HashMap::new();
        for i in 0..n {
            let root = find(&mut parent, i);
            let label = *label_of_root.entry(root).or_insert_with(|| {
                let l = next_label;
                next_label += 1;
                l
            });
            labels[i] = label;
        }
        Assignment::new(labels)
    }
}

/// Union-find lookup with path compression.
fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}
