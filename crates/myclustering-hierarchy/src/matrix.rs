//! Condensed pairwise distance matrix.
//!
//! Only the upper triangle is stored: n(n−1)/2 values for n samples.
//! Rows are computed in parallel.

use ndarray::ArrayView2;
use rayon::prelude::*;

use myclustering_core::dataset::validate_dataset;
use myclustering_core::{ClusteringResult, DistanceMetric};

/// Symmetric pairwise distances in condensed (upper-triangle) form.
#[derive(Debug, Clone)]
pub struct CondensedMatrix {
    n: usize,
    values: Vec<f64>,
}

impl CondensedMatrix {
    /// Number of samples the matrix covers.
    pub fn n_samples(&self) -> usize {
        self.n
    }

    /// Distance between samples `i` and `j`. Zero on the diagonal.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        self.values[self.offset(i, j)]
    }

    /// Condensed storage, row-major over the upper triangle.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        // Rows before i contribute (n-1) + (n-2) + … ; then columns past i.
        i * (2 * self.n - i - 1) / 2 + (j - i - 1)
    }
}

/// Compute the condensed pairwise distance matrix for a validated dataset.
pub fn pairwise_distances(
    data: ArrayView2<'_, f64>,
    metric: DistanceMetric,
) -> ClusteringResult<CondensedMatrix> {
    validate_dataset(data)?;
    let n = data.nrows();

    let values: Vec<f64> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            let row = data.row(i);
            (i + 1..n).map(move |j| metric.distance(row, data.row(j)))
        })
        .collect();

    Ok(CondensedMatrix { n, values })
}
