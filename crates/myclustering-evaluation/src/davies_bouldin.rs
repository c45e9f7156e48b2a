//! Davies–Bouldin index (lower is better).

use ndarray::{Array1, ArrayView1, ArrayView2};

use myclustering_core::dataset::validate_dataset;
use myclustering_core::{Assignment, ClusteringError, ClusteringResult};

use crate::silhouette::check_lengths;

/// Davies–Bouldin index over non-noise samples, Euclidean geometry.
///
/// Requires at least two clusters. Coincident centroids push the index to
/// infinity rather than erroring.
pub fn davies_bouldin_index(
    data: ArrayView2<'_, f64>,
    assignment: &Assignment,
) -> ClusteringResult<f64> {
    validate_dataset(data)?;
    check_lengths(data.nrows(), assignment)?;

    let clusters = assignment.clusters();
    let k = clusters.len();
    if k < 2 {
        return Err(ClusteringError::invalid_parameter(
            "assignment",
            format!("davies-bouldin needs at least 2 clusters, found {k}"),
        ));
    }

    let dims = data.ncols();
    let centroids: Vec<Array1<f64>> = clusters
        .iter()
        .map(|members| {
            let mut centroid = Array1::zeros(dims);
            for &i in members {
                centroid += &data.row(i);
            }
            centroid / members.len() as f64
        })
        .collect();

    // Mean member-to-centroid scatter per cluster.
    let scatter: Vec<f64> = clusters
        .iter()
        .zip(&centroids)
        .map(|(members, centroid)| {
            members
                .iter()
                .map(|&i| euclidean(data.row(i), centroid.view()))
                .sum::<f64>()
                / members.len() as f64
        })
        .collect();

    let mut total = 0.0;
    for i in 0..k {
        let mut worst: f64 = 0.0;
        for j in 0..k {
            if i == j {
                continue;
            }
            let separation = euclidean(centroids[i].view(), centroids[j].view());
            let ratio = if separation > 0.0 {
                (scatter[i] + scatter[j]) / separation
            } else {
                f64::INFINITY
            };
            worst = worst.max(ratio);
        }
        total += worst;
    }
    Ok(total / k as f64)
}

fn euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
