//! Mean silhouette coefficient.

use ndarray::ArrayView2;
use rayon::prelude::*;

use myclustering_core::dataset::validate_dataset;
use myclustering_core::{
    Assignment, ClusteringError, ClusteringResult, DistanceMetric,
};

/// Mean silhouette over non-noise samples.
///
/// Requires at least two clusters. Members of singleton clusters
/// contribute 0.
pub fn silhouette_score(
    data: ArrayView2<'_, f64>,
    assignment: &Assignment,
    metric: DistanceMetric,
) -> ClusteringResult<f64> {
    validate_dataset(data)?;
    check_lengths(data.nrows(), assignment)?;

    let clusters = assignment.clusters();
    if clusters.len() < 2 {
        return Err(ClusteringError::invalid_parameter(
            "assignment",
            format!("silhouette needs at least 2 clusters, found {}", clusters.len()),
        ));
    }

    // Cluster index per sample; noise excluded from scoring entirely.
    let mut cluster_of = vec![usize::MAX; data.nrows()];
    for (c, members) in clusters.iter().enumerate() {
        for &i in members {
            cluster_of[i] = c;
        }
    }

    let scores: Vec<f64> = (0..data.nrows())
        .into_par_iter()
        .filter(|&i| cluster_of[i] != usize::MAX)
        .map(|i| {
            let own = cluster_of[i];
            if clusters[own].len() == 1 {
                return 0.0;
            }
            let a = mean_distance_to(data, i, &clusters[own], metric, true);
            let b = clusters
                .iter()
                .enumerate()
                .filter(|&(c, _)| c != own)
                .map(|(_, members)| mean_distance_to(data, i, members, metric, false))
                .fold(f64::INFINITY, f64::min);
            (b - a) / a.max(b)
        })
        .collect();

    if scores.is_empty() {
        return Err(ClusteringError::invalid_parameter(
            "assignment",
            "every sample is noise",
        ));
    }
    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Mean distance from sample `i` to `members`, excluding `i` itself when
/// scoring its own cluster.
fn mean_distance_to(
    data: ArrayView2<'_, f64>,
    i: usize,
    members: &[usize],
    metric: DistanceMetric,
    exclude_self: bool,
) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for &j in members {
        if exclude_self && j == i {
            continue;
        }
        total += metric.distance(data.row(i), data.row(j));
        count += 1;
    }
    total / count as f64
}

pub(crate) fn check_lengths(n: usize, assignment: &Assignment) -> ClusteringResult<()> {
    if assignment.len() != n {
        return Err(ClusteringError::invalid_parameter(
            "assignment",
            format!("{} labels for {} samples", assignment.len(), n),
        ));
    }
    Ok(())
}
