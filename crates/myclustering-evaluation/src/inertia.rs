//! Within-cluster sum of squared distances.

use ndarray::ArrayView2;

use myclustering_core::{Assignment, ClusteringError, ClusteringResult};

use crate::silhouette::check_lengths;

/// Sum of squared Euclidean distances from each non-noise sample to its
/// cluster centroid row.
///
/// `centroids` row `c` must correspond to label `c`.
pub fn inertia(
    data: ArrayView2<'_, f64>,
    centroids: ArrayView2<'_, f64>,
    assignment: &Assignment,
) -> ClusteringResult<f64> {
    check_lengths(data.nrows(), assignment)?;
    if data.ncols() != centroids.ncols() {
        return Err(ClusteringError::DimensionMismatch {
            expected: data.ncols(),
            found: centroids.ncols(),
        });
    }

    let mut total = 0.0;
    for (i, &label) in assignment.labels().iter().enumerate() {
        if label < 0 {
            continue;
        }
        let c = label as usize;
        if c >= centroids.nrows() {
            return Err(ClusteringError::invalid_parameter(
                "assignment",
                format!("label {c} has no centroid row"),
            ));
        }
        total += data
            .row(i)
            .iter()
            .zip(centroids.row(c).iter())
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum::<f64>();
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn matches_hand_computation() {
        let data = array![[0.0], [2.0], [10.0]];
        let centroids = array![[1.0], [10.0]];
        let assignment = Assignment::new(vec![0, 0, 1]);
        let v = inertia(data.view(), centroids.view(), &assignment).unwrap();
        assert!((v - 2.0).abs() < 1e-12);
    }

    #[test]
    fn noise_is_skipped() {
        let data = array![[0.0], [1000.0]];
        let centroids = array![[0.0]];
        let assignment = Assignment::new(vec![0, -1]);
        let v = inertia(data.view(), centroids.view(), &assignment).unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn dangling_label_is_rejected() {
        let data = array![[0.0]];
        let centroids = array![[0.0]];
        let assignment = Assignment::new(vec![3]);
        assert!(inertia(data.view(), centroids.view(), &assignment).is_err());
    }
}
