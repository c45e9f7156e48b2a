//! k-means++ initialisation.
//!
//! First centroid uniform over rows; each subsequent centroid is drawn with
//! probability proportional to the squared distance to its nearest chosen
//! centroid. Deterministic for a fixed seed.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

/// Choose `k` initial centroids from `data` (k ≤ n_rows, checked upstream).
pub fn kmeans_plus_plus(
    data: ArrayView2<'_, f64>,
    k: usize,
    rng: &mut fastrand::Rng,
) -> Array2<f64> {
    let n = data.nrows();
    let dims = data.ncols();
    let mut centroids = Array2::zeros((k, dims));

    let first = rng.usize(0..n);
    centroids.row_mut(0).assign(&data.row(first));

    // Squared distance from each row to its nearest chosen centroid.
    let mut dist2: Vec<f64> = data
        .axis_iter(Axis(0))
        .map(|row| squared_distance(row, data.row(first)))
        .collect();

    for c in 1..k {
        let total: f64 = dist2.iter().sum();
        let chosen = if total <= f64::EPSILON {
            // All remaining mass is zero (duplicate points); fall back to uniform.
            rng.usize(0..n)
        } else {
            weighted_pick(&dist2, total, rng)
        };
        centroids.row_mut(c).assign(&data.row(chosen));

        // Fold the new centroid into the nearest-distance table.
        for (i, row) in data.axis_iter(Axis(0)).enumerate() {
            let d = squared_distance(row, data.row(chosen));
            if d < dist2[i] {
                dist2[i] = d;
            }
        }
    }

    centroids
}

fn squared_distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Sample an index with probability weight[i] / total.
fn weighted_pick(weights: &[f64], total: f64, rng: &mut fastrand::Rng) -> usize {
    let mut r = rng.f64() * total;
    for (i, &w) in weights.iter().enumerate() {
        if r < w {
            return i;
        }
        r -= w;
    }
    // Floating-point underrun at the tail lands on the last index.
    weights.len() - 1
}
