//! Pointwise distance metrics.
//!
//! All metrics accumulate in f64 and are symmetric. Cosine distance of a
//! zero-magnitude vector is defined as 1.0 (similarity 0), so degenerate
//! rows never produce NaN downstream.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// Distance metric used for assignment and pairwise-matrix computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    Euclidean,
    SquaredEuclidean,
    Manhattan,
    Chebyshev,
    Cosine,
}

impl Default for DistanceMetric {
    fn default() -> Self {
        Self::Euclidean
    }
}

impl DistanceMetric {
    /// Distance between two points of equal dimensionality.
    ///
    /// Callers are expected to pass views from the same validated dataset;
    /// mismatched lengths are a programming error and panic via ndarray's
    /// zip. Use [`crate::dataset::validate_dataset`] at the API boundary.
    pub fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
        match self {
            Self::Euclidean => squared_euclidean(a, b).sqrt(),
            Self::SquaredEuclidean => squared_euclidean(a, b),
            Self::Manhattan => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).abs())
                .sum(),
            Self::Chebyshev => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
            Self::Cosine => cosine_distance(a, b),
        }
    }

    /// Human-readable metric name, matching the serde encoding.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::SquaredEuclidean => "squared_euclidean",
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
            Self::Cosine => "cosine",
        }
    }
}

fn squared_euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Cosine distance: 1 − cosine similarity, clamped to [0, 2].
/// Returns 1.0 when either vector has zero magnitude.
fn cosine_distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        return 1.0;
    }
    let similarity = (dot / denom).clamp(-1.0, 1.0);
    1.0 - similarity
}
