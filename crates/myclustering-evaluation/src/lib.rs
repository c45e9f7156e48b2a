//! # myclustering-evaluation
//!
//! Internal cluster-quality measures: silhouette score, Davies–Bouldin
//! index, inertia, and a thresholded quality assessment.

mod assessment;
mod davies_bouldin;
mod inertia;
mod silhouette;

pub use assessment::{assess, QualityAssessment, MAX_NOISE_RATIO, MIN_SILHOUETTE};
pub use davies_bouldin::davies_bouldin_index;
pub use inertia::inertia;
pub use silhouette::silhouette_score;
