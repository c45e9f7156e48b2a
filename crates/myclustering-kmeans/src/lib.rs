//! # myclustering-kmeans
//!
//! K-means clustering: k-means++ seeding, parallel Lloyd iteration,
//! empty-cluster repair, and convergence detection on centroid displacement.

mod engine;
mod init;

pub use engine::KMeans;
