//! # myclustering-core
//!
//! Foundation crate for the myclustering workspace.
//! Defines distance metrics, dataset validation, the label model,
//! errors, config, and constants. Every other crate depends on this.

pub mod assignment;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod linkage;
pub mod metric;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use assignment::{Assignment, NOISE};
pub use config::ClusteringConfig;
pub use errors::{ClusteringError, ClusteringResult};
pub use linkage::Linkage;
pub use metric::DistanceMetric;
pub use traits::IClusterer;
