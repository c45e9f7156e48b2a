//! # myclustering-hierarchy
//!
//! Agglomerative clustering. A condensed pairwise distance matrix feeds
//! n−1 Lance–Williams merges; the resulting dendrogram supports flat cuts
//! by cluster count or merge height.

mod dendrogram;
mod engine;
mod matrix;

pub use dendrogram::{Dendrogram, MergeStep};
pub use engine::AgglomerativeClustering;
pub use matrix::{pairwise_distances, CondensedMatrix};

pub use myclustering_core::Linkage;
