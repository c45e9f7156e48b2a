//! # myclustering
//!
//! Facade crate pulling the whole workspace into one namespace:
//!
//! - [`KMeans`]: centroid clustering with k-means++ seeding
//! - [`AgglomerativeClustering`] / [`Dendrogram`]: hierarchical clustering
//! - [`Dbscan`]: density clustering with noise labelling
//! - [`silhouette_score`], [`davies_bouldin_index`]: quality measures
//! - [`scatter_plot`], [`dendrogram_plot`]: SVG output
//!
//! ```
//! use myclustering::{KMeans, silhouette_score, DistanceMetric};
//! use ndarray::array;
//!
//! let data = array![
//!     [0.0, 0.0], [0.2, 0.1], [0.1, 0.3],
//!     [8.0, 8.0], [8.1, 8.2], [7.9, 8.1],
//! ];
//!
//! let mut kmeans = KMeans::new(2).seed(42);
//! let assignment = kmeans.fit(data.view()).unwrap();
//! assert_eq!(assignment.n_clusters(), 2);
//!
//! let score = silhouette_score(data.view(), &assignment, DistanceMetric::Euclidean).unwrap();
//! assert!(score > 0.9);
//! ```

pub use myclustering_core::{
    config::{ClusteringConfig, DbscanConfig, HierarchyConfig, KMeansConfig},
    Assignment, ClusteringError, ClusteringResult, DistanceMetric, IClusterer, Linkage, NOISE,
};
pub use myclustering_density::Dbscan;
pub use myclustering_evaluation::{
    assess, davies_bouldin_index, inertia, silhouette_score, QualityAssessment,
};
pub use myclustering_hierarchy::{
    pairwise_distances, AgglomerativeClustering, CondensedMatrix, Dendrogram, MergeStep,
};
pub use myclustering_kmeans::KMeans;
pub use myclustering_plot::{dendrogram_plot, scatter_plot, PlotConfig};

/// Dataset validation helpers, re-exported for callers building their own
/// estimators against [`IClusterer`].
pub mod dataset {
    pub use myclustering_core::dataset::{validate_dataset, validate_query};
}
