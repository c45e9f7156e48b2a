//! # myclustering-plot
//!
//! SVG rendering for fitted clusterings: 2-D scatter plots with per-cluster
//! colours, and classic dendrograms for hierarchical fits.

mod config;
mod dendrogram;
mod scatter;

pub use config::PlotConfig;
pub use dendrogram::dendrogram_plot;
pub use scatter::scatter_plot;

use myclustering_core::ClusteringError;

/// Map a plotters backend error onto the workspace error type.
pub(crate) fn render_err(e: impl std::fmt::Display) -> ClusteringError {
    ClusteringError::RenderError {
        message: e.to_string(),
    }
}
