use serde::{Deserialize, Serialize};

/// Output geometry and styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// Caption; empty string draws no caption.
    pub title: String,
    /// Scatter point radius in pixels.
    pub point_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: String::new(),
            point_size: 3,
        }
    }
}
