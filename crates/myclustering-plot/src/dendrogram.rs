//! Classic dendrogram rendering: leaves on the x axis, merge height on y.

use std::collections::HashMap;
use std::path::Path;

use plotters::prelude::*;

use myclustering_core::ClusteringResult;
use myclustering_hierarchy::Dendrogram;

use crate::{render_err, PlotConfig};

/// Render a hierarchical fit to an SVG file.
pub fn dendrogram_plot(
    dendrogram: &Dendrogram,
    path: impl AsRef<Path>,
    config: &PlotConfig,
) -> ClusteringResult<()> {
    let n = dendrogram.n_samples();
    let steps = dendrogram.steps();

    // Leaf x-positions follow the dendrogram's left-to-right ordering so
    // links never cross.
    let mut position: HashMap<usize, f64> = dendrogram
        .leaf_order()
        .into_iter()
        .enumerate()
        .map(|(x, leaf)| (leaf, x as f64))
        .collect();
    let mut height: HashMap<usize, f64> = (0..n).map(|leaf| (leaf, 0.0)).collect();

    // Each merge draws a bracket over its two children.
    let mut brackets: Vec<Vec<(f64, f64)>> = Vec::with_capacity(steps.len());
    for (t, step) in steps.iter().enumerate() {
        let (xl, hl) = (position[&step.left], height[&step.left]);
        let (xr, hr) = (position[&step.right], height[&step.right]);
        brackets.push(vec![(xl, hl), (xl, step.distance), (xr, step.distance), (xr, hr)]);
        position.insert(n + t, (xl + xr) / 2.0);
        height.insert(n + t, step.distance);
    }

    let max_height = steps.last().map(|s| s.distance).unwrap_or(1.0).max(f64::MIN_POSITIVE);
    let y_top = max_height * 1.05;

    let root = SVGBackend::new(path.as_ref(), (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40);
    if !config.title.is_empty() {
        builder.caption(&config.title, ("sans-serif", 20));
    }
    let mut chart = builder
        .build_cartesian_2d(-1.0..n as f64, 0.0..y_top)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            brackets
                .into_iter()
                .map(|points| PathElement::new(points, BLACK.stroke_width(1))),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use myclustering_hierarchy::MergeStep;

    #[test]
    fn single_leaf_renders_without_merges() {
        let d = Dendrogram::new(1, vec![]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.svg");
        dendrogram_plot(&d, &path, &PlotConfig::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn brackets_cover_every_merge() {
        let d = Dendrogram::new(
            3,
            vec![
                MergeStep { left: 0, right: 1, distance: 1.0, size: 2 },
                MergeStep { left: 2, right: 3, distance: 2.0, size: 3 },
            ],
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("three.svg");
        dendrogram_plot(&d, &path, &PlotConfig::default()).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("polyline"));
    }
}
