//! 2-D cluster scatter plots.

use std::path::Path;

use ndarray::ArrayView2;
use plotters::prelude::*;

use myclustering_core::dataset::validate_dataset;
use myclustering_core::{Assignment, ClusteringError, ClusteringResult, NOISE};

use crate::{render_err, PlotConfig};

const NOISE_COLOUR: RGBColor = RGBColor(140, 140, 140);

/// Render a fitted 2-D clustering to an SVG file.
///
/// Cluster colours come from a fixed palette keyed by label; noise is grey.
pub fn scatter_plot(
    data: ArrayView2<'_, f64>,
    assignment: &Assignment,
    path: impl AsRef<Path>,
    config: &PlotConfig,
) -> ClusteringResult<()> {
    validate_dataset(data)?;
    if data.ncols() != 2 {
        return Err(ClusteringError::invalid_parameter(
            "data",
            format!("scatter plots need 2 features, found {}", data.ncols()),
        ));
    }
    if assignment.len() != data.nrows() {
        return Err(ClusteringError::invalid_parameter(
            "assignment",
            format!("{} labels for {} samples", assignment.len(), data.nrows()),
        ));
    }

    let (x_range, y_range) = padded_ranges(data);

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
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;
    chart.configure_mesh().draw().map_err(render_err)?;

    // One series per cluster so the palette stays stable across labels.
    for (c, members) in assignment.clusters().into_iter().enumerate() {
        let colour = Palette99::pick(c).filled();
        chart
            .draw_series(members.iter().map(|&i| {
                Circle::new((data[[i, 0]], data[[i, 1]]), config.point_size, colour.clone())
            }))
            .map_err(render_err)?;
    }

    let noise: Vec<usize> = assignment
        .labels()
        .iter()
        .enumerate()
        .filter(|(_, &l)| l == NOISE)
        .map(|(i, _)| i)
        .collect();
    chart
        .draw_series(noise.iter().map(|&i| {
            Circle::new(
                (data[[i, 0]], data[[i, 1]]),
                config.point_size,
                NOISE_COLOUR.filled(),
            )
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)
}

/// Per-axis min/max with 5% padding; degenerate spans widen to ±1.
fn padded_ranges(
    data: ArrayView2<'_, f64>,
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut ranges = Vec::with_capacity(2);
    for col in 0..2 {
        let column = data.column(col);
        let min = column.iter().copied().fold(f64::INFINITY, f64::min);
        let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let pad = if max > min { (max - min) * 0.05 } else { 1.0 };
        ranges.push(min - pad..max + pad);
    }
    let y = ranges.pop().unwrap_or(0.0..1.0);
    let x = ranges.pop().unwrap_or(0.0..1.0);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn rejects_non_2d_data() {
        let data = array![[1.0, 2.0, 3.0]];
        let assignment = Assignment::new(vec![0]);
        let dir = tempfile::tempdir().unwrap();
        let err = scatter_plot(
            data.view(),
            &assignment,
            dir.path().join("plot.svg"),
            &PlotConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ClusteringError::InvalidParameter { name: "data", .. }
        ));
    }

    #[test]
    fn rejects_mismatched_labels() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];
        let assignment = Assignment::new(vec![0]);
        let dir = tempfile::tempdir().unwrap();
        let err = scatter_plot(
            data.view(),
            &assignment,
            dir.path().join("plot.svg"),
            &PlotConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ClusteringError::InvalidParameter { name: "assignment", .. }
        ));
    }

    #[test]
    fn degenerate_span_still_renders() {
        let data = array![[1.0, 1.0], [1.0, 1.0]];
        let assignment = Assignment::new(vec![0, 0]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.svg");
        scatter_plot(data.view(), &assignment, &path, &PlotConfig::default()).unwrap();
        assert!(path.exists());
    }
}
