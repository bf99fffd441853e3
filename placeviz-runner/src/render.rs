//! Figure rendering.
//!
//! Every figure owns its drawing area; no plotting state is shared between
//! figures, so rendering parallelizes without coordination.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::sweep::FigureSpec;

/// Errors from drawing a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to set up drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("figure has no curves")]
    NoCurves,
}

/// How a curve's points are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveStyle {
    /// Straight segments between points.
    Line,
    /// Each y holds until the next x.
    PostStep,
}

/// A named curve, ready to draw.
#[derive(Debug, Clone)]
pub struct DatasetCurve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: CurveStyle,
}

pub const FIGURE_WIDTH: u32 = 1200;
pub const FIGURE_HEIGHT: u32 = 800;

/// Detail figures zoom the y-axis to the upper tail.
const DETAIL_Y_MIN: f64 = 0.65;

const SERIES_COLORS: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, BLACK];

/// Draw one figure to both a PNG and an SVG file.
pub fn render_figure(
    spec: &FigureSpec,
    curves: &[DatasetCurve],
    png_path: &Path,
    svg_path: &Path,
) -> Result<(), RenderError> {
    if curves.is_empty() {
        return Err(RenderError::NoCurves);
    }

    {
        let root =
            BitMapBackend::new(png_path, (FIGURE_WIDTH, FIGURE_HEIGHT)).into_drawing_area();
        draw_figure(&root, spec, curves)?;
    }
    {
        let root = SVGBackend::new(svg_path, (FIGURE_WIDTH, FIGURE_HEIGHT)).into_drawing_area();
        draw_figure(&root, spec, curves)?;
    }
    Ok(())
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &FigureSpec,
    curves: &[DatasetCurve],
) -> Result<(), RenderError> {
    root.fill(&WHITE)
        .map_err(|e| RenderError::DrawingArea(e.to_string()))?;

    let (y_min, y_max) = if spec.detail {
        (DETAIL_Y_MIN, 1.0)
    } else {
        (0.0, 1.0)
    };

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(0.0..spec.max_x, y_min..y_max)
        .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(10)
        .y_labels(if spec.detail { 4 } else { 6 })
        .x_desc(spec.distance.axis_label())
        .y_desc("Cumulative Frequency")
        .y_label_formatter(&|y| format!("{:.0}%", *y * 100.0))
        .label_style(("sans-serif", 25))
        .axis_desc_style(("sans-serif", 35))
        .draw()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    for (index, curve) in curves.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let points = match curve.style {
            CurveStyle::Line => curve.points.clone(),
            CurveStyle::PostStep => post_step_points(&curve.points),
        };
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(|e| RenderError::Drawing(e.to_string()))?
            .label(curve.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .label_font(("sans-serif", 25))
        .draw()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;
    Ok(())
}

/// Expand points into a staircase where each y holds until the next x.
fn post_step_points(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(points.len().saturating_mul(2));
    for window in points.windows(2) {
        out.push(window[0]);
        out.push((window[1].0, window[0].1));
    }
    if let Some(&last) = points.last() {
        out.push(last);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BlacklistMode, Constraint, DistanceKind, ResolvedMethod};

    fn spec() -> FigureSpec {
        FigureSpec {
            distance: DistanceKind::Edge,
            constraint: Constraint::Unconstrained,
            blacklist: BlacklistMode::None,
            method: ResolvedMethod::Histogram,
            detail: false,
            datasets: vec!["General".into()],
            max_x: 10.0,
            bins: 10,
        }
    }

    #[test]
    fn test_post_step_holds_y_until_next_x() {
        let staircase = post_step_points(&[(0.0, 0.0), (1.0, 0.5), (2.0, 1.0)]);
        assert_eq!(
            staircase,
            vec![
                (0.0, 0.0),
                (1.0, 0.0),
                (1.0, 0.5),
                (2.0, 0.5),
                (2.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_post_step_single_point_passthrough() {
        assert_eq!(post_step_points(&[(1.0, 0.5)]), vec![(1.0, 0.5)]);
        assert!(post_step_points(&[]).is_empty());
    }

    #[test]
    fn test_empty_figure_rejected_before_touching_disk() {
        let temp = tempfile::tempdir().unwrap();
        let png = temp.path().join("fig.png");
        let svg = temp.path().join("fig.svg");

        let err = render_figure(&spec(), &[], &png, &svg).unwrap_err();
        assert!(matches!(err, RenderError::NoCurves));
        assert!(!png.exists());
        assert!(!svg.exists());
    }
}
