//! Sweep execution — expands the grid, builds curves, renders figures.
//!
//! A failed figure (missing list, empty list, render error) does not abort
//! the sweep: the failure is recorded in that figure's outcome and the rest
//! of the grid still runs.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use placeviz_core::data::lists::read_distance_list;
use placeviz_core::stats::{CumulativeHistogram, EmpiricalCdf, StatsError};

use crate::config::{ConfigError, ResolvedMethod, SweepConfig};
use crate::render::{render_figure, CurveStyle, DatasetCurve};
use crate::sweep::{expand_grid, FigureSpec};

/// Errors that abort a sweep before any figure runs.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create output directory '{}': {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Progress callbacks for long sweeps.
pub trait SweepProgress: Send + Sync {
    fn on_start(&self, stem: &str, index: usize, total: usize);
    fn on_complete(&self, outcome: &FigureOutcome, index: usize, total: usize);
}

/// Prints one line per figure to stderr.
pub struct StderrProgress;

impl SweepProgress for StderrProgress {
    fn on_start(&self, stem: &str, index: usize, total: usize) {
        eprintln!("[{}/{}] {stem}", index + 1, total);
    }

    fn on_complete(&self, outcome: &FigureOutcome, index: usize, total: usize) {
        if let Some(reason) = &outcome.error {
            eprintln!("[{}/{}] {} FAILED: {reason}", index + 1, total, outcome.stem);
        }
    }
}

/// Result of one figure in the sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureOutcome {
    pub stem: String,
    pub spec: FigureSpec,
    pub png: Option<PathBuf>,
    pub svg: Option<PathBuf>,
    pub error: Option<String>,
}

impl FigureOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Results from a full sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Fingerprint of the config that produced these figures.
    pub fingerprint: String,
    pub outcomes: Vec<FigureOutcome>,
}

impl SweepSummary {
    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.succeeded_count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Run the full figure sweep described by `config`.
///
/// Figures run in parallel unless `parallel` is false; each is independent,
/// so the only shared work is directory creation up front.
pub fn run_sweep(
    config: &SweepConfig,
    progress: Option<&dyn SweepProgress>,
    parallel: bool,
) -> Result<SweepSummary, SweepError> {
    config.validate()?;

    let specs = expand_grid(config);
    let total = specs.len();

    let png_dir = config.output_dir.join("figures_png");
    let svg_dir = config.output_dir.join("figures_svg");
    for dir in [&png_dir, &svg_dir] {
        fs::create_dir_all(dir).map_err(|source| SweepError::OutputDir {
            path: dir.clone(),
            source,
        })?;
    }

    let run_one = |(index, spec): (usize, &FigureSpec)| -> FigureOutcome {
        let stem = spec.figure_stem();
        if let Some(p) = progress {
            p.on_start(&stem, index, total);
        }

        let outcome = match produce_figure(config, spec, &png_dir, &svg_dir) {
            Ok((png, svg)) => FigureOutcome {
                stem,
                spec: spec.clone(),
                png: Some(png),
                svg: Some(svg),
                error: None,
            },
            Err(reason) => FigureOutcome {
                stem,
                spec: spec.clone(),
                png: None,
                svg: None,
                error: Some(reason),
            },
        };

        if let Some(p) = progress {
            p.on_complete(&outcome, index, total);
        }
        outcome
    };

    let outcomes: Vec<FigureOutcome> = if parallel {
        specs.par_iter().enumerate().map(run_one).collect()
    } else {
        specs.iter().enumerate().map(run_one).collect()
    };

    Ok(SweepSummary {
        fingerprint: config.fingerprint(),
        outcomes,
    })
}

/// Load every dataset's list, build its curve, and render the figure.
fn produce_figure(
    config: &SweepConfig,
    spec: &FigureSpec,
    png_dir: &Path,
    svg_dir: &Path,
) -> Result<(PathBuf, PathBuf), String> {
    let mut curves = Vec::with_capacity(spec.datasets.len());
    for dataset in &spec.datasets {
        let path = spec.list_path(&config.lists_dir, dataset);
        let observations =
            read_distance_list(&path).map_err(|e| format!("{dataset}: {e}"))?;
        let curve =
            build_curve(spec, dataset, &observations).map_err(|e| format!("{dataset}: {e}"))?;
        curves.push(curve);
    }

    let stem = spec.figure_stem();
    let png = png_dir.join(format!("{stem}.png"));
    let svg = svg_dir.join(format!("{stem}.svg"));
    render_figure(spec, &curves, &png, &svg).map_err(|e| e.to_string())?;
    Ok((png, svg))
}

/// Build one dataset's curve for a figure.
pub fn build_curve(
    spec: &FigureSpec,
    label: &str,
    observations: &[f64],
) -> Result<DatasetCurve, StatsError> {
    match spec.method {
        ResolvedMethod::Exact => {
            let cdf = EmpiricalCdf::from_observations(observations)?;
            Ok(DatasetCurve {
                label: label.to_string(),
                points: cdf.points(),
                style: CurveStyle::Line,
            })
        }
        ResolvedMethod::Histogram => {
            let hist = CumulativeHistogram::from_observations(observations, spec.max_x, spec.bins)?;
            Ok(DatasetCurve {
                label: label.to_string(),
                points: hist.step_points(),
                style: CurveStyle::PostStep,
            })
        }
    }
}
