//! PlaceViz Runner — figure sweep orchestration.
//!
//! This crate builds on `placeviz-core` to produce the project's figure
//! sets:
//! - Serializable TOML sweep configuration (explicit axes, no ambient
//!   globals)
//! - Grid expansion into per-figure specs with the project's file naming
//! - Step/line rendering to PNG and SVG via `plotters`
//! - Parallel sweep execution with per-figure outcomes and a JSON manifest

pub mod config;
pub mod manifest;
pub mod render;
pub mod runner;
pub mod sweep;

pub use config::{
    BlacklistMode, ConfigError, Constraint, DistanceKind, Method, ResolvedMethod, SweepConfig,
};
pub use manifest::{save_manifest, SweepManifest};
pub use render::{render_figure, CurveStyle, DatasetCurve, RenderError};
pub use runner::{
    build_curve, run_sweep, FigureOutcome, StderrProgress, SweepError, SweepProgress,
    SweepSummary,
};
pub use sweep::{expand_grid, FigureSpec};
