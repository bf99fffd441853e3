//! Sweep manifest export.
//!
//! The manifest records what a sweep produced and from which settings, so
//! a directory of figures can be traced back months later.

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::runner::{FigureOutcome, SweepSummary};

/// Current schema version for persisted manifests.
pub const SCHEMA_VERSION: u32 = 1;

/// Everything recorded about one sweep.
#[derive(Debug, Serialize, Deserialize)]
pub struct SweepManifest {
    pub schema_version: u32,
    pub config_fingerprint: String,
    pub generated_at: String,
    pub figure_count: usize,
    pub failed_count: usize,
    pub figures: Vec<FigureOutcome>,
}

/// Write `manifest.json` into the output directory.
pub fn save_manifest(summary: &SweepSummary, output_dir: &Path) -> Result<PathBuf> {
    let manifest = SweepManifest {
        schema_version: SCHEMA_VERSION,
        config_fingerprint: summary.fingerprint.clone(),
        generated_at: Local::now().naive_local().to_string(),
        figure_count: summary.outcomes.len(),
        failed_count: summary.failed_count(),
        figures: summary.outcomes.clone(),
    };

    let path = output_dir.join("manifest.json");
    let file = File::create(&path)
        .with_context(|| format!("Failed to create manifest {}", path.display()))?;
    serde_json::to_writer_pretty(file, &manifest).context("Failed to write manifest")?;
    Ok(path)
}
