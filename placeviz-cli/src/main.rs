//! PlaceViz CLI — figure sweeps, single curves, and metadata extraction.
//!
//! Commands:
//! - `sweep` — produce the full figure grid from a TOML config
//! - `curve` — compute one cumulative curve and write it as CSV
//! - `metadata` — flatten per-sample XML metadata into one table

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use placeviz_core::data::lists::read_distance_list;
use placeviz_core::meta::MetadataTable;
use placeviz_core::stats::{CumulativeHistogram, EmpiricalCdf};
use placeviz_runner::{run_sweep, save_manifest, StderrProgress, SweepConfig, SweepProgress};

#[derive(Parser)]
#[command(
    name = "placeviz",
    about = "PlaceViz CLI — placement distance distribution figures"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce the full figure grid from a TOML sweep config.
    Sweep {
        /// Path to the sweep config file.
        #[arg(long)]
        config: PathBuf,

        /// Run figures one at a time instead of in parallel.
        #[arg(long, default_value_t = false)]
        sequential: bool,
    },
    /// Compute one cumulative curve and write it as two-column CSV.
    Curve {
        /// Distance list file (single numeric column, no header).
        #[arg(long)]
        input: PathBuf,

        /// Curve method.
        #[arg(long, value_enum, default_value_t = CurveMethod::Exact)]
        method: CurveMethod,

        /// Upper end of the binned range (histogram method only).
        #[arg(long, default_value_t = 10.0)]
        max_x: f64,

        /// Bin count (histogram method only).
        #[arg(long, default_value_t = 10)]
        bins: usize,

        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Flatten per-sample XML metadata into one tab-separated table.
    Metadata {
        /// Directory of per-sample XML files.
        #[arg(long)]
        xml_dir: PathBuf,

        /// Output file. Defaults to data.csv in the current directory.
        #[arg(long, default_value = "data.csv")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CurveMethod {
    Exact,
    Histogram,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep { config, sequential } => run_sweep_cmd(&config, sequential),
        Commands::Curve {
            input,
            method,
            max_x,
            bins,
            output,
        } => run_curve_cmd(&input, method, max_x, bins, output.as_deref()),
        Commands::Metadata { xml_dir, output } => run_metadata_cmd(&xml_dir, &output),
    }
}

fn run_sweep_cmd(config_path: &Path, sequential: bool) -> Result<()> {
    let config = SweepConfig::from_file(config_path)
        .with_context(|| format!("loading sweep config {}", config_path.display()))?;

    let progress: &dyn SweepProgress = &StderrProgress;
    let summary = run_sweep(&config, Some(progress), !sequential)?;
    let manifest_path = save_manifest(&summary, &config.output_dir)?;

    println!();
    println!("=== Sweep Result ===");
    println!("Figures:   {}", summary.outcomes.len());
    println!("Succeeded: {}", summary.succeeded_count());
    println!("Failed:    {}", summary.failed_count());
    println!("Manifest:  {}", manifest_path.display());

    if !summary.all_succeeded() {
        println!();
        for outcome in summary.outcomes.iter().filter(|o| !o.succeeded()) {
            if let Some(reason) = &outcome.error {
                eprintln!("Error for {}: {reason}", outcome.stem);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run_curve_cmd(
    input: &Path,
    method: CurveMethod,
    max_x: f64,
    bins: usize,
    output: Option<&Path>,
) -> Result<()> {
    let observations = read_distance_list(input)
        .with_context(|| format!("reading distance list {}", input.display()))?;

    let points = match method {
        CurveMethod::Exact => EmpiricalCdf::from_observations(&observations)?.points(),
        CurveMethod::Histogram => {
            CumulativeHistogram::from_observations(&observations, max_x, bins)?.step_points()
        }
    };

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            write_curve_csv(file, &points)?;
        }
        None => {
            let stdout = std::io::stdout();
            write_curve_csv(stdout.lock(), &points)?;
        }
    }

    Ok(())
}

fn write_curve_csv<W: Write>(mut writer: W, points: &[(f64, f64)]) -> Result<()> {
    writeln!(writer, "distance,cumulative_frequency")?;
    for (x, y) in points {
        writeln!(writer, "{x},{y}")?;
    }
    Ok(())
}

fn run_metadata_cmd(xml_dir: &Path, output: &Path) -> Result<()> {
    if !xml_dir.is_dir() {
        bail!("'{}' is not a directory", xml_dir.display());
    }

    let table = MetadataTable::from_dir(xml_dir)
        .with_context(|| format!("extracting metadata from {}", xml_dir.display()))?;

    if table.is_empty() {
        eprintln!("WARNING: no sample files found in {}", xml_dir.display());
    }

    table
        .save_tsv(output)
        .with_context(|| format!("writing table {}", output.display()))?;

    println!(
        "Wrote {} rows x {} columns to {}",
        table.len(),
        table.columns().len(),
        output.display()
    );
    Ok(())
}
