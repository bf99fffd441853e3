//! PlaceViz Core — distribution curves and file formats for placement
//! distance analysis.
//!
//! This crate contains the pure computation and file-format logic:
//! - Exact empirical CDFs with the leading-zero flattening used in the
//!   project's figures
//! - Binned cumulative histograms normalized over the full sample
//! - Distance-list reading (single numeric column, no header)
//! - Sample metadata extraction (per-sample XML into one flat table)

pub mod data;
pub mod meta;
pub mod stats;
