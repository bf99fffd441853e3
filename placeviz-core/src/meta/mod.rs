//! Sample metadata extraction.
//!
//! Sequencing archives ship one XML document per sample. This module
//! flattens a directory of them into a single tab-separated table: one row
//! per sample, one column per attribute tag seen anywhere in the set.

pub mod sample;
pub mod table;

pub use sample::{parse_sample, SampleAttribute, SampleRecord};
pub use table::MetadataTable;

use std::path::PathBuf;

use thiserror::Error;

/// Errors from metadata extraction.
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("xml parse error: {0}")]
    Xml(String),

    #[error("no SAMPLE element found")]
    MissingSample,

    #[error("in '{}': {source}", .path.display())]
    Sample {
        path: PathBuf,
        source: Box<MetaError>,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
