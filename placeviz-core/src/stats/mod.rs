//! Cumulative-distribution curves over distance samples.
//!
//! Two representations of the same question ("what fraction of placements
//! landed within distance x?"):
//! - [`EmpiricalCdf`] — one step per observation, no binning
//! - [`CumulativeHistogram`] — a fixed-bin approximation for discrete
//!   distances, where the exact curve over-resolves

pub mod ecdf;
pub mod histogram;

pub use ecdf::EmpiricalCdf;
pub use histogram::CumulativeHistogram;

use thiserror::Error;

/// Errors from building distribution curves.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("observation list is empty")]
    EmptyInput,

    #[error("observation {index} is not a usable distance: {value}")]
    InvalidValue { index: usize, value: f64 },

    #[error("invalid binning: {bins} bins over [0, {max_x}]")]
    InvalidBinning { bins: usize, max_x: f64 },
}

/// Rejects observations a distance sample cannot contain: negatives and
/// non-finite values.
pub(crate) fn validate_observations(observations: &[f64]) -> Result<(), StatsError> {
    if observations.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    for (index, &value) in observations.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(StatsError::InvalidValue { index, value });
        }
    }
    Ok(())
}
