//! Exact empirical CDF of a distance sample.
//!
//! For n sorted observations the curve carries one step per observation,
//! at height `i / n` where `i` is the 0-based rank. The first observation
//! therefore sits at y = 0 rather than 1/n; downstream figures depend on
//! that convention and it must not be changed to the textbook `(i + 1) / n`.
//!
//! Distance-zero placements are common, and a long run of them would draw
//! a near-vertical rise at the origin. The builder flattens every step in
//! the leading zero run to the height reached at the last zero, trading a
//! little accuracy at the origin for a legible curve. Consumers that need
//! the unmodified distribution should not use this type.

use serde::{Deserialize, Serialize};

use super::{validate_observations, StatsError};

/// Empirical CDF with the leading-zero flattening applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalCdf {
    /// Sorted observation values.
    values: Vec<f64>,
    /// Step height per observation, in [0, 1].
    steps: Vec<f64>,
    /// Length of the leading run of zero-valued observations.
    zero_run: usize,
}

impl EmpiricalCdf {
    /// Build the curve from a non-empty sample of non-negative distances.
    ///
    /// Fails with [`StatsError::EmptyInput`] on an empty sample and
    /// [`StatsError::InvalidValue`] on negative or non-finite observations.
    pub fn from_observations(observations: &[f64]) -> Result<Self, StatsError> {
        validate_observations(observations)?;

        let mut values = observations.to_vec();
        values.sort_by(f64::total_cmp);

        let n = values.len() as f64;
        let mut steps: Vec<f64> = (0..values.len()).map(|i| i as f64 / n).collect();

        let zero_run = values.iter().take_while(|&&v| v == 0.0).count();
        if zero_run == values.len() {
            // Every observation is zero; there is no step past the run to
            // flatten to, so the whole curve saturates at 1.
            for step in &mut steps {
                *step = 1.0;
            }
        } else if zero_run > 0 {
            let level = steps[zero_run];
            for step in &mut steps[..zero_run] {
                *step = level;
            }
        }

        Ok(Self {
            values,
            steps,
            zero_run,
        })
    }

    /// Number of observations in the sample.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sorted observation values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Corrected step heights, parallel to [`values`](Self::values).
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Length of the leading zero run the correction flattened.
    pub fn zero_run(&self) -> usize {
        self.zero_run
    }

    /// (x, y) pairs for plotting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .zip(self.steps.iter())
            .map(|(&x, &y)| (x, y))
            .collect()
    }
}
