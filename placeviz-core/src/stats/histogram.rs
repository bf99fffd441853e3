//! Binned cumulative distribution over a fixed range.
//!
//! Counts observations into equal-width bins over `[0, max_x]`, then
//! accumulates. Normalization divides by the full sample size, not the
//! in-range count, so observations beyond `max_x` hold the visible curve
//! below 1.

use serde::{Deserialize, Serialize};

use super::{validate_observations, StatsError};

/// Cumulative histogram of a distance sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeHistogram {
    /// Bin edges, `bins + 1` of them, spanning `[0, max_x]`.
    edges: Vec<f64>,
    /// Cumulative fraction per edge. The last entry repeats the final bin's
    /// value so a post-style step plot draws its last segment.
    cumulative: Vec<f64>,
    /// Full sample size, including out-of-range observations.
    n: usize,
}

impl CumulativeHistogram {
    /// Bin a non-empty sample of non-negative distances into `bins`
    /// equal-width bins over `[0, max_x]`.
    ///
    /// A value exactly equal to `max_x` lands in the last bin. Values
    /// beyond `max_x` fall outside every bin but still count toward the
    /// normalizer.
    pub fn from_observations(
        observations: &[f64],
        max_x: f64,
        bins: usize,
    ) -> Result<Self, StatsError> {
        validate_observations(observations)?;
        if bins == 0 || !max_x.is_finite() || max_x <= 0.0 {
            return Err(StatsError::InvalidBinning { bins, max_x });
        }

        let width = max_x / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| i as f64 * width).collect();

        let mut counts = vec![0u64; bins];
        for &value in observations {
            if value > max_x {
                continue;
            }
            let bin = ((value / width) as usize).min(bins - 1);
            counts[bin] += 1;
        }

        let n = observations.len();
        let mut cumulative = Vec::with_capacity(bins + 1);
        let mut running = 0u64;
        for &count in &counts {
            running += count;
            cumulative.push(running as f64 / n as f64);
        }
        cumulative.push(cumulative[bins - 1]);

        Ok(Self {
            edges,
            cumulative,
            n,
        })
    }

    /// Full sample size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Bin edges, `bins + 1` of them.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Cumulative fractions, parallel to [`edges`](Self::edges).
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// (edge, cumulative) pairs for post-style step plotting.
    pub fn step_points(&self) -> Vec<(f64, f64)> {
        self.edges
            .iter()
            .zip(self.cumulative.iter())
            .map(|(&x, &y)| (x, y))
            .collect()
    }
}
