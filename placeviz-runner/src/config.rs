//! Serializable sweep configuration.
//!
//! The sweep axes are an explicit value loaded from TOML, passed down by
//! the caller. Nothing reads module-level state; two sweeps with different
//! configs can run in the same process without touching each other.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or validating a sweep configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which distance measurement a list file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceKind {
    /// Number of branches between true and inferred placement.
    Edge,
    /// Branch-length units between true and inferred placement.
    Branch,
}

impl DistanceKind {
    /// Token used in list and figure file names.
    pub fn token(self) -> &'static str {
        match self {
            DistanceKind::Edge => "edge_distances",
            DistanceKind::Branch => "branch_distances",
        }
    }

    /// X-axis label for figures of this kind.
    pub fn axis_label(self) -> &'static str {
        match self {
            DistanceKind::Edge => "Distance (Number of Branches)",
            DistanceKind::Branch => "Distance (Branch Length Units)",
        }
    }
}

/// Whether the inference ran with the taxonomy constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Constrained,
    Unconstrained,
}

impl Constraint {
    pub fn token(self) -> &'static str {
        match self {
            Constraint::Constrained => "constr",
            Constraint::Unconstrained => "unconstr",
        }
    }
}

/// Whether the sequence blacklist was applied when building the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlacklistMode {
    Applied,
    None,
}

impl BlacklistMode {
    pub fn token(self) -> &'static str {
        match self {
            BlacklistMode::Applied => "blacklist",
            BlacklistMode::None => "no-blacklist",
        }
    }
}

/// How to turn a distance list into a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// One step per observation.
    Exact,
    /// Fixed-bin cumulative histogram.
    Histogram,
    /// Exact for branch distances, histogram for edge distances.
    Auto,
}

impl Method {
    /// Resolve `auto` against a distance kind. The resolved method is what
    /// appears in figure file names.
    pub fn resolve(self, distance: DistanceKind) -> ResolvedMethod {
        match (self, distance) {
            (Method::Exact, _) => ResolvedMethod::Exact,
            (Method::Histogram, _) => ResolvedMethod::Histogram,
            (Method::Auto, DistanceKind::Branch) => ResolvedMethod::Exact,
            (Method::Auto, DistanceKind::Edge) => ResolvedMethod::Histogram,
        }
    }
}

/// A method with `auto` already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedMethod {
    Exact,
    Histogram,
}

impl ResolvedMethod {
    pub fn token(self) -> &'static str {
        match self {
            ResolvedMethod::Exact => "exact",
            ResolvedMethod::Histogram => "histogram",
        }
    }
}

/// Full sweep configuration: every axis of the figure grid plus locations
/// and range overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Dataset names; every figure overlays one curve per dataset.
    pub datasets: Vec<String>,

    /// Distance kinds to sweep.
    pub distances: Vec<DistanceKind>,

    /// Constraint modes to sweep.
    pub constraints: Vec<Constraint>,

    /// Blacklist modes to sweep.
    pub blacklists: Vec<BlacklistMode>,

    /// Curve methods to sweep.
    pub methods: Vec<Method>,

    /// Detail levels: `false` is the full y-range figure, `true` zooms the
    /// upper tail.
    #[serde(default = "default_details")]
    pub details: Vec<bool>,

    /// Directory holding the distance list files.
    pub lists_dir: PathBuf,

    /// Directory figures and the manifest are written into.
    pub output_dir: PathBuf,

    /// X-axis range for edge-distance figures.
    #[serde(default = "default_edge_max_x")]
    pub edge_max_x: f64,

    /// X-axis range for branch-distance figures.
    #[serde(default = "default_branch_max_x")]
    pub branch_max_x: f64,

    /// Bin count for histogram curves.
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
}

fn default_details() -> Vec<bool> {
    vec![false]
}

fn default_edge_max_x() -> f64 {
    10.0
}

fn default_branch_max_x() -> f64 {
    1.0
}

fn default_histogram_bins() -> usize {
    10
}

impl SweepConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the axes and ranges; every axis must be non-empty and every
    /// range positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.datasets.is_empty() {
            return Err(ConfigError::Invalid("datasets is empty".into()));
        }
        if self.distances.is_empty() {
            return Err(ConfigError::Invalid("distances is empty".into()));
        }
        if self.constraints.is_empty() {
            return Err(ConfigError::Invalid("constraints is empty".into()));
        }
        if self.blacklists.is_empty() {
            return Err(ConfigError::Invalid("blacklists is empty".into()));
        }
        if self.methods.is_empty() {
            return Err(ConfigError::Invalid("methods is empty".into()));
        }
        if self.details.is_empty() {
            return Err(ConfigError::Invalid("details is empty".into()));
        }
        if !self.edge_max_x.is_finite() || self.edge_max_x <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "edge_max_x must be positive, got {}",
                self.edge_max_x
            )));
        }
        if !self.branch_max_x.is_finite() || self.branch_max_x <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "branch_max_x must be positive, got {}",
                self.branch_max_x
            )));
        }
        if self.histogram_bins == 0 {
            return Err(ConfigError::Invalid("histogram_bins must be nonzero".into()));
        }
        Ok(())
    }

    /// X-axis range for a distance kind.
    pub fn max_x(&self, distance: DistanceKind) -> f64 {
        match distance {
            DistanceKind::Edge => self.edge_max_x,
            DistanceKind::Branch => self.branch_max_x,
        }
    }

    /// Deterministic hash of this configuration, recorded in the sweep
    /// manifest so figure sets can be traced back to their settings.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("SweepConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_TOML: &str = r#"
datasets = ["General", "Archaea", "Bacteria", "Eukaryota"]
distances = ["edge", "branch"]
constraints = ["unconstrained"]
blacklists = ["none"]
methods = ["auto"]
details = [false, true]
lists_dir = "lists"
output_dir = "viz"
"#;

    #[test]
    fn test_parses_example_with_defaults() {
        let config = SweepConfig::from_toml(EXAMPLE_TOML).unwrap();

        assert_eq!(config.datasets.len(), 4);
        assert_eq!(
            config.distances,
            vec![DistanceKind::Edge, DistanceKind::Branch]
        );
        assert_eq!(config.methods, vec![Method::Auto]);
        assert_eq!(config.details, vec![false, true]);
        assert_eq!(config.edge_max_x, 10.0);
        assert_eq!(config.branch_max_x, 1.0);
        assert_eq!(config.histogram_bins, 10);
    }

    #[test]
    fn test_empty_axis_rejected() {
        let text = EXAMPLE_TOML.replace(
            r#"datasets = ["General", "Archaea", "Bacteria", "Eukaryota"]"#,
            "datasets = []",
        );
        assert!(matches!(
            SweepConfig::from_toml(&text),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_bad_range_rejected() {
        let text = format!("{EXAMPLE_TOML}edge_max_x = -1.0\n");
        assert!(matches!(
            SweepConfig::from_toml(&text),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_fingerprint_is_deterministic_and_sensitive() {
        let config = SweepConfig::from_toml(EXAMPLE_TOML).unwrap();
        assert_eq!(config.fingerprint(), config.fingerprint());

        let mut other = config.clone();
        other.datasets.push("Extra".into());
        assert_ne!(config.fingerprint(), other.fingerprint());
    }

    #[test]
    fn test_auto_resolution() {
        assert_eq!(
            Method::Auto.resolve(DistanceKind::Branch),
            ResolvedMethod::Exact
        );
        assert_eq!(
            Method::Auto.resolve(DistanceKind::Edge),
            ResolvedMethod::Histogram
        );
        assert_eq!(
            Method::Exact.resolve(DistanceKind::Edge),
            ResolvedMethod::Exact
        );
        assert_eq!(
            Method::Histogram.resolve(DistanceKind::Branch),
            ResolvedMethod::Histogram
        );
    }

    #[test]
    fn test_tokens_match_list_naming() {
        assert_eq!(DistanceKind::Edge.token(), "edge_distances");
        assert_eq!(DistanceKind::Branch.token(), "branch_distances");
        assert_eq!(Constraint::Constrained.token(), "constr");
        assert_eq!(Constraint::Unconstrained.token(), "unconstr");
        assert_eq!(BlacklistMode::Applied.token(), "blacklist");
        assert_eq!(BlacklistMode::None.token(), "no-blacklist");
    }
}
