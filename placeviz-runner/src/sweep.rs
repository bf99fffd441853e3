//! Figure-grid expansion and file naming.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::{BlacklistMode, Constraint, DistanceKind, ResolvedMethod, SweepConfig};

/// One figure to produce: every dataset's curve overlaid for a single
/// combination of the sweep axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    pub distance: DistanceKind,
    pub constraint: Constraint,
    pub blacklist: BlacklistMode,
    pub method: ResolvedMethod,
    pub detail: bool,
    pub datasets: Vec<String>,
    pub max_x: f64,
    pub bins: usize,
}

impl FigureSpec {
    /// Path of one dataset's distance list under `lists_dir`.
    pub fn list_path(&self, lists_dir: &Path, dataset: &str) -> PathBuf {
        lists_dir.join(format!(
            "weighted_placements_{}_{}_{}_{}.csv",
            self.distance.token(),
            self.constraint.token(),
            self.blacklist.token(),
            dataset
        ))
    }

    /// Figure file name without directory or extension. Detail figures get
    /// a `detail_` prefix; the method token is the resolved method, so an
    /// `auto` sweep names its files after what was actually drawn.
    pub fn figure_stem(&self) -> String {
        let prefix = if self.detail { "detail_" } else { "" };
        format!(
            "{prefix}weighted_placements_{}_{}_{}_{}",
            self.distance.token(),
            self.constraint.token(),
            self.blacklist.token(),
            self.method.token()
        )
    }
}

/// Expand a config into the cross product of its axes.
///
/// Method resolution can make combinations collide (an `auto` that resolves
/// to `exact` duplicates an explicit `exact`); collisions are dropped so a
/// figure file is produced once.
pub fn expand_grid(config: &SweepConfig) -> Vec<FigureSpec> {
    let mut specs = Vec::new();
    let mut seen = HashSet::new();

    for &detail in &config.details {
        for &distance in &config.distances {
            for &constraint in &config.constraints {
                for &blacklist in &config.blacklists {
                    for &method in &config.methods {
                        let resolved = method.resolve(distance);
                        if !seen.insert((distance, constraint, blacklist, resolved, detail)) {
                            continue;
                        }
                        specs.push(FigureSpec {
                            distance,
                            constraint,
                            blacklist,
                            method: resolved,
                            detail,
                            datasets: config.datasets.clone(),
                            max_x: config.max_x(distance),
                            bins: config.histogram_bins,
                        });
                    }
                }
            }
        }
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Method;

    fn base_config() -> SweepConfig {
        SweepConfig::from_toml(
            r#"
datasets = ["General", "Archaea"]
distances = ["edge", "branch"]
constraints = ["unconstrained"]
blacklists = ["none"]
methods = ["exact", "histogram"]
details = [false]
lists_dir = "lists"
output_dir = "viz"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_grid_is_full_cross_product() {
        let specs = expand_grid(&base_config());
        // 2 distances × 1 constraint × 1 blacklist × 2 methods × 1 detail
        assert_eq!(specs.len(), 4);
        for spec in &specs {
            assert_eq!(spec.datasets, vec!["General", "Archaea"]);
        }
    }

    #[test]
    fn test_auto_collisions_are_dropped() {
        let mut config = base_config();
        config.methods = vec![Method::Auto, Method::Exact];
        config.distances = vec![DistanceKind::Branch];

        // auto resolves to exact for branch distances, so only one spec
        // per remaining combination survives.
        let specs = expand_grid(&config);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].method, ResolvedMethod::Exact);
    }

    #[test]
    fn test_max_x_follows_distance_kind() {
        let specs = expand_grid(&base_config());
        for spec in &specs {
            match spec.distance {
                DistanceKind::Edge => assert_eq!(spec.max_x, 10.0),
                DistanceKind::Branch => assert_eq!(spec.max_x, 1.0),
            }
        }
    }

    #[test]
    fn test_list_path_matches_project_convention() {
        let specs = expand_grid(&base_config());
        let spec = specs
            .iter()
            .find(|s| s.distance == DistanceKind::Edge)
            .unwrap();

        let path = spec.list_path(Path::new("lists"), "General");
        assert_eq!(
            path,
            Path::new("lists/weighted_placements_edge_distances_unconstr_no-blacklist_General.csv")
        );
    }

    #[test]
    fn test_figure_stem_carries_detail_prefix_and_method() {
        let config = base_config();
        let mut specs = expand_grid(&config);
        let mut spec = specs.remove(0);
        spec.detail = true;

        let stem = spec.figure_stem();
        assert!(stem.starts_with("detail_weighted_placements_"));
        assert!(stem.ends_with(spec.method.token()));
    }
}
