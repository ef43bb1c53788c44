// File: crates/chartkit-dashboard/src/config.rs
// Summary: Dashboard configuration (TOML): charts with their tabs, progress rings, sparklines, heatmap.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chartkit_core::heatmap::WeekKeying;
use chartkit_core::types::{HEIGHT, WIDTH};
use chartkit_core::{ChartDatum, ChartKind, HeatmapDatum};
use serde::{Deserialize, Serialize};

const DEFAULT_OUT_DIR: &str = "target/out";
const DEFAULT_HEATMAP_COLUMNS: usize = 13;

fn default_kinds() -> Vec<ChartKind> {
    ChartKind::ALL.to_vec()
}

fn default_width() -> u32 { WIDTH }
fn default_height() -> u32 { HEIGHT }
fn default_columns() -> usize { DEFAULT_HEATMAP_COLUMNS }

/// One dataset shown under several chart tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Used in output file names.
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Tabs to render, in order.
    #[serde(default = "default_kinds")]
    pub kinds: Vec<ChartKind>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Inline data; ignored when `csv` is set.
    #[serde(default)]
    pub data: Vec<ChartDatum>,
    /// CSV with `label,value[,color]` rows.
    #[serde(default)]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineSpec {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSpec {
    #[serde(default)]
    pub data: Vec<HeatmapDatum>,
    /// CSV with `date,value` rows.
    #[serde(default)]
    pub csv: Option<PathBuf>,
    #[serde(default)]
    pub keying: WeekKeying,
    #[serde(default = "default_columns")]
    pub columns: usize,
}

/// Main dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub theme: String,
    pub out_dir: PathBuf,
    /// Titles, labels and values on charts.
    pub draw_labels: bool,
    pub charts: Vec<ChartSpec>,
    /// One ring per value (percent).
    pub progress: Vec<f64>,
    pub sparklines: Vec<SparklineSpec>,
    pub heatmap: Option<HeatmapSpec>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            draw_labels: true,
            charts: Vec::new(),
            progress: Vec::new(),
            sparklines: Vec::new(),
            heatmap: None,
        }
    }
}

impl DashboardConfig {
    /// Parse TOML text. Relative CSV paths stay as written.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parsing dashboard config")
    }

    /// Load from a file; relative CSV paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let mut cfg = Self::from_toml(&text).with_context(|| format!("in {}", path.display()))?;
        if let Some(base) = path.parent() {
            cfg.resolve_paths(base);
        }
        log::debug!(
            "loaded {}: {} charts, {} rings, {} sparklines",
            path.display(),
            cfg.charts.len(),
            cfg.progress.len(),
            cfg.sparklines.len()
        );
        Ok(cfg)
    }

    fn resolve_paths(&mut self, base: &Path) {
        let join = |p: &mut Option<PathBuf>| {
            if let Some(rel) = p.as_mut().filter(|p| p.is_relative()) {
                *rel = base.join(&*rel);
            }
        };
        for chart in &mut self.charts {
            join(&mut chart.csv);
        }
        if let Some(h) = self.heatmap.as_mut() {
            join(&mut h.csv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = DashboardConfig::from_toml("").unwrap();
        assert_eq!(cfg, DashboardConfig::default());
    }

    #[test]
    fn parses_full_config() {
        let cfg = DashboardConfig::from_toml(
            r#"
            theme = "dark"
            progress = [10, 90.5]

            [[charts]]
            name = "sales"
            kinds = ["bar", "pie"]
            data = [{ label = "Jan", value = 3 }]

            [[sparklines]]
            name = "cpu"
            values = [1, 2, 3]

            [heatmap]
            keying = "month-week"
            data = [{ date = "2024-01-05", value = 2 }]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.theme, "dark");
        assert_eq!(cfg.progress, vec![10.0, 90.5]);
        assert_eq!(cfg.charts[0].kinds, vec![ChartKind::Bar, ChartKind::Pie]);
        assert_eq!(cfg.charts[0].width, WIDTH);
        let heat = cfg.heatmap.unwrap();
        assert_eq!(heat.keying, WeekKeying::MonthWeek);
        assert_eq!(heat.columns, DEFAULT_HEATMAP_COLUMNS);
        assert_eq!(heat.data.len(), 1);
    }

    #[test]
    fn chart_tabs_default_to_every_kind() {
        let cfg = DashboardConfig::from_toml("[[charts]]\nname = \"x\"\n").unwrap();
        assert_eq!(cfg.charts[0].kinds, ChartKind::ALL.to_vec());
    }

    #[test]
    fn resolves_relative_csv_paths() {
        let mut cfg = DashboardConfig::from_toml("[[charts]]\nname = \"x\"\ncsv = \"data/x.csv\"\n").unwrap();
        cfg.resolve_paths(Path::new("/etc/dash"));
        assert_eq!(cfg.charts[0].csv.as_deref(), Some(Path::new("/etc/dash/data/x.csv")));
    }
}
