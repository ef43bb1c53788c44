// File: crates/chartkit-dashboard/src/dashboard.rs
// Summary: Renders every widget a dashboard config describes to PNG files; built-in sample dashboard.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chartkit_core::heatmap::{heatmap_layout, HeatmapOptions};
use chartkit_core::{
    draw_heatmap, draw_progress_ring, draw_sparkline, theme, ChartCanvas, ChartDatum, ChartKind, ChartProps,
    HeatmapDatum, ProgressRingOptions, RenderOptions, RenderState, SparklineOptions, Surface, Theme,
};
use chartkit_skia::SkiaRenderer;
use chrono::{Duration, NaiveDate};

use crate::config::{ChartSpec, DashboardConfig, HeatmapSpec, SparklineSpec};
use crate::dataset::{load_chart_csv, load_heatmap_csv};

/// Renders a config's widgets into `out_dir`.
pub struct Dashboard<'a> {
    cfg: &'a DashboardConfig,
    theme: Theme,
    renderer: SkiaRenderer,
}

impl<'a> Dashboard<'a> {
    pub fn new(cfg: &'a DashboardConfig) -> Self {
        Self { cfg, theme: theme::find(&cfg.theme), renderer: SkiaRenderer::new() }
    }

    fn out(&self, file: &str) -> PathBuf {
        self.cfg.out_dir.join(file)
    }

    fn write(&self, surface: &Surface, file: &str, written: &mut Vec<PathBuf>) -> Result<()> {
        let path = self.out(file);
        if surface.width() == 0 || surface.height() == 0 {
            log::warn!("{} is {}x{}; nothing to rasterize, skipped", path.display(), surface.width(), surface.height());
            return Ok(());
        }
        self.renderer.render_to_png(surface, &path)?;
        log::info!("Wrote {}", path.display());
        written.push(path);
        Ok(())
    }

    /// Render everything; returns the written files in render order.
    pub fn render_all(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for chart in &self.cfg.charts {
            self.render_chart_tabs(chart, &mut written)?;
        }
        for (i, &progress) in self.cfg.progress.iter().enumerate() {
            self.render_progress(i, progress, &mut written)?;
        }
        for spark in &self.cfg.sparklines {
            self.render_sparkline(spark, &mut written)?;
        }
        if let Some(heat) = &self.cfg.heatmap {
            self.render_heatmap(heat, &mut written)?;
        }
        Ok(written)
    }

    /// One canvas per dataset; switching tabs redraws it in place.
    fn render_chart_tabs(&self, spec: &ChartSpec, written: &mut Vec<PathBuf>) -> Result<()> {
        let data = match &spec.csv {
            Some(path) => load_chart_csv(path)?,
            None => spec.data.clone(),
        };
        let props_for = |kind: ChartKind| {
            let mut props = ChartProps::new(data.clone(), kind).with_size(spec.width, spec.height);
            props.title = spec.title.clone();
            props
        };
        let Some(&first) = spec.kinds.first() else {
            log::warn!("chart '{}' has no tabs; skipped", spec.name);
            return Ok(());
        };

        let opts = RenderOptions { theme: self.theme, draw_labels: self.cfg.draw_labels, ..RenderOptions::default() };
        let mut canvas = ChartCanvas::new(props_for(first), opts);
        for &kind in &spec.kinds {
            canvas.update(props_for(kind));
            if let RenderState::NoData(e) = canvas.state() {
                log::warn!("chart '{}' ({kind}): {e}", spec.name);
            }
            self.write(canvas.surface(), &format!("{}_{kind}.png", spec.name), written)?;
        }
        Ok(())
    }

    fn render_progress(&self, index: usize, progress: f64, written: &mut Vec<PathBuf>) -> Result<()> {
        let opts = ProgressRingOptions { show_label: self.cfg.draw_labels, ..ProgressRingOptions::default() };
        let side = opts.size.ceil() as u32;
        let mut surface = Surface::new(side, side);
        surface.clear(self.theme.background);
        draw_progress_ring(&mut surface, progress, &opts, &self.theme);
        self.write(&surface, &format!("progress_{index}.png"), written)
    }

    fn render_sparkline(&self, spec: &SparklineSpec, written: &mut Vec<PathBuf>) -> Result<()> {
        let opts = SparklineOptions::default();
        let mut surface = Surface::new(opts.width.ceil() as u32, opts.height.ceil() as u32);
        surface.clear(self.theme.background);
        if !draw_sparkline(&mut surface, &spec.values, &opts) {
            log::info!("sparkline '{}' needs at least two values; skipped", spec.name);
            return Ok(());
        }
        self.write(&surface, &format!("sparkline_{}.png", spec.name), written)
    }

    fn render_heatmap(&self, spec: &HeatmapSpec, written: &mut Vec<PathBuf>) -> Result<()> {
        let data = match &spec.csv {
            Some(path) => load_heatmap_csv(path)?,
            None => spec.data.clone(),
        };
        let opts = HeatmapOptions { keying: spec.keying, columns: spec.columns, ..HeatmapOptions::default() };
        let cells = heatmap_layout(&data, &opts).len();
        if cells == 0 {
            log::info!("heatmap has no data; skipped");
            return Ok(());
        }
        let (w, h) = opts.surface_size(cells);
        let mut surface = Surface::new(w, h);
        surface.clear(self.theme.background);
        draw_heatmap(&mut surface, &data, &opts, &self.theme);
        self.write(&surface, "heatmap.png", written)
    }
}

/// Sample dashboard used when no config file is given.
pub fn sample_config(out_dir: &Path) -> DashboardConfig {
    let months = [("Jan", 65.0), ("Feb", 59.0), ("Mar", 80.0), ("Apr", 81.0), ("May", 56.0), ("Jun", 55.0)];
    let sales = months.iter().map(|&(label, value)| ChartDatum::new(label, value)).collect();

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let activity = (0..90i64)
        .map(|i| HeatmapDatum::new(start + Duration::days(i), ((i * 7) % 11) as f64))
        .collect();

    DashboardConfig {
        out_dir: out_dir.to_path_buf(),
        charts: vec![ChartSpec {
            name: "sales".to_string(),
            title: Some("Monthly Sales".to_string()),
            kinds: ChartKind::ALL.to_vec(),
            width: chartkit_core::types::WIDTH,
            height: chartkit_core::types::HEIGHT,
            data: sales,
            csv: None,
        }],
        progress: vec![0.0, 65.0, 100.0],
        sparklines: vec![SparklineSpec {
            name: "visitors".to_string(),
            values: vec![12.0, 19.0, 3.0, 5.0, 2.0, 3.0, 15.0, 22.0],
        }],
        heatmap: Some(HeatmapSpec { data: activity, csv: None, keying: Default::default(), columns: 13 }),
        ..DashboardConfig::default()
    }
}
