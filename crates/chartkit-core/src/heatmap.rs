// File: crates/chartkit-core/src/heatmap.rs
// Summary: Week-bucketed heatmap: grouping by week-of-month key, averaging, cell layout.
// Notes:
// - The default `WeekKeying::YearWeek` key is "YYYY-Wn", where n is the week within
//   the month. The same key therefore recurs in every month of a year and those
//   points land in one bucket. `WeekKeying::MonthWeek` keeps months apart.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::data::HeatmapDatum;
use crate::geometry::RectF;
use crate::surface::Surface;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeekKeying {
    /// `"YYYY-Wn"`; weeks of different months in the same year share a key.
    #[default]
    YearWeek,
    /// `"YYYY-MM-Wn"`.
    MonthWeek,
}

/// Week within the month, 1-based: `ceil((day + weekday of the 1st) / 7)` with Sunday = 0.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let first_offset = date.with_day(1).map(|d| d.weekday().num_days_from_sunday()).unwrap_or(0);
    (date.day() + first_offset).div_ceil(7)
}

pub fn week_key(date: NaiveDate, keying: WeekKeying) -> String {
    let week = week_of_month(date);
    match keying {
        WeekKeying::YearWeek => format!("{}-W{}", date.year(), week),
        WeekKeying::MonthWeek => format!("{}-{:02}-W{}", date.year(), date.month(), week),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeekBucket {
    pub key: String,
    pub sum: f64,
    pub count: usize,
}

impl WeekBucket {
    pub fn average(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Group `data` into week buckets, in the order each key is first seen.
pub fn week_buckets(data: &[HeatmapDatum], keying: WeekKeying) -> Vec<WeekBucket> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<WeekBucket> = Vec::new();
    for d in data {
        let key = week_key(d.date, keying);
        match index.get(&key) {
            Some(&i) => {
                buckets[i].sum += d.value;
                buckets[i].count += 1;
            }
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(WeekBucket { key, sum: d.value, count: 1 });
            }
        }
    }
    buckets
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatmapOptions {
    pub cell_size: f32,
    pub gap: f32,
    /// Cells per row before wrapping.
    pub columns: usize,
    pub keying: WeekKeying,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self { cell_size: 12.0, gap: 2.0, columns: 13, keying: WeekKeying::YearWeek }
    }
}

impl HeatmapOptions {
    /// Surface size needed to hold `cells` cells.
    pub fn surface_size(&self, cells: usize) -> (u32, u32) {
        if cells == 0 {
            return (0, 0);
        }
        let cols = cells.min(self.columns.max(1));
        let rows = cells.div_ceil(self.columns.max(1));
        let pitch = self.cell_size + self.gap;
        let w = cols as f32 * pitch - self.gap;
        let h = rows as f32 * pitch - self.gap;
        (w.ceil() as u32, h.ceil() as u32)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatCell {
    pub key: String,
    pub average: f64,
    /// `average / max input value`; 0 when the maximum is not positive.
    pub intensity: f64,
    pub rect: RectF,
}

/// One cell per bucket, row-major, wrapping after `opts.columns`.
pub fn heatmap_layout(data: &[HeatmapDatum], opts: &HeatmapOptions) -> Vec<HeatCell> {
    let max = data.iter().map(|d| d.value).fold(f64::NEG_INFINITY, f64::max);
    let columns = opts.columns.max(1);
    let pitch = opts.cell_size + opts.gap;

    week_buckets(data, opts.keying)
        .into_iter()
        .enumerate()
        .map(|(i, b)| {
            let average = b.average();
            let intensity = if max > 0.0 { average / max } else { 0.0 };
            let (row, col) = (i / columns, i % columns);
            HeatCell {
                rect: RectF::from_ltwh(col as f32 * pitch, row as f32 * pitch, opts.cell_size, opts.cell_size),
                key: b.key,
                average,
                intensity,
            }
        })
        .collect()
}

pub fn draw_heatmap(surface: &mut Surface, data: &[HeatmapDatum], opts: &HeatmapOptions, theme: &Theme) -> Vec<HeatCell> {
    let cells = heatmap_layout(data, opts);
    for c in &cells {
        surface.fill_rect(c.rect, theme.heat_base.with_alpha(c.intensity));
    }
    log::debug!("heatmap: {} points in {} buckets", data.len(), cells.len());
    cells
}
