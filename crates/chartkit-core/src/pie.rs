// File: crates/chartkit-core/src/pie.rs
// Summary: Pie and doughnut layout (proportional sweep angles) and drawing.

use std::f64::consts::TAU;

use crate::chart::RenderOptions;
use crate::color::Rgba;
use crate::data::ChartDatum;
use crate::error::ChartError;
use crate::geometry::{polar, Point, RectF};
use crate::palette::resolve_color;
use crate::surface::{Surface, TextAlign};

/// Inner radius of a doughnut as a fraction of the outer radius.
pub const DOUGHNUT_RATIO: f32 = 0.6;

const SLICE_LABEL: Rgba = Rgba::rgb(255, 255, 255);

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Start angle in radians (0 = 3 o'clock, clockwise).
    pub start: f64,
    pub sweep: f64,
    pub color: Rgba,
    pub label_at: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieLayout {
    pub center: Point,
    pub radius: f32,
    /// Zero for a pie.
    pub inner_radius: f32,
    pub slices: Vec<Slice>,
}

/// `(start, sweep)` per datum: sweeps are `value / total * 2π`, laid end to end from angle 0.
///
/// Values must be finite and non-negative, and must not all be zero.
pub fn sweep_angles(data: &[ChartDatum]) -> Result<Vec<(f64, f64)>, ChartError> {
    if data.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    if let Some((index, d)) = data.iter().enumerate().find(|(_, d)| !d.value.is_finite() || d.value < 0.0) {
        return Err(ChartError::InvalidValue { index, value: d.value });
    }
    let total: f64 = data.iter().map(|d| d.value).sum();
    if total == 0.0 {
        return Err(ChartError::ZeroTotal);
    }

    let mut angle = 0.0;
    Ok(data
        .iter()
        .map(|d| {
            let sweep = d.value / total * TAU;
            let start = angle;
            angle += sweep;
            (start, sweep)
        })
        .collect())
}

/// Full pie (or doughnut when `doughnut` is set) layout centered in the plot area.
pub fn pie_layout(data: &[ChartDatum], width: u32, height: u32, doughnut: bool, opts: &RenderOptions) -> Result<PieLayout, ChartError> {
    let angles = sweep_angles(data)?;
    let plot = RectF::inset(width, height, &opts.insets);
    let center = plot.center();
    let radius = (plot.width().min(plot.height()) * 0.5).max(0.0);
    let inner_radius = if doughnut { radius * DOUGHNUT_RATIO } else { 0.0 };
    let label_radius = if doughnut { (radius + inner_radius) * 0.5 } else { radius * 0.7 };

    let slices = angles
        .into_iter()
        .zip(data)
        .enumerate()
        .map(|(i, ((start, sweep), d))| Slice {
            start,
            sweep,
            color: resolve_color(d, i),
            label_at: polar(center, label_radius, start + sweep * 0.5),
        })
        .collect();
    Ok(PieLayout { center, radius, inner_radius, slices })
}

pub fn draw_pie_chart(surface: &mut Surface, data: &[ChartDatum], doughnut: bool, opts: &RenderOptions) -> Result<(), ChartError> {
    let layout = pie_layout(data, surface.width(), surface.height(), doughnut, opts)?;
    for s in &layout.slices {
        surface.fill_sector(layout.center, layout.radius, layout.inner_radius, s.start, s.sweep, s.color);
    }
    if opts.draw_labels {
        // Labels go on top of every slice so later slices never cover earlier text.
        let nudge = opts.label_size * 0.35;
        for (s, d) in layout.slices.iter().zip(data) {
            let at = Point::new(s.label_at.x, s.label_at.y + nudge);
            surface.fill_text(d.label.as_str(), at, opts.label_size, TextAlign::Center, SLICE_LABEL);
        }
    }
    log::debug!(
        "{} chart: {} slices, r={:.1}",
        if doughnut { "doughnut" } else { "pie" },
        layout.slices.len(),
        layout.radius
    );
    Ok(())
}
