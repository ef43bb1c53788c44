// File: crates/chartkit-core/src/progress.rs
// Summary: Progress ring: track circle plus a foreground arc sized by stroke-dash arithmetic.

use std::f64::consts::FRAC_PI_2;

use crate::chart::format_value;
use crate::color::Rgba;
use crate::geometry::{circumference, Point};
use crate::palette::palette_color;
use crate::surface::{Surface, TextAlign};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressRingOptions {
    /// Width and height of the square the ring is drawn in.
    pub size: f32,
    pub stroke_width: f32,
    pub color: Rgba,
    pub show_label: bool,
}

impl Default for ProgressRingOptions {
    fn default() -> Self {
        Self { size: 120.0, stroke_width: 8.0, color: palette_color(0), show_label: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub center: Point,
    pub radius: f64,
    pub circumference: f64,
    /// Length of the stroke left undrawn: `circumference * (1 - progress / 100)`.
    pub dash_offset: f64,
    /// Arc start; the ring fills clockwise from 12 o'clock.
    pub start: f64,
    /// Angular extent of the drawn part, `(circumference - dash_offset) / radius`.
    pub sweep: f64,
}

/// Ring geometry for `progress` (expected 0..=100). Values outside that range are not
/// clamped: above 100 the offset goes negative and the sweep passes a full turn.
pub fn ring_geometry(progress: f64, opts: &ProgressRingOptions) -> RingGeometry {
    let radius = ((opts.size - opts.stroke_width) * 0.5) as f64;
    let circumference = circumference(radius);
    let dash_offset = circumference * (1.0 - progress / 100.0);
    let half = opts.size * 0.5;
    RingGeometry {
        center: Point::new(half, half),
        radius,
        circumference,
        dash_offset,
        start: -FRAC_PI_2,
        sweep: (circumference - dash_offset) / radius,
    }
}

pub fn draw_progress_ring(surface: &mut Surface, progress: f64, opts: &ProgressRingOptions, theme: &Theme) -> RingGeometry {
    let ring = ring_geometry(progress, opts);
    let r = ring.radius as f32;
    surface.stroke_circle(ring.center, r, opts.stroke_width, theme.track);
    surface.stroke_arc(ring.center, r, ring.start, ring.sweep, opts.stroke_width, opts.color);
    if opts.show_label {
        let size = (opts.size * 0.2).max(8.0);
        let at = Point::new(ring.center.x, ring.center.y + size * 0.35);
        surface.fill_text(format!("{}%", format_value(progress)), at, size, TextAlign::Center, theme.text);
    }
    log::debug!("progress ring: {progress}% offset={:.2}", ring.dash_offset);
    ring
}
