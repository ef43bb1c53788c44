// File: crates/chartkit-core/src/sparkline.rs
// Summary: Min-max normalized sparkline polyline.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::grid::linspace;
use crate::palette::palette_color;
use crate::scale::ValueScale;
use crate::surface::Surface;

/// Where a constant series is drawn, as a fraction of the height measured from the bottom.
pub const FLAT_LINE_FRACTION: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparklineOptions {
    pub width: f32,
    pub height: f32,
    pub stroke_width: f32,
    pub color: Rgba,
}

impl Default for SparklineOptions {
    fn default() -> Self {
        Self { width: 100.0, height: 30.0, stroke_width: 2.0, color: palette_color(0) }
    }
}

/// Polyline vertices for `values`, or `None` when there are fewer than two values.
///
/// Each value is normalized to `(v - min) / (max - min)`; a constant series lies flat
/// at [`FLAT_LINE_FRACTION`] of the height.
pub fn sparkline_points(values: &[f64], width: f32, height: f32) -> Option<Vec<Point>> {
    if values.len() < 2 {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scale = ValueScale::new_linear(0.0, height, min, max).with_flat_fraction(FLAT_LINE_FRACTION);
    let xs = linspace(0.0, width as f64, values.len());
    Some(xs.into_iter().zip(values).map(|(x, v)| Point::new(x as f32, scale.to_px(*v))).collect())
}

/// Record the sparkline; returns `false` (and records nothing) for inputs shorter than two.
pub fn draw_sparkline(surface: &mut Surface, values: &[f64], opts: &SparklineOptions) -> bool {
    match sparkline_points(values, opts.width, opts.height) {
        Some(points) => {
            surface.stroke_polyline(points, opts.stroke_width, opts.color);
            true
        }
        None => false,
    }
}
