// File: crates/chartkit-core/src/line.rs
// Summary: Line chart layout (evenly spaced x, max-normalized y) and drawing.

use crate::chart::RenderOptions;
use crate::data::{max_value, ChartDatum};
use crate::error::ChartError;
use crate::geometry::{Point, RectF};
use crate::grid::linspace;
use crate::palette::palette_color;
use crate::scale::ValueScale;
use crate::surface::{Surface, TextAlign};

/// Screen position of every datum, in series order.
///
/// `x_i = left + i / (n - 1) * plot width`. A single datum sits at the left edge of
/// the plot area.
pub fn line_points(data: &[ChartDatum], width: u32, height: u32, opts: &RenderOptions) -> Result<Vec<Point>, ChartError> {
    let max = max_value(data).ok_or(ChartError::EmptySeries)?;
    let plot = RectF::inset(width, height, &opts.insets);
    let scale = ValueScale::from_zero(plot.top, plot.bottom, max);
    let xs = linspace(plot.left as f64, plot.right as f64, data.len());
    Ok(xs
        .into_iter()
        .zip(data)
        .map(|(x, d)| Point::new(x as f32, scale.to_px(d.value)))
        .collect())
}

/// One polyline in the first palette color with a filled marker on each point.
/// Fewer than two points draw the markers only.
pub fn draw_line_chart(surface: &mut Surface, data: &[ChartDatum], opts: &RenderOptions) -> Result<(), ChartError> {
    let points = line_points(data, surface.width(), surface.height(), opts)?;
    let color = palette_color(0);
    let baseline = surface.height() as f32 - opts.insets.bottom as f32 + 20.0;

    if points.len() >= 2 {
        surface.stroke_polyline(points.clone(), opts.line_width, color);
    }
    for (p, d) in points.iter().zip(data) {
        surface.fill_circle(*p, opts.marker_radius, color);
        if opts.draw_labels {
            surface.fill_text(d.label.as_str(), Point::new(p.x, baseline), opts.label_size, TextAlign::Center, opts.theme.text);
        }
    }
    log::debug!("line chart: {} points on {}x{}", points.len(), surface.width(), surface.height());
    Ok(())
}
