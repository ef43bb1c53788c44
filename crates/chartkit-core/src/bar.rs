// File: crates/chartkit-core/src/bar.rs
// Summary: Bar chart layout (max-normalized heights, left-aligned bars) and drawing.

use crate::chart::{format_value, RenderOptions};
use crate::color::Rgba;
use crate::data::{max_value, ChartDatum};
use crate::error::ChartError;
use crate::geometry::{Point, RectF};
use crate::palette::resolve_color;
use crate::scale::ValueScale;
use crate::surface::{Surface, TextAlign};

/// Resolved geometry for one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub rect: RectF,
    pub color: Rgba,
    /// Baseline-center anchor for the label beneath the bar.
    pub label_at: Point,
    /// Baseline-center anchor for the value above the bar.
    pub value_at: Point,
}

impl BarGeometry {
    pub fn height(&self) -> f32 {
        self.rect.height()
    }
}

/// Lay out one bar per datum across the plot area of a `width` x `height` surface.
///
/// Slot width is `(width - horizontal insets) / n`; each bar fills its slot minus
/// `opts.bar_gap` on the right. Heights are `value / max * plot height`; a series whose
/// maximum is zero produces zero-height bars.
pub fn bar_layout(data: &[ChartDatum], width: u32, height: u32, opts: &RenderOptions) -> Result<Vec<BarGeometry>, ChartError> {
    let max = max_value(data).ok_or(ChartError::EmptySeries)?;
    let plot = RectF::inset(width, height, &opts.insets);
    let slot = plot.width() / data.len() as f32;
    let bar_w = slot - opts.bar_gap;
    let scale = ValueScale::from_zero(plot.top, plot.bottom, max);

    let bars = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let x = plot.left + i as f32 * slot;
            let top = plot.bottom - scale.extent(d.value);
            let cx = x + bar_w * 0.5;
            BarGeometry {
                rect: RectF::from_ltrb(x, top, x + bar_w, plot.bottom),
                color: resolve_color(d, i),
                label_at: Point::new(cx, plot.bottom + 20.0),
                value_at: Point::new(cx, top - 5.0),
            }
        })
        .collect();
    Ok(bars)
}

pub fn draw_bar_chart(surface: &mut Surface, data: &[ChartDatum], opts: &RenderOptions) -> Result<(), ChartError> {
    let bars = bar_layout(data, surface.width(), surface.height(), opts)?;
    for (bar, d) in bars.iter().zip(data) {
        surface.fill_rect(bar.rect, bar.color);
        if opts.draw_labels {
            surface.fill_text(d.label.as_str(), bar.label_at, opts.label_size, TextAlign::Center, opts.theme.text);
            surface.fill_text(format_value(d.value), bar.value_at, opts.label_size, TextAlign::Center, opts.theme.text);
        }
    }
    log::debug!("bar chart: {} bars on {}x{}", bars.len(), surface.width(), surface.height());
    Ok(())
}
