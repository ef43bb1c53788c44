// File: crates/chartkit-skia/src/lib.rs
// Summary: Skia CPU raster backend; replays a recorded chartkit Surface into pixels.

pub mod text;

use std::f64::consts::TAU;
use std::path::Path;

use anyhow::{Context, Result};
use chartkit_core::geometry::{Point, RectF};
use chartkit_core::{DrawCommand, Rgba, Surface};
use skia_safe as skia;

pub use text::TextShaper;

/// Raw RGBA8 frame: `(pixels, width, height, stride)`.
pub type Rgba8Frame = (Vec<u8>, u32, u32, usize);

pub struct SkiaRenderer {
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Rasterize `surface` onto a fresh CPU surface of the same size.
    fn rasterize(&self, surface: &Surface) -> Result<skia::Surface> {
        let (w, h) = (surface.width() as i32, surface.height() as i32);
        let mut raster = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = raster.canvas();
        canvas.clear(skia::Color::TRANSPARENT);

        let mut skipped = 0usize;
        for cmd in surface.commands() {
            if !cmd.is_finite() {
                skipped += 1;
                continue;
            }
            self.replay(canvas, cmd);
        }
        if skipped > 0 {
            log::debug!("skipped {skipped} non-finite draw commands");
        }
        Ok(raster)
    }

    fn replay(&self, canvas: &skia::Canvas, cmd: &DrawCommand) {
        match cmd {
            DrawCommand::Clear(color) => {
                canvas.clear(to_color(*color));
            }
            DrawCommand::FillRect { rect, color } => {
                canvas.draw_rect(to_rect(rect), &fill(*color));
            }
            DrawCommand::StrokePolyline { points, width, color } => {
                let Some((first, rest)) = points.split_first() else { return };
                let mut path = skia::Path::new();
                path.move_to((first.x, first.y));
                for p in rest {
                    path.line_to((p.x, p.y));
                }
                let mut paint = stroke(*color, *width);
                paint.set_stroke_join(skia::paint::Join::Round);
                paint.set_stroke_cap(skia::paint::Cap::Round);
                canvas.draw_path(&path, &paint);
            }
            DrawCommand::FillCircle { center, radius, color } => {
                canvas.draw_circle((center.x, center.y), *radius, &fill(*color));
            }
            DrawCommand::StrokeCircle { center, radius, width, color } => {
                canvas.draw_circle((center.x, center.y), *radius, &stroke(*color, *width));
            }
            DrawCommand::FillSector { center, radius, inner_radius, start, sweep, color } => {
                let path = sector_path(*center, *radius, *inner_radius, *start, *sweep);
                canvas.draw_path(&path, &fill(*color));
            }
            DrawCommand::StrokeArc { center, radius, start, sweep, width, color } => {
                let paint = stroke(*color, *width);
                if sweep.abs() >= TAU {
                    canvas.draw_circle((center.x, center.y), *radius, &paint);
                } else {
                    let oval = oval(*center, *radius);
                    canvas.draw_arc(oval, start.to_degrees() as f32, sweep.to_degrees() as f32, false, &paint);
                }
            }
            DrawCommand::Text { text, at, size, align, color } => {
                self.text.draw(canvas, text, at.x, at.y, *size, to_color(*color), *align);
            }
        }
    }

    /// Render to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, surface: &Surface) -> Result<Vec<u8>> {
        let mut raster = self.rasterize(surface)?;
        let image = raster.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file at `path`, creating parent directories as needed.
    pub fn render_to_png(&self, surface: &Surface, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_to_png_bytes(surface)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    /// Render to an unpremultiplied RGBA8 buffer.
    pub fn render_to_rgba8(&self, surface: &Surface) -> Result<Rgba8Frame> {
        let mut raster = self.rasterize(surface)?;
        let (w, h) = (surface.width(), surface.height());
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new((w as i32, h as i32), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let mut pixels = vec![0u8; stride * h as usize];
        if !raster.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w, h, stride))
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_rect(r: &RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn oval(center: Point, radius: f32) -> skia::Rect {
    skia::Rect::from_ltrb(center.x - radius, center.y - radius, center.x + radius, center.y + radius)
}

fn fill(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_color(color));
    paint
}

fn stroke(color: Rgba, width: f32) -> skia::Paint {
    let mut paint = fill(color);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

/// Wedge (`inner == 0`) or ring segment. Full turns become a disc or an even-odd annulus.
fn sector_path(center: Point, radius: f32, inner: f32, start: f64, sweep: f64) -> skia::Path {
    let mut path = skia::Path::new();
    let c = (center.x, center.y);
    if sweep.abs() >= TAU {
        path.add_circle(c, radius, None);
        if inner > 0.0 {
            path.add_circle(c, inner, None);
            path.set_fill_type(skia::PathFillType::EvenOdd);
        }
        return path;
    }
    let (start_deg, sweep_deg) = (start.to_degrees() as f32, sweep.to_degrees() as f32);
    if inner > 0.0 {
        path.arc_to(oval(center, radius), start_deg, sweep_deg, true);
        path.arc_to(oval(center, inner), start_deg + sweep_deg, -sweep_deg, false);
    } else {
        path.move_to(c);
        path.arc_to(oval(center, radius), start_deg, sweep_deg, false);
    }
    path.close();
    path
}
