// File: crates/chartkit-core/src/surface.rs
// Summary: Owned drawing surface that records primitives as an ordered draw command list.
// Notes:
// - Commands are recorded verbatim, including non-finite coordinates; backends decide
//   what to do with them (the Skia backend skips them, matching a 2D canvas that
//   silently refuses to paint NaN paths).

use crate::color::Rgba;
use crate::geometry::{Point, RectF};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear(Rgba),
    FillRect { rect: RectF, color: Rgba },
    /// Open polyline through `points` in order.
    StrokePolyline { points: Vec<Point>, width: f32, color: Rgba },
    FillCircle { center: Point, radius: f32, color: Rgba },
    StrokeCircle { center: Point, radius: f32, width: f32, color: Rgba },
    /// Annular sector between `inner_radius` and `radius`; `inner_radius == 0` is a pie wedge.
    /// Angles in radians, 0 at 3 o'clock, positive sweep is clockwise on screen.
    FillSector { center: Point, radius: f32, inner_radius: f32, start: f64, sweep: f64, color: Rgba },
    /// Stroked circular arc, same angle convention as `FillSector`.
    StrokeArc { center: Point, radius: f32, start: f64, sweep: f64, width: f32, color: Rgba },
    /// Text whose baseline sits at `at.y`; `at.x` is interpreted per `align`.
    Text { text: String, at: Point, size: f32, align: TextAlign, color: Rgba },
}

impl DrawCommand {
    /// Whether every coordinate, radius and angle is finite (i.e. the command is paintable).
    pub fn is_finite(&self) -> bool {
        match self {
            DrawCommand::Clear(_) => true,
            DrawCommand::FillRect { rect, .. } => rect.is_finite(),
            DrawCommand::StrokePolyline { points, width, .. } => {
                width.is_finite() && points.iter().all(Point::is_finite)
            }
            DrawCommand::FillCircle { center, radius, .. } => center.is_finite() && radius.is_finite(),
            DrawCommand::StrokeCircle { center, radius, width, .. } => {
                center.is_finite() && radius.is_finite() && width.is_finite()
            }
            DrawCommand::FillSector { center, radius, inner_radius, start, sweep, .. } => {
                center.is_finite() && radius.is_finite() && inner_radius.is_finite() && start.is_finite() && sweep.is_finite()
            }
            DrawCommand::StrokeArc { center, radius, start, sweep, width, .. } => {
                center.is_finite() && radius.is_finite() && start.is_finite() && sweep.is_finite() && width.is_finite()
            }
            DrawCommand::Text { at, size, .. } => at.is_finite() && size.is_finite(),
        }
    }
}

/// A fixed-size drawable owned by exactly one widget.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }
    pub fn is_blank(&self) -> bool {
        self.commands.iter().all(|c| matches!(c, DrawCommand::Clear(_)))
    }

    /// Change dimensions in place. Drops the recorded frame; the caller redraws.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    /// Drop everything recorded so far and start a new frame filled with `background`.
    pub fn clear(&mut self, background: Rgba) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(background));
    }

    pub fn fill_rect(&mut self, rect: RectF, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn stroke_polyline(&mut self, points: Vec<Point>, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokePolyline { points, width, color });
    }

    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    pub fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, width, color });
    }

    pub fn fill_sector(&mut self, center: Point, radius: f32, inner_radius: f32, start: f64, sweep: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillSector { center, radius, inner_radius, start, sweep, color });
    }

    pub fn stroke_arc(&mut self, center: Point, radius: f32, start: f64, sweep: f64, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeArc { center, radius, start, sweep, width, color });
    }

    pub fn fill_text(&mut self, text: impl Into<String>, at: Point, size: f32, align: TextAlign, color: Rgba) {
        self.commands.push(DrawCommand::Text { text: text.into(), at, size, align, color });
    }
}
