// File: crates/chartkit-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use std::f64::consts::TAU;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Plot area left after removing `insets` from a `width` x `height` surface.
    pub fn inset(width: u32, height: u32, insets: &Insets) -> Self {
        Self::from_ltrb(
            insets.left as f32,
            insets.top as f32,
            width as f32 - insets.right as f32,
            height as f32 - insets.bottom as f32,
        )
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite() && self.right.is_finite() && self.bottom.is_finite()
    }
}

/// Point at `angle` radians on a circle; angle 0 is 3 o'clock and grows clockwise (y points down).
#[inline]
pub fn polar(center: Point, radius: f32, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos() as f32,
        center.y + radius * angle.sin() as f32,
    )
}

/// Circumference of a circle of `radius`.
#[inline]
pub fn circumference(radius: f64) -> f64 {
    TAU * radius
}
