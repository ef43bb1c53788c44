// File: crates/chartkit-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, font sizes).

/// Default chart surface width in pixels.
pub const WIDTH: u32 = 400;
/// Default chart surface height in pixels.
pub const HEIGHT: u32 = 300;

/// Padding around the plot area of bar/line/pie charts.
pub const CHART_PADDING: u32 = 40;
/// Horizontal gap left empty at the right of every bar slot.
pub const BAR_GAP: f32 = 10.0;
pub const LABEL_FONT_SIZE: f32 = 12.0;
pub const TITLE_FONT_SIZE: f32 = 16.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on all four sides.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(CHART_PADDING)
    }
}
