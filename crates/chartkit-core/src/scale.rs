// File: crates/chartkit-core/src/scale.rs
// Summary: Value (Y) scale mapping a data range onto a vertical pixel span.

/// Value Y coordinate (e.g., a datum's value).
pub type Value = f64;

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom, top]` pixels.
///
/// When the range collapses (`vmax == vmin`) every value maps to `flat_fraction`
/// of the span instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
    pub flat_fraction: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        Self { top_px, bottom_px, vmin, vmax, flat_fraction: 0.0 }
    }

    /// Scale from zero to the series maximum: `fraction(v) == v / max`.
    pub fn from_zero(top_px: f32, bottom_px: f32, max: Value) -> Self {
        Self::new_linear(top_px, bottom_px, 0.0, max)
    }

    pub fn with_flat_fraction(mut self, f: f64) -> Self {
        self.flat_fraction = f;
        self
    }

    /// Position of `v` within the range, 0 at `vmin` and 1 at `vmax`. Not clamped.
    #[inline]
    pub fn fraction(&self, v: Value) -> f64 {
        let span = self.vmax - self.vmin;
        if span == 0.0 {
            self.flat_fraction
        } else {
            (v - self.vmin) / span
        }
    }

    /// Pixel span covered by the full range.
    #[inline]
    pub fn span_px(&self) -> f32 {
        self.bottom_px - self.top_px
    }

    /// Pixel extent of `v` measured up from the bottom edge.
    #[inline]
    pub fn extent(&self, v: Value) -> f32 {
        (self.fraction(v) * self.span_px() as f64) as f32
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        self.bottom_px - self.extent(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_range_onto_span() {
        let s = ValueScale::from_zero(40.0, 260.0, 100.0);
        assert_eq!(s.to_px(0.0), 260.0);
        assert_eq!(s.to_px(100.0), 40.0);
        assert_eq!(s.extent(50.0), 110.0);
    }

    #[test]
    fn collapsed_range_uses_flat_fraction() {
        let s = ValueScale::new_linear(0.0, 30.0, 3.0, 3.0).with_flat_fraction(0.5);
        assert_eq!(s.to_px(3.0), 15.0);
        let zero = ValueScale::from_zero(0.0, 100.0, 0.0);
        assert_eq!(zero.extent(0.0), 0.0);
    }
}
