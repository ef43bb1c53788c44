// File: crates/chartkit-core/src/palette.rs
// Summary: Fixed fallback palette, consumed cyclically by datum index.

use crate::color::Rgba;
use crate::data::ChartDatum;

pub const PALETTE: [Rgba; 10] = [
    Rgba::from_hex(0x3b82f6), // blue
    Rgba::from_hex(0xef4444), // red
    Rgba::from_hex(0x10b981), // emerald
    Rgba::from_hex(0xf59e0b), // amber
    Rgba::from_hex(0x8b5cf6), // violet
    Rgba::from_hex(0xec4899), // pink
    Rgba::from_hex(0x06b6d4), // cyan
    Rgba::from_hex(0x84cc16), // lime
    Rgba::from_hex(0xf97316), // orange
    Rgba::from_hex(0x6366f1), // indigo
];

#[inline]
pub fn palette_color(index: usize) -> Rgba {
    PALETTE[index % PALETTE.len()]
}

/// Color for the datum at `index`: its explicit color when it parses, else the palette entry.
pub fn resolve_color(datum: &ChartDatum, index: usize) -> Rgba {
    match datum.color.as_deref() {
        Some(raw) => Rgba::parse(raw).unwrap_or_else(|e| {
            log::warn!("datum '{}': {e}; using palette color", datum.label);
            palette_color(index)
        }),
        None => palette_color(index),
    }
}
