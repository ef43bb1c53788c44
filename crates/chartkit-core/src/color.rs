// File: crates/chartkit-core/src/color.rs
// Summary: RGBA color value and CSS-style color string parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a packed `0xRRGGBB` literal (opaque).
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(((hex >> 16) & 0xff) as u8, ((hex >> 8) & 0xff) as u8, (hex & 0xff) as u8)
    }

    /// Same color with alpha replaced by `alpha` in [0, 1]. Out of range and NaN
    /// inputs saturate (NaN maps to fully transparent).
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Self { a: (a * 255.0).round() as u8, ..self }
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let raw = s.trim();
        let invalid = || ChartError::InvalidColor(s.to_string());

        if let Some(hex) = raw.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| invalid());
            return match hex.len() {
                3 => Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
                6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
                8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
                _ => Err(invalid()),
            };
        }

        let lower = raw.to_ascii_lowercase();
        let (body, has_alpha) = if let Some(b) = lower.strip_prefix("rgba(") {
            (b, true)
        } else if let Some(b) = lower.strip_prefix("rgb(") {
            (b, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
        let base = Self::rgb(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
        if has_alpha {
            let a = parts[3].parse::<f64>().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(invalid());
            }
            Ok(base.with_alpha(a))
        } else {
            Ok(base)
        }
    }
}

impl FromStr for Rgba {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}
