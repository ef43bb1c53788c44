// File: crates/chartkit-core/src/theme.rs
// Summary: Light/Dark theming for widget backgrounds, text and tracks.

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub text: Rgba,
    pub muted_text: Rgba,
    /// Progress ring track.
    pub track: Rgba,
    /// Heatmap cell color; alpha is replaced per cell.
    pub heat_base: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            text: Rgba::rgb(31, 41, 55),
            muted_text: Rgba::rgb(107, 114, 128),
            track: Rgba::rgb(229, 231, 235),
            heat_base: Rgba::rgb(34, 197, 94),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(17, 24, 39),
            text: Rgba::rgb(243, 244, 246),
            muted_text: Rgba::rgb(156, 163, 175),
            track: Rgba::rgb(55, 65, 81),
            heat_base: Rgba::rgb(74, 222, 128),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
