// File: crates/chartkit-core/src/lib.rs
// Summary: Core library entry point; exports chart/widget layout and draw-command recording.

pub mod chart;
pub mod data;
pub mod color;
pub mod palette;
pub mod error;
pub mod types;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod surface;
pub mod theme;
pub mod bar;
pub mod line;
pub mod pie;
pub mod progress;
pub mod sparkline;
pub mod heatmap;

pub use chart::{render_chart, ChartCanvas, ChartProps, RenderOptions, RenderState};
pub use data::{ChartDatum, ChartKind, HeatmapDatum};
pub use color::Rgba;
pub use palette::{palette_color, PALETTE};
pub use error::ChartError;
pub use surface::{DrawCommand, Surface, TextAlign};
pub use theme::Theme;
pub use progress::{draw_progress_ring, ring_geometry, ProgressRingOptions};
pub use sparkline::{draw_sparkline, sparkline_points, SparklineOptions};
pub use heatmap::{draw_heatmap, heatmap_layout, week_buckets, HeatmapOptions, WeekKeying};
