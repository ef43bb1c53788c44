// File: crates/chartkit-core/src/chart.rs
// Summary: Chart props, render options, kind dispatch and the redraw-on-change canvas.

use serde::{Deserialize, Serialize};

use crate::bar::draw_bar_chart;
use crate::data::{ChartDatum, ChartKind};
use crate::error::ChartError;
use crate::geometry::Point;
use crate::line::draw_line_chart;
use crate::pie::draw_pie_chart;
use crate::surface::{Surface, TextAlign};
use crate::theme::Theme;
use crate::types::{Insets, BAR_GAP, HEIGHT, LABEL_FONT_SIZE, TITLE_FONT_SIZE, WIDTH};

const NO_DATA: &str = "No data";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub insets: Insets,
    pub theme: Theme,
    pub bar_gap: f32,
    pub line_width: f32,
    pub marker_radius: f32,
    pub label_size: f32,
    pub title_size: f32,
    /// Labels, values and titles; off for font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            theme: Theme::default(),
            bar_gap: BAR_GAP,
            line_width: 3.0,
            marker_radius: 4.0,
            label_size: LABEL_FONT_SIZE,
            title_size: TITLE_FONT_SIZE,
            draw_labels: true,
        }
    }
}

fn default_width() -> u32 { WIDTH }
fn default_height() -> u32 { HEIGHT }

/// Everything a chart is a function of.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartProps {
    #[serde(default)]
    pub data: Vec<ChartDatum>,
    #[serde(default, rename = "type")]
    pub kind: ChartKind,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub title: Option<String>,
}

impl ChartProps {
    pub fn new(data: Vec<ChartDatum>, kind: ChartKind) -> Self {
        Self { data, kind, width: WIDTH, height: HEIGHT, title: None }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Record `data` as a chart of `kind` onto an already cleared surface.
pub fn render_chart(surface: &mut Surface, data: &[ChartDatum], kind: ChartKind, opts: &RenderOptions) -> Result<(), ChartError> {
    match kind {
        ChartKind::Bar => draw_bar_chart(surface, data, opts),
        ChartKind::Line => draw_line_chart(surface, data, opts),
        ChartKind::Pie => draw_pie_chart(surface, data, false, opts),
        ChartKind::Doughnut => draw_pie_chart(surface, data, true, opts),
    }
}

/// Outcome of the last redraw.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderState {
    Drawn,
    /// The inputs could not be drawn; the surface shows a "No data" message.
    NoData(ChartError),
}

/// Owns one surface and keeps it in sync with a set of [`ChartProps`].
///
/// The surface is cleared and redrawn in place whenever the props change;
/// it is resized, never replaced.
pub struct ChartCanvas {
    surface: Surface,
    props: ChartProps,
    opts: RenderOptions,
    state: RenderState,
    frames: u64,
}

impl ChartCanvas {
    pub fn new(props: ChartProps, opts: RenderOptions) -> Self {
        let surface = Surface::new(props.width, props.height);
        let mut canvas = Self { surface, props, opts, state: RenderState::Drawn, frames: 0 };
        canvas.redraw();
        canvas
    }

    pub fn surface(&self) -> &Surface { &self.surface }
    pub fn props(&self) -> &ChartProps { &self.props }
    pub fn options(&self) -> &RenderOptions { &self.opts }
    pub fn state(&self) -> &RenderState { &self.state }
    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 { self.frames }

    /// Replace the props; redraws and returns `true` only if they differ from the current ones.
    pub fn update(&mut self, props: ChartProps) -> bool {
        if props == self.props {
            return false;
        }
        if (props.width, props.height) != (self.surface.width(), self.surface.height()) {
            self.surface.resize(props.width, props.height);
        }
        self.props = props;
        self.redraw();
        true
    }

    /// Replace the render options; redraws only on change.
    pub fn set_options(&mut self, opts: RenderOptions) -> bool {
        if opts == self.opts {
            return false;
        }
        self.opts = opts;
        self.redraw();
        true
    }

    /// Clear the surface and draw the current props.
    pub fn redraw(&mut self) {
        let opts = &self.opts;
        self.surface.clear(opts.theme.background);
        self.state = match render_chart(&mut self.surface, &self.props.data, self.props.kind, opts) {
            Ok(()) => RenderState::Drawn,
            Err(e) => {
                log::debug!("{} chart not drawn: {e}", self.props.kind);
                self.surface.clear(opts.theme.background);
                let center = Point::new(self.surface.width() as f32 * 0.5, self.surface.height() as f32 * 0.5);
                self.surface.fill_text(NO_DATA, center, opts.label_size, TextAlign::Center, opts.theme.muted_text);
                RenderState::NoData(e)
            }
        };
        if opts.draw_labels {
            if let Some(title) = self.props.title.as_deref() {
                let at = Point::new(self.surface.width() as f32 * 0.5, opts.title_size + 8.0);
                self.surface.fill_text(title, at, opts.title_size, TextAlign::Center, opts.theme.text);
            }
        }
        self.frames += 1;
    }
}

/// Format a value the way it is printed on charts: integers without a decimal point,
/// everything else in shortest round-trip form.
pub fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
