// File: crates/chartkit-examples/src/bin/bars.rs
// Summary: Minimal example that renders a simple bar chart to PNG.

use anyhow::Result;
use chartkit_core::{ChartCanvas, ChartDatum, ChartKind, ChartProps, RenderOptions};
use chartkit_skia::SkiaRenderer;

fn main() -> Result<()> {
    let data = vec![
        ChartDatum::new("Red", 12.0),
        ChartDatum::new("Blue", 19.0),
        ChartDatum::new("Yellow", 3.0).with_color("#eab308"),
        ChartDatum::new("Green", 5.0),
    ];

    let props = ChartProps::new(data, ChartKind::Bar).with_title("Votes");
    let canvas = ChartCanvas::new(props, RenderOptions::default());

    let out = std::path::PathBuf::from("target/out/example_bars.png");
    SkiaRenderer::new().render_to_png(canvas.surface(), &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
