// File: crates/chartkit-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, a few pixels, and determinism.

use chartkit_core::geometry::Point;
use chartkit_core::{ChartCanvas, ChartDatum, ChartKind, ChartProps, RenderOptions, Rgba, Surface, PALETTE};
use chartkit_skia::SkiaRenderer;

fn no_labels() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let props = ChartProps::new(vec![ChartDatum::new("a", 2.0), ChartDatum::new("b", 4.0)], ChartKind::Bar);
    let canvas = ChartCanvas::new(props, no_labels());
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(canvas.surface()).expect("rgba render");
    assert_eq!((w, h), (400, 300));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background is opaque white in the light theme
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);

    // Second bar spans the full plot height: x 200..350, y 40..260
    let c = PALETTE[1];
    assert_eq!(pixel(&px, stride, 275, 150), [c.r, c.g, c.b, 255]);
    // First bar is half height, so its upper half stays background
    assert_eq!(pixel(&px, stride, 110, 100), [255, 255, 255, 255]);
}

#[test]
fn identical_frames_rasterize_identically() {
    let renderer = SkiaRenderer::new();
    let data = vec![
        ChartDatum::new("Web", 55.0),
        ChartDatum::new("App", 30.0),
        ChartDatum::new("Other", 15.0).with_color("#222222"),
    ];
    for kind in ChartKind::ALL {
        let canvas = ChartCanvas::new(ChartProps::new(data.clone(), kind), no_labels());
        let a = renderer.render_to_rgba8(canvas.surface()).expect("first render");
        let b = renderer.render_to_rgba8(canvas.surface()).expect("second render");
        assert_eq!(a.0, b.0, "{kind} pixels differ between renders");
    }
}

#[test]
fn non_finite_commands_are_not_painted() {
    let mut surface = Surface::new(20, 20);
    surface.clear(Rgba::rgb(0, 0, 0));
    surface.fill_circle(Point::new(f32::NAN, 10.0), 8.0, Rgba::rgb(255, 0, 0));
    surface.stroke_polyline(vec![Point::new(0.0, 0.0), Point::new(f32::INFINITY, 5.0)], 4.0, Rgba::rgb(255, 0, 0));
    let (px, _, _, _) = SkiaRenderer::new().render_to_rgba8(&surface).expect("render");
    assert!(px.chunks(4).all(|p| p == [0, 0, 0, 255]));
}

#[test]
fn doughnut_leaves_center_empty() {
    let props = ChartProps::new(vec![ChartDatum::new("only", 1.0)], ChartKind::Doughnut);
    let canvas = ChartCanvas::new(props, no_labels());
    let (px, _, _, stride) = SkiaRenderer::new().render_to_rgba8(canvas.surface()).expect("render");
    // center stays background; the ring (r 66..110) is filled
    assert_eq!(pixel(&px, stride, 200, 150), [255, 255, 255, 255]);
    let c = PALETTE[0];
    assert_eq!(pixel(&px, stride, 200 + 88, 150), [c.r, c.g, c.b, 255]);
}
