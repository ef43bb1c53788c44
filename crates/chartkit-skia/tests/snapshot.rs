// File: crates/chartkit-skia/tests/snapshot.rs
// Purpose: Golden snapshots for every chart kind and the auxiliary widgets, with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for an exact match.
// - Else, renders a second time and requires identical pixels, so determinism is still
//   checked before the first bless.

use chartkit_core::{
    draw_heatmap, draw_progress_ring, draw_sparkline, ChartCanvas, ChartDatum, ChartKind, ChartProps, HeatmapDatum,
    HeatmapOptions, ProgressRingOptions, RenderOptions, SparklineOptions, Surface, Theme,
};
use chartkit_skia::SkiaRenderer;
use chrono::{Duration, NaiveDate};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn pixels(bytes: &[u8]) -> Vec<u8> {
    image::load_from_memory(bytes).expect("decode png").to_rgba8().into_raw()
}

fn write_or_compare(name: &str, render: impl Fn() -> Vec<u8>) {
    let rendered = render();
    let bytes = rendered.as_slice();
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        assert_eq!(pixels(bytes), pixels(&want), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
        let got = pixels(bytes);
        assert_eq!(got, pixels(&render()), "{name}: two renders of the same surface differ");
        let first = &got[..4];
        assert!(got.chunks_exact(4).any(|px| px != first), "{name}: rendered a single flat color");
    }
}

fn png(surface: &Surface) -> Vec<u8> {
    let bytes = SkiaRenderer::new().render_to_png_bytes(surface).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    bytes
}

#[test]
fn golden_chart_kinds() {
    let data = vec![
        ChartDatum::new("Mon", 12.0),
        ChartDatum::new("Tue", 19.0),
        ChartDatum::new("Wed", 3.0),
        ChartDatum::new("Thu", 5.0),
        ChartDatum::new("Fri", 2.0).with_color("#111827"),
    ];
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // deterministic
    for kind in ChartKind::ALL {
        let canvas = ChartCanvas::new(ChartProps::new(data.clone(), kind), opts);
        write_or_compare(&format!("{kind}.png"), || png(canvas.surface()));
    }
}

#[test]
fn golden_widgets() {
    let theme = Theme::light();

    let mut ring = Surface::new(120, 120);
    ring.clear(theme.background);
    let ring_opts = ProgressRingOptions { show_label: false, ..ProgressRingOptions::default() };
    draw_progress_ring(&mut ring, 65.0, &ring_opts, &theme);
    write_or_compare("progress_ring.png", || png(&ring));

    let mut spark = Surface::new(100, 30);
    spark.clear(theme.background);
    draw_sparkline(&mut spark, &[4.0, 8.0, 6.0, 12.0, 9.0, 14.0], &SparklineOptions::default());
    write_or_compare("sparkline.png", || png(&spark));

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let days: Vec<_> = (0..90).map(|i| HeatmapDatum::new(start + Duration::days(i), (i % 7) as f64)).collect();
    let opts = HeatmapOptions { keying: chartkit_core::WeekKeying::MonthWeek, ..HeatmapOptions::default() };
    let cells = chartkit_core::heatmap_layout(&days, &opts).len();
    let (w, h) = opts.surface_size(cells);
    let mut heat = Surface::new(w, h);
    heat.clear(theme.background);
    draw_heatmap(&mut heat, &days, &opts, &theme);
    write_or_compare("heatmap.png", || png(&heat));
}

#[test]
fn png_file_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/bar.png");
    let canvas = ChartCanvas::new(
        ChartProps::new(vec![ChartDatum::new("x", 1.0)], ChartKind::Bar).with_title("One"),
        RenderOptions::default(),
    );
    SkiaRenderer::new().render_to_png(canvas.surface(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
