// File: crates/chartkit-core/tests/surface.rs
// Purpose: Draw command recording and the pixel geometry helpers behind it.

use std::f64::consts::FRAC_PI_2;

use chartkit_core::geometry::{polar, Point, RectF};
use chartkit_core::types::Insets;
use chartkit_core::{DrawCommand, Rgba, Surface};

#[test]
fn clear_starts_a_new_frame() {
    let mut s = Surface::new(10, 10);
    s.fill_circle(Point::new(1.0, 1.0), 1.0, Rgba::rgb(0, 0, 0));
    s.clear(Rgba::rgb(255, 255, 255));
    assert_eq!(s.commands(), &[DrawCommand::Clear(Rgba::rgb(255, 255, 255))]);
    assert!(s.is_blank());
}

#[test]
fn nan_commands_are_flagged() {
    let bad = DrawCommand::StrokePolyline {
        points: vec![Point::new(0.0, f32::NAN), Point::new(1.0, 1.0)],
        width: 1.0,
        color: Rgba::rgb(0, 0, 0),
    };
    assert!(!bad.is_finite());
    let ok = DrawCommand::FillRect { rect: RectF::from_ltwh(0.0, 0.0, 2.0, 2.0), color: Rgba::rgb(0, 0, 0) };
    assert!(ok.is_finite());
}

#[test]
fn resize_keeps_the_same_surface() {
    let mut s = Surface::new(10, 10);
    s.clear(Rgba::rgb(0, 0, 0));
    s.resize(20, 5);
    assert_eq!((s.width(), s.height()), (20, 5));
    assert!(s.commands().is_empty());
}

#[test]
fn inset_rect_removes_margins() {
    let r = RectF::inset(400, 300, &Insets::uniform(40));
    assert_eq!(r, RectF::from_ltrb(40.0, 40.0, 360.0, 260.0));
    assert_eq!(r.width(), 320.0);
    assert_eq!(r.center(), Point::new(200.0, 150.0));
}

#[test]
fn polar_is_clockwise_in_screen_space() {
    let quarter = polar(Point::new(0.0, 0.0), 10.0, FRAC_PI_2);
    assert!(quarter.x.abs() < 1e-4);
    assert!((quarter.y - 10.0).abs() < 1e-4, "90 degrees should point down");
}
