use approx::assert_relative_eq;

use exifpro_core::compare::{Point, Rect, RenderSize, TransformState};
use exifpro_core::consts::{MAX_SCALE, MIN_SCALE};

fn origin() -> Point {
    Point::new(0.0, 0.0)
}

#[test]
fn test_wheel_up_zooms_in() {
    let t = TransformState::IDENTITY.zoomed_at(origin(), -500.0);
    assert_relative_eq!(t.scale, 1.5, epsilon = 1e-4);
    assert_eq!(t.zoom_percent(), 150);
}

#[test]
fn test_scale_stays_in_bounds() {
    let deltas = [-3000.0, -9000.0, 250.0, 12000.0, -1.0, -7.5, 40000.0, -40000.0, 3.0];
    let mut t = TransformState::IDENTITY;
    for (i, d) in deltas.iter().cycle().take(60).enumerate() {
        let anchor = Point::new((i as f32 * 37.0) % 300.0 - 150.0, (i as f32 * 11.0) % 200.0 - 100.0);
        t = t.zoomed_at(anchor, *d);
        assert!(t.scale >= MIN_SCALE && t.scale <= MAX_SCALE, "scale {}", t.scale);
    }
}

#[test]
fn test_zoom_clamps_at_max() {
    let t = TransformState::IDENTITY.zoomed_at(origin(), -100_000.0);
    assert_relative_eq!(t.scale, MAX_SCALE, epsilon = 1e-4);
}

#[test]
fn test_non_finite_wheel_input_is_ignored() {
    let zoomed = TransformState::IDENTITY.zoomed_at(Point::new(30.0, -20.0), -400.0);
    for delta in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        assert_eq!(TransformState::IDENTITY.zoomed_at(origin(), delta), TransformState::IDENTITY);
        assert_eq!(zoomed.zoomed_at(origin(), delta), zoomed);
    }
    assert_eq!(zoomed.zoomed_at(Point::new(f32::NAN, 0.0), -100.0), zoomed);
}

#[test]
fn test_zoom_out_at_one_snaps_to_identity() {
    let panned = TransformState::IDENTITY.panned_by(40.0, -25.0);
    let t = panned.zoomed_at(Point::new(10.0, 10.0), 300.0);
    assert!(t.is_identity());
}

#[test]
fn test_zoom_in_out_round_trip_from_identity() {
    let anchor = Point::new(120.0, -80.0);
    let t = TransformState::IDENTITY
        .zoomed_at(anchor, -700.0)
        .zoomed_at(anchor, 700.0);
    assert!(t.is_identity());
}

#[test]
fn test_zoom_in_out_round_trip_restores_translation() {
    let start = TransformState {
        scale: 2.0,
        translate_x: 30.0,
        translate_y: -12.0,
    };
    let anchor = Point::new(-64.0, 90.0);
    let t = start.zoomed_at(anchor, -500.0).zoomed_at(anchor, 500.0);
    assert_relative_eq!(t.scale, start.scale, epsilon = 1e-5);
    assert_relative_eq!(t.translate_x, start.translate_x, epsilon = 1e-3);
    assert_relative_eq!(t.translate_y, start.translate_y, epsilon = 1e-3);
}

#[test]
fn test_zoom_keeps_anchor_fixed() {
    // Content point under the anchor: (anchor - t) / scale must not move.
    let start = TransformState {
        scale: 1.5,
        translate_x: 20.0,
        translate_y: 10.0,
    };
    let anchor = Point::new(100.0, -50.0);
    let content = |t: TransformState| {
        (
            (anchor.x - t.translate_x) / t.scale,
            (anchor.y - t.translate_y) / t.scale,
        )
    };
    let next = start.zoomed_at(anchor, -1000.0);
    let (bx, by) = content(start);
    let (ax, ay) = content(next);
    assert_relative_eq!(bx, ax, epsilon = 1e-3);
    assert_relative_eq!(by, ay, epsilon = 1e-3);
}

#[test]
fn test_scale_one_means_no_translation_after_zoom() {
    let mut t = TransformState::IDENTITY.zoomed_at(Point::new(200.0, 100.0), -2000.0);
    t = t.panned_by(55.0, 12.0);
    t = t.zoomed_at(Point::new(-30.0, 40.0), 100_000.0);
    assert_relative_eq!(t.scale, 1.0, epsilon = 1e-4);
    assert_eq!(t.translate_x, 0.0);
    assert_eq!(t.translate_y, 0.0);
}

#[test]
fn test_pan_accumulates() {
    let t = TransformState::IDENTITY.panned_by(3.0, 4.0).panned_by(-1.0, 2.0);
    assert_relative_eq!(t.translate_x, 2.0, epsilon = 1e-4);
    assert_relative_eq!(t.translate_y, 6.0, epsilon = 1e-4);
}

#[test]
fn test_layer_rect_centred_and_scaled() {
    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let fit = RenderSize {
        width: 800.0,
        height: 400.0,
        scale: 0.5,
    };
    let t = TransformState {
        scale: 2.0,
        translate_x: 10.0,
        translate_y: -20.0,
    };
    let r = t.layer_rect(viewport, Some(fit));
    assert_relative_eq!(r.width, 1600.0, epsilon = 1e-4);
    assert_relative_eq!(r.height, 800.0, epsilon = 1e-4);
    assert_relative_eq!(r.center().x, 410.0, epsilon = 1e-4);
    assert_relative_eq!(r.center().y, 280.0, epsilon = 1e-4);
}

#[test]
fn test_layer_rect_without_fit_fills_viewport() {
    let viewport = Rect::new(10.0, 20.0, 300.0, 200.0);
    let r = TransformState::IDENTITY.layer_rect(viewport, None);
    assert_eq!(r, viewport);
}
