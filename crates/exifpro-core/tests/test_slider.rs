use approx::assert_relative_eq;

use exifpro_core::compare::{Point, Rect, SlideAxis, SliderState};

fn viewport() -> Rect {
    Rect::new(100.0, 50.0, 800.0, 600.0)
}

#[test]
fn test_default_is_centred() {
    let s = SliderState::default();
    assert_relative_eq!(s.percent(), 50.0);
    assert_relative_eq!(s.divider_position(viewport(), SlideAxis::Horizontal), 500.0);
}

#[test]
fn test_pointer_maps_to_percent() {
    let s = SliderState::default().from_pointer(
        Point::new(300.0, 10.0),
        viewport(),
        SlideAxis::Horizontal,
    );
    assert_relative_eq!(s.percent(), 25.0);
}

#[test]
fn test_pointer_outside_clamps() {
    let vp = viewport();
    let left = SliderState::default().from_pointer(Point::new(-400.0, 0.0), vp, SlideAxis::Horizontal);
    let right = SliderState::default().from_pointer(Point::new(5000.0, 0.0), vp, SlideAxis::Horizontal);
    assert_relative_eq!(left.percent(), 0.0);
    assert_relative_eq!(right.percent(), 100.0);

    let above = SliderState::default().from_pointer(Point::new(0.0, -10.0), vp, SlideAxis::Vertical);
    let below = SliderState::default().from_pointer(Point::new(0.0, 9999.0), vp, SlideAxis::Vertical);
    assert_relative_eq!(above.percent(), 0.0);
    assert_relative_eq!(below.percent(), 100.0);
}

#[test]
fn test_pointer_positions_always_in_range() {
    let vp = viewport();
    let mut s = SliderState::default();
    for i in -50..150 {
        let p = Point::new(i as f32 * 9.3, i as f32 * 7.1);
        for axis in [SlideAxis::Horizontal, SlideAxis::Vertical] {
            s = s.from_pointer(p, vp, axis);
            assert!((0.0..=100.0).contains(&s.percent()));
        }
    }
}

#[test]
fn test_zero_size_viewport_keeps_position() {
    let s = SliderState::new(30.0).from_pointer(
        Point::new(10.0, 10.0),
        Rect::new(0.0, 0.0, 0.0, 0.0),
        SlideAxis::Horizontal,
    );
    assert_relative_eq!(s.percent(), 30.0);
}

#[test]
fn test_vertical_axis_uses_y() {
    let s = SliderState::default().from_pointer(Point::new(890.0, 200.0), viewport(), SlideAxis::Vertical);
    assert_relative_eq!(s.percent(), 25.0);
    let clip = s.clip_rect(viewport(), SlideAxis::Vertical);
    assert_relative_eq!(clip.height, 150.0);
    assert_relative_eq!(clip.width, 800.0);
}

#[test]
fn test_clip_rect_tracks_percent() {
    let s = SliderState::new(75.0);
    let clip = s.clip_rect(viewport(), SlideAxis::Horizontal);
    assert_relative_eq!(clip.left, 100.0);
    assert_relative_eq!(clip.width, 600.0);
    assert_relative_eq!(clip.height, 600.0);
}

#[test]
fn test_hit_test_divider_and_handle() {
    let vp = viewport();
    let s = SliderState::default();
    // On the divider line, away from the handle.
    assert!(s.hit_test(Point::new(503.0, 60.0), vp, SlideAxis::Horizontal));
    // Inside the handle, beyond the line slop.
    assert!(s.hit_test(Point::new(514.0, 350.0), vp, SlideAxis::Horizontal));
    // Plain content.
    assert!(!s.hit_test(Point::new(200.0, 350.0), vp, SlideAxis::Horizontal));
    // Outside the viewport even if aligned with the divider.
    assert!(!s.hit_test(Point::new(500.0, 700.0), vp, SlideAxis::Horizontal));
}

#[test]
fn test_axis_labels() {
    assert_eq!(SlideAxis::Horizontal.to_string(), "Left / Right");
    assert_eq!(SlideAxis::Vertical.to_string(), "Top / Bottom");
}
