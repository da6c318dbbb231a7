use approx::assert_relative_eq;

use exifpro_core::compare::{compute_fit, fit_contain, ImageDims, ViewportSize};

const VIEWPORT: ViewportSize = ViewportSize::new(800.0, 600.0);

#[test]
fn test_fit_large_same_aspect_fills_viewport() {
    let fit = fit_contain(VIEWPORT, Some(ImageDims::new(4000, 3000))).unwrap();
    assert_relative_eq!(fit.width, 800.0, epsilon = 1e-3);
    assert_relative_eq!(fit.height, 600.0, epsilon = 1e-3);
    assert_relative_eq!(fit.scale, 0.2, epsilon = 1e-6);
}

#[test]
fn test_fit_upscales_small_image() {
    let fit = fit_contain(VIEWPORT, Some(ImageDims::new(1200, 900))).unwrap();
    assert_relative_eq!(fit.width, 800.0, epsilon = 1e-3);
    assert_relative_eq!(fit.height, 600.0, epsilon = 1e-3);
    assert_relative_eq!(fit.scale, 2.0 / 3.0, epsilon = 1e-6);
}

#[test]
fn test_fit_wide_image_letterboxed() {
    let fit = fit_contain(VIEWPORT, Some(ImageDims::new(1200, 600))).unwrap();
    assert_relative_eq!(fit.width, 800.0, epsilon = 1e-3);
    assert_relative_eq!(fit.height, 400.0, epsilon = 1e-3);
}

#[test]
fn test_fit_is_tight_on_one_side() {
    let cases = [(640, 480), (333, 1000), (4096, 17), (1, 1), (801, 600)];
    for (w, h) in cases {
        let fit = fit_contain(VIEWPORT, Some(ImageDims::new(w, h))).unwrap();
        assert!(fit.width <= 800.0 + 1e-3 && fit.height <= 600.0 + 1e-3);
        let touches_w = (fit.width - 800.0).abs() < 1e-2;
        let touches_h = (fit.height - 600.0).abs() < 1e-2;
        assert!(touches_w || touches_h, "{w}x{h} -> {fit:?}");
        assert_relative_eq!(fit.width / fit.height, w as f32 / h as f32, max_relative = 1e-4);
    }
}

#[test]
fn test_before_and_after_fitted_independently() {
    let fit = compute_fit(
        VIEWPORT,
        Some(ImageDims::new(4000, 3000)),
        Some(ImageDims::new(1200, 900)),
    );
    let before = fit.before.unwrap();
    let after = fit.after.unwrap();
    assert_relative_eq!(before.width, after.width, epsilon = 1e-3);
    assert_relative_eq!(before.height, after.height, epsilon = 1e-3);
    assert!(before.scale < after.scale);
}

#[test]
fn test_no_geometry_until_measured() {
    let dims = Some(ImageDims::new(4000, 3000));
    assert!(fit_contain(ViewportSize::new(0.0, 600.0), dims).is_none());
    assert!(fit_contain(ViewportSize::new(800.0, 0.0), dims).is_none());
    assert!(fit_contain(VIEWPORT, None).is_none());
    assert!(fit_contain(VIEWPORT, Some(ImageDims::new(0, 100))).is_none());
}

#[test]
fn test_one_side_missing() {
    let fit = compute_fit(VIEWPORT, None, Some(ImageDims::new(1200, 600)));
    assert!(fit.before.is_none());
    assert!(fit.after.is_some());
}
