//! Assertion utilities for robot testing
//!
//! Helpers for validating transform state in robot tests.

use pinchzoom_engine::geometry::translation_bounds;
use pinchzoom_engine::{NotificationKind, PinchToZoomEngine, TransformState, ZoomNotification};
use pinchzoom_ui_graphics::{Point, Size};

/// Assert that a value is within `tolerance` of the expected value.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that a transform is approximately equal to another.
pub fn assert_transform_approx_eq(
    actual: TransformState,
    expected: TransformState,
    tolerance: f32,
    msg: &str,
) {
    assert_approx_eq(
        actual.scale,
        expected.scale,
        tolerance,
        &format!("{} - scale", msg),
    );
    assert_point_approx_eq(
        actual.translation(),
        expected.translation(),
        tolerance,
        &format!("{} - translation", msg),
    );
}

/// Assert that the translation keeps zoomed content covering the viewport.
pub fn assert_translation_within_bounds(
    transform: TransformState,
    viewport: Size,
    minimum_zoom_scale: f32,
    msg: &str,
) {
    if transform.scale <= minimum_zoom_scale {
        return;
    }
    let bounds = translation_bounds(viewport, transform.scale, minimum_zoom_scale);
    let tolerance = 1e-3;
    assert!(
        transform.translation_x.abs() <= bounds.x + tolerance
            && transform.translation_y.abs() <= bounds.y + tolerance,
        "{}: translation ({}, {}) exceeds bounds ±({}, {}) at scale {}",
        msg,
        transform.translation_x,
        transform.translation_y,
        bounds.x,
        bounds.y,
        transform.scale
    );
}

/// Assert that no gesture or animation is running and the scale rests
/// inside the configured range.
pub fn assert_settled(engine: &PinchToZoomEngine, msg: &str) {
    assert!(!engine.is_animating(), "{}: settle animation still running", msg);
    assert!(!engine.is_gesture_active(), "{}: gesture still active", msg);
    let config = engine.config();
    let scale = engine.transform().scale;
    assert!(
        scale >= config.minimum_zoom_scale && scale <= config.maximum_zoom_scale,
        "{}: scale {} rests outside [{}, {}]",
        msg,
        scale,
        config.minimum_zoom_scale,
        config.maximum_zoom_scale
    );
}

/// Assert how many notifications of `kind` were recorded.
pub fn assert_notified(
    notifications: &[ZoomNotification],
    kind: NotificationKind,
    expected: usize,
    msg: &str,
) {
    let actual = notifications.iter().filter(|n| n.kind() == kind).count();
    assert_eq!(
        actual, expected,
        "{}: expected {} {:?} notifications, got {} in {:?}",
        msg, expected, kind, actual, notifications
    );
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}
