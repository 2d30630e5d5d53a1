//! Clamp and threshold math. Pure functions of the viewport and transform.

use pinchzoom_ui_graphics::{Point, Size};

use crate::transform::TransformState;

/// Fraction of a viewport extent a pan must exceed to count as a dismiss.
pub const DISMISS_FRACTION: f32 = 0.5;

/// Largest translation along one axis that keeps content scaled to `scale`
/// covering an extent of `extent` pixels. Zero for degenerate extents and at
/// or below the minimum scale.
pub fn translation_bound(extent: f32, scale: f32, minimum_zoom_scale: f32) -> f32 {
    if !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    let bound = extent * (scale - minimum_zoom_scale) / 2.0;
    if bound.is_finite() {
        bound.max(0.0)
    } else {
        0.0
    }
}

pub fn translation_bounds(viewport: Size, scale: f32, minimum_zoom_scale: f32) -> Point {
    Point::new(
        translation_bound(viewport.width, scale, minimum_zoom_scale),
        translation_bound(viewport.height, scale, minimum_zoom_scale),
    )
}

pub fn clamp_translation(value: f32, extent: f32, scale: f32, minimum_zoom_scale: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    let bound = translation_bound(extent, scale, minimum_zoom_scale);
    value.clamp(-bound, bound)
}

/// Clamp both translation axes for the state's own scale.
pub fn clamp_transform(
    state: TransformState,
    viewport: Size,
    minimum_zoom_scale: f32,
) -> TransformState {
    TransformState {
        scale: state.scale,
        translation_x: clamp_translation(
            state.translation_x,
            viewport.width,
            state.scale,
            minimum_zoom_scale,
        ),
        translation_y: clamp_translation(
            state.translation_y,
            viewport.height,
            state.scale,
            minimum_zoom_scale,
        ),
    }
}

/// True when the translation is past half the viewport on either axis.
/// Never true for a degenerate viewport.
pub fn exceeds_dismiss_threshold(state: TransformState, viewport: Size) -> bool {
    if viewport.is_degenerate() {
        return false;
    }
    state.translation_x.abs() > viewport.width * DISMISS_FRACTION
        || state.translation_y.abs() > viewport.height * DISMISS_FRACTION
}

/// Translation that keeps a pinch anchored at `origin` while scaling from
/// `offset_scale` to `scale`.
pub fn focal_translation(
    base: Point,
    scale: f32,
    offset_scale: f32,
    origin: Point,
    center: Point,
) -> Point {
    base - (origin - center) * (scale - offset_scale)
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
