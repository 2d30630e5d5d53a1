use crate::transform::ZoomStatus;

/// Opacity removed from the backdrop at full vertical drag.
pub const MAX_BACKDROP_FADE: f32 = 0.8;

/// Backdrop opacity for a full-screen viewer.
///
/// While un-zoomed, dragging vertically fades the backdrop, reaching
/// `1 - MAX_BACKDROP_FADE` at half the window height. Zoomed content keeps
/// it opaque.
pub fn backdrop_opacity(status: &ZoomStatus, window_height: f32, minimum_zoom_scale: f32) -> f32 {
    if status.scale > minimum_zoom_scale {
        return 1.0;
    }
    let half = window_height / 2.0;
    if !half.is_finite() || half <= 0.0 {
        return 1.0;
    }
    let progress = (status.translation.y.abs() / half).min(1.0);
    if progress.is_nan() {
        return 1.0;
    }
    1.0 - MAX_BACKDROP_FADE * progress
}
