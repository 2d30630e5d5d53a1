//! Per-gesture bookkeeping.

use pinchzoom_ui_graphics::Point;

/// Snapshot taken on the first pinch update of a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchAnchor {
    /// Focal point the pinch is anchored to, in viewport coordinates.
    pub origin: Point,
    /// Scale at the moment the anchor was taken.
    pub offset_scale: f32,
    pub base_translation: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    /// Settled scale the pinch factor multiplies.
    pub base_scale: f32,
    pub anchor: Option<PinchAnchor>,
}

impl PinchSession {
    pub fn new(base_scale: f32) -> Self {
        Self {
            base_scale,
            anchor: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSession {
    pub base_translation: Point,
}

/// Active pinch and pan sessions. Both can be live at once.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSession {
    pub pinch: Option<PinchSession>,
    pub pan: Option<PanSession>,
}

impl GestureSession {
    pub fn is_active(&self) -> bool {
        self.pinch.is_some() || self.pan.is_some()
    }

    pub fn clear(&mut self) {
        self.pinch = None;
        self.pan = None;
    }
}
