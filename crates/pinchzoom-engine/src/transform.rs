use pinchzoom_animation::Lerp;
use pinchzoom_ui_graphics::Point;

/// Live visual transform of the zoomed content.
///
/// Translation is the offset of the content center from the viewport
/// center, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub scale: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl TransformState {
    pub const fn new(scale: f32, translation_x: f32, translation_y: f32) -> Self {
        Self {
            scale,
            translation_x,
            translation_y,
        }
    }

    /// Un-zoomed, centered content.
    pub const fn identity(minimum_zoom_scale: f32) -> Self {
        Self::new(minimum_zoom_scale, 0.0, 0.0)
    }

    pub fn translation(&self) -> Point {
        Point::new(self.translation_x, self.translation_y)
    }

    pub fn with_translation(mut self, translation: Point) -> Self {
        self.translation_x = translation.x;
        self.translation_y = translation.y;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::identity(1.0)
    }
}

impl Lerp for TransformState {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            scale: self.scale.lerp(&target.scale, fraction),
            translation_x: self.translation_x.lerp(&target.translation_x, fraction),
            translation_y: self.translation_y.lerp(&target.translation_y, fraction),
        }
    }
}

/// Snapshot reported to status listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomStatus {
    pub scale: f32,
    pub translation: Point,
}

impl From<TransformState> for ZoomStatus {
    fn from(state: TransformState) -> Self {
        Self {
            scale: state.scale,
            translation: state.translation(),
        }
    }
}
