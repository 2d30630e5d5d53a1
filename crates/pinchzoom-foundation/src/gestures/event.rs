//! Typed gesture events consumed by the zoom engine.

use pinchzoom_ui_graphics::Point;
use smallvec::SmallVec;

/// Pinch progress since the pinch started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    pub number_of_pointers: usize,
    /// Span ratio relative to the span when the pinch activated.
    pub scale: f32,
    /// Midpoint between the fingers, in container coordinates.
    pub focal: Point,
}

/// Pan progress, cumulative since the pan started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanUpdate {
    pub translation: Point,
    pub number_of_pointers: usize,
}

impl PanUpdate {
    pub fn new(translation_x: f32, translation_y: f32) -> Self {
        Self {
            translation: Point::new(translation_x, translation_y),
            number_of_pointers: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Pinch,
    Pan,
    DoubleTap,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    PinchStart,
    PinchUpdate(PinchUpdate),
    PinchEnd,
    PanStart,
    PanUpdate(PanUpdate),
    PanEnd,
    DoubleTap(Point),
}

impl GestureEvent {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureEvent::PinchStart | GestureEvent::PinchUpdate(_) | GestureEvent::PinchEnd => {
                GestureKind::Pinch
            }
            GestureEvent::PanStart | GestureEvent::PanUpdate(_) | GestureEvent::PanEnd => {
                GestureKind::Pan
            }
            GestureEvent::DoubleTap(_) => GestureKind::DoubleTap,
        }
    }
}

/// Events produced by a single pointer sample. Rarely more than two.
pub type GestureEvents = SmallVec<[GestureEvent; 4]>;
