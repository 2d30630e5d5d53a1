//! Pointer input plumbing and the pinch / pan / double-tap recognizers that
//! turn raw touches into typed gesture events.

pub mod gesture_constants;
pub mod gestures;
pub mod input;

pub use gestures::{
    ActivePointers, DoubleTapRecognizer, GestureEvent, GestureEvents, GestureKind, PanRecognizer,
    PanUpdate, PinchRecognizer, PinchUpdate, ZoomGestureDetector,
};
pub use input::{PointerEvent, PointerEventKind, PointerId, PointerQueue};

pub mod prelude {
    pub use crate::gestures::{GestureEvent, GestureKind, PanUpdate, PinchUpdate, ZoomGestureDetector};
    pub use crate::input::{PointerEvent, PointerEventKind, PointerId};
}
