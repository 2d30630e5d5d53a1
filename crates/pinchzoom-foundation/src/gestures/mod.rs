pub mod detector;
pub mod event;
pub mod pan;
pub mod pinch;
pub mod pointers;
pub mod tap;

pub use detector::ZoomGestureDetector;
pub use event::{GestureEvent, GestureEvents, GestureKind, PanUpdate, PinchUpdate};
pub use pan::PanRecognizer;
pub use pinch::PinchRecognizer;
pub use pointers::ActivePointers;
pub use tap::DoubleTapRecognizer;
