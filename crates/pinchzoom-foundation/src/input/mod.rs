pub mod queue;
pub mod types;

pub use queue::PointerQueue;
pub use types::{PointerEvent, PointerEventKind, PointerId};
