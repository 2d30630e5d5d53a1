//! Pinch-to-zoom transform engine
//!
//! Turns pinch, pan and double-tap gestures into a bounded transform
//! (scale plus translation) for content laid out in a viewport, settles
//! out-of-bounds transforms with eased animations and reports dismiss
//! gestures. [`GestureDriver`] runs the engine on a dedicated gesture thread
//! and hands notifications back to the main thread.

pub mod backdrop;
pub mod callbacks;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod notification;
pub mod session;
pub mod transform;

pub use backdrop::{backdrop_opacity, MAX_BACKDROP_FADE};
pub use callbacks::{ListenerId, ZoomCallbacks};
pub use config::{ConfigError, ZoomConfig};
pub use driver::{DriverCommand, GestureDriver};
pub use engine::PinchToZoomEngine;
pub use error::ZoomError;
pub use notification::{ImpactStyle, NotificationKind, ZoomNotification};
pub use transform::{TransformState, ZoomStatus};

pub use pinchzoom_foundation::{GestureEvent, PanUpdate, PinchUpdate};
pub use pinchzoom_ui_graphics::{Point, Size};

pub mod prelude {
    pub use crate::callbacks::ZoomCallbacks;
    pub use crate::config::ZoomConfig;
    pub use crate::driver::GestureDriver;
    pub use crate::engine::PinchToZoomEngine;
    pub use crate::notification::ZoomNotification;
    pub use crate::transform::{TransformState, ZoomStatus};
    pub use pinchzoom_foundation::prelude::*;
    pub use pinchzoom_ui_graphics::prelude::*;
}
