#![doc = r"Runtime pieces shared by the pinch-to-zoom crates: frame callbacks, clocks and main-thread dispatch."]

pub mod dispatcher;
pub mod frame_clock;
pub mod platform;
pub mod runtime;

pub use dispatcher::{ui_channel, UiDispatcher, UiQueue};
pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler, SystemClock};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;

/// Nanoseconds in a single ~60 Hz frame.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;
