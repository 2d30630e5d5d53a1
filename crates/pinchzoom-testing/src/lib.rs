//! Testing utilities and harness for the pinch-to-zoom engine

pub mod robot;
pub mod robot_assertions;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use pinchzoom_engine::prelude::*;
    pub use pinchzoom_engine::NotificationKind;
}
