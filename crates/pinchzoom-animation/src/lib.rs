//! Frame-driven tween animations used to settle a zoomed transform.

mod animatable;
mod easing;

pub use animatable::{Animatable, AnimationSpec, Lerp, DEFAULT_SETTLE_MILLIS};
pub use easing::{CubicBezier, Easing};
