//! Animated values driven by the runtime frame clock.

use std::cell::RefCell;
use std::rc::Rc;

use pinchzoom_core::{FrameCallbackRegistration, RuntimeHandle};

use crate::easing::Easing;

/// Length of a settle transition.
pub const DEFAULT_SETTLE_MILLIS: u64 = 300;

/// Types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * f64::from(fraction)
    }
}

/// Duration, curve and start delay of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Eased progress `elapsed_nanos` after the run started, or `None` while
    /// the delay is still pending.
    fn progress(&self, elapsed_nanos: u64) -> Option<f32> {
        let delay = self.delay_millis.saturating_mul(1_000_000);
        let active = elapsed_nanos.checked_sub(delay)?;
        let duration = self.duration_millis.saturating_mul(1_000_000).max(1);
        Some((active as f64 / duration as f64).min(1.0) as f32)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(DEFAULT_SETTLE_MILLIS, Easing::EaseInOutQuad)
    }
}

/// One run from `from` to `to`.
struct Tween<T> {
    from: T,
    to: T,
    spec: AnimationSpec,
    /// Frame time of the first frame; pinned lazily.
    started_at: Option<u64>,
}

impl<T: Lerp + Clone> Tween<T> {
    /// Value at `frame_time_nanos` and whether the run is complete.
    fn sample(&mut self, frame_time_nanos: u64) -> (T, bool) {
        let started_at = *self.started_at.get_or_insert(frame_time_nanos);
        match self
            .spec
            .progress(frame_time_nanos.saturating_sub(started_at))
        {
            None => (self.from.clone(), false),
            Some(linear) if linear >= 1.0 => (self.to.clone(), true),
            Some(linear) => {
                let eased = self.spec.easing.transform(linear);
                (self.from.lerp(&self.to, eased), false)
            }
        }
    }
}

struct AnimatableState<T> {
    runtime: RuntimeHandle,
    value: T,
    tween: Option<Tween<T>>,
    frame: Option<FrameCallbackRegistration>,
}

impl<T> AnimatableState<T> {
    /// Drops the pending frame so a superseded run can never write again.
    fn cancel_frame(&mut self) {
        if let Some(frame) = self.frame.take() {
            frame.cancel();
        }
    }
}

/// Value that tweens towards a target one frame at a time.
///
/// At most one frame callback is pending. Starting a new run, snapping or
/// stopping cancels it.
pub struct Animatable<T: Lerp + Clone + 'static> {
    state: Rc<RefCell<AnimatableState<T>>>,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        Self {
            state: Rc::new(RefCell::new(AnimatableState {
                runtime,
                value: initial,
                tween: None,
                frame: None,
            })),
        }
    }

    /// Tween from the current value to `target`, replacing any running tween.
    pub fn animate_to(&mut self, target: T, spec: AnimationSpec) {
        {
            let mut state = self.state.borrow_mut();
            state.cancel_frame();
            state.tween = Some(Tween {
                from: state.value.clone(),
                to: target,
                spec,
                started_at: None,
            });
        }
        Self::request_frame(&self.state);
    }

    pub fn snap_to(&mut self, value: T) {
        let mut state = self.state.borrow_mut();
        state.cancel_frame();
        state.tween = None;
        state.value = value;
    }

    /// Cancel the running tween; the value stays where it is.
    pub fn stop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.cancel_frame();
        state.tween = None;
    }

    pub fn value(&self) -> T {
        self.state.borrow().value.clone()
    }

    /// Target of the running tween, or the current value when idle.
    pub fn target(&self) -> T {
        let state = self.state.borrow();
        match &state.tween {
            Some(tween) => tween.to.clone(),
            None => state.value.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().tween.is_some()
    }

    fn request_frame(this: &Rc<RefCell<AnimatableState<T>>>) {
        let clock = {
            let state = this.borrow();
            if state.frame.is_some() {
                return;
            }
            state.runtime.frame_clock()
        };
        let weak = Rc::downgrade(this);
        let frame = clock.with_frame_nanos(move |frame_time_nanos| {
            if let Some(this) = weak.upgrade() {
                Self::on_frame(&this, frame_time_nanos);
            }
        });

        let mut state = this.borrow_mut();
        if frame.is_active() {
            state.frame = Some(frame);
        } else if let Some(tween) = state.tween.take() {
            log::warn!("animation runtime is gone; jumping to target");
            state.value = tween.to;
        }
    }

    fn on_frame(this: &Rc<RefCell<AnimatableState<T>>>, frame_time_nanos: u64) {
        let keep_going = {
            let mut state = this.borrow_mut();
            state.frame = None;
            let Some(tween) = state.tween.as_mut() else {
                return;
            };
            let (value, finished) = tween.sample(frame_time_nanos);
            state.value = value;
            if finished {
                state.tween = None;
            }
            !finished
        };
        if keep_going {
            Self::request_frame(this);
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animatable_tests.rs"]
mod tests;
