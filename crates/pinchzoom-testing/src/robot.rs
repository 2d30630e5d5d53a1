//! Robot testing framework for scripting zoom gestures
//!
//! [`ZoomRobot`] drives a [`PinchToZoomEngine`] either with typed gesture
//! events or with raw touches run through the gesture detector, steps the
//! frame clock, and records every notification the engine emits.
//!
//! # Example
//!
//! ```
//! use pinchzoom_testing::ZoomRobot;
//! use pinchzoom_ui_graphics::Point;
//!
//! let mut robot = ZoomRobot::new(300.0, 300.0);
//! robot.double_tap(Point::new(150.0, 150.0));
//! robot.wait_for_idle();
//! assert_eq!(robot.transform().scale, 4.0);
//! ```

use pinchzoom_core::FRAME_INTERVAL_NANOS;
use pinchzoom_engine::{
    ConfigError, GestureEvent, NotificationKind, PanUpdate, PinchToZoomEngine, PinchUpdate,
    TransformState, ZoomCallbacks, ZoomConfig, ZoomNotification, ZoomStatus,
};
use pinchzoom_foundation::gesture_constants::DOUBLE_TAP_MAX_DELAY_MILLIS;
use pinchzoom_foundation::{PointerEvent, PointerId, ZoomGestureDetector};
use pinchzoom_ui_graphics::{Point, Size};

/// Steps used when interpolating drags and pinches.
const GESTURE_STEPS: usize = 10;
/// Time between scripted touch samples.
const SAMPLE_INTERVAL_MILLIS: u64 = 8;
/// Upper bound on frames pumped by [`ZoomRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 600;

pub struct ZoomRobot {
    engine: PinchToZoomEngine,
    detector: ZoomGestureDetector,
    notifications: Vec<ZoomNotification>,
    frame_time_nanos: u64,
    uptime_millis: u64,
}

impl ZoomRobot {
    /// Robot with the default configuration and a `width` x `height`
    /// viewport.
    pub fn new(width: f32, height: f32) -> Self {
        match Self::with_config(ZoomConfig::default(), width, height) {
            Ok(robot) => robot,
            Err(err) => panic!("default zoom configuration rejected: {err}"),
        }
    }

    pub fn with_config(config: ZoomConfig, width: f32, height: f32) -> Result<Self, ConfigError> {
        let mut engine = PinchToZoomEngine::new(config)?;
        let mut detector = ZoomGestureDetector::new();
        engine.handle_all(detector.set_enabled(!config.disabled));
        let mut robot = Self {
            engine,
            detector,
            notifications: Vec::new(),
            frame_time_nanos: 0,
            uptime_millis: 0,
        };
        robot.set_viewport(width, height);
        Ok(robot)
    }

    pub fn engine(&self) -> &PinchToZoomEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PinchToZoomEngine {
        &mut self.engine
    }

    pub fn transform(&self) -> TransformState {
        self.engine.transform()
    }

    pub fn status(&self) -> ZoomStatus {
        self.engine.status()
    }

    pub fn viewport(&self) -> Size {
        self.engine.viewport()
    }

    /// Resize the viewport (simulates a layout pass).
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.engine.set_viewport(Size::new(width, height));
        self.collect();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        let ended = self.detector.set_enabled(!disabled);
        self.engine.handle_all(ended);
        self.engine.set_disabled(disabled);
        self.collect();
    }

    // ------------------------------------------------------------------
    // Gesture-level scripting
    // ------------------------------------------------------------------

    /// Feed a single recognized gesture event to the engine.
    pub fn send(&mut self, event: GestureEvent) {
        self.engine.handle(event);
        self.collect();
    }

    /// A complete pinch: start, one update per factor (relative to the
    /// scale the pinch started at), end.
    pub fn pinch(&mut self, focal: Point, factors: &[f32]) {
        self.send(GestureEvent::PinchStart);
        for &factor in factors {
            self.send(GestureEvent::PinchUpdate(PinchUpdate {
                number_of_pointers: 2,
                scale: factor,
                focal,
            }));
        }
        self.send(GestureEvent::PinchEnd);
    }

    /// A complete pan by (`dx`, `dy`) delivered in even steps.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.send(GestureEvent::PanStart);
        for step in 1..=GESTURE_STEPS {
            let t = step as f32 / GESTURE_STEPS as f32;
            self.send(GestureEvent::PanUpdate(PanUpdate::new(dx * t, dy * t)));
        }
        self.send(GestureEvent::PanEnd);
    }

    pub fn double_tap(&mut self, at: Point) {
        self.send(GestureEvent::DoubleTap(at));
    }

    // ------------------------------------------------------------------
    // Pointer-level scripting
    // ------------------------------------------------------------------

    /// Run one touch sample through the detector and the engine.
    pub fn pointer(&mut self, event: PointerEvent) {
        self.uptime_millis = self.uptime_millis.max(event.uptime_millis);
        let gestures = self.detector.on_pointer_event(event);
        self.engine.handle_all(gestures);
        self.collect();
    }

    /// Two fingers placed horizontally around `center`, spread from
    /// `start_span` to `end_span` apart, then lifted.
    pub fn touch_pinch(&mut self, center: Point, start_span: f32, end_span: f32) {
        let finger = |span: f32| {
            (
                Point::new(center.x - span / 2.0, center.y),
                Point::new(center.x + span / 2.0, center.y),
            )
        };
        let (first, second) = finger(start_span);
        self.touch(1, PointerEvent::down, first);
        self.touch(2, PointerEvent::down, second);

        let mut last = (first, second);
        for step in 1..=GESTURE_STEPS {
            let t = step as f32 / GESTURE_STEPS as f32;
            last = finger(start_span + (end_span - start_span) * t);
            self.touch(1, PointerEvent::moved, last.0);
            self.touch(2, PointerEvent::moved, last.1);
        }

        self.touch(2, PointerEvent::up, last.1);
        self.touch(1, PointerEvent::up, last.0);
    }

    /// One finger pressed at `from`, dragged to `to` and lifted.
    pub fn touch_drag(&mut self, from: Point, to: Point) {
        self.touch(1, PointerEvent::down, from);
        for step in 1..=GESTURE_STEPS {
            let t = step as f32 / GESTURE_STEPS as f32;
            self.touch(1, PointerEvent::moved, from + (to - from) * t);
        }
        self.touch(1, PointerEvent::up, to);
    }

    /// Two quick taps at `at`. Waits out any earlier tap first so the pair
    /// is recognized on its own.
    pub fn touch_double_tap(&mut self, at: Point) {
        self.uptime_millis += DOUBLE_TAP_MAX_DELAY_MILLIS + 1;
        self.touch(1, PointerEvent::down, at);
        self.touch(1, PointerEvent::up, at);
        self.touch(1, PointerEvent::down, at);
        self.touch(1, PointerEvent::up, at);
    }

    fn touch(
        &mut self,
        id: PointerId,
        make: fn(PointerId, Point, u64) -> PointerEvent,
        position: Point,
    ) {
        self.uptime_millis += SAMPLE_INTERVAL_MILLIS;
        self.pointer(make(id, position, self.uptime_millis));
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Advance frame time by `nanos` and run one frame.
    pub fn advance_time(&mut self, nanos: u64) {
        self.frame_time_nanos += nanos;
        self.uptime_millis += nanos / 1_000_000;
        self.engine.advance_frame(self.frame_time_nanos);
        self.collect();
    }

    /// Pump frames until any settle animation has finished.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.engine.is_animating() {
                return;
            }
            self.advance_time(FRAME_INTERVAL_NANOS);
        }
        panic!(
            "engine still animating after {} frames: {:?}",
            MAX_IDLE_FRAMES,
            self.engine.transform()
        );
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notifications(&self) -> &[ZoomNotification] {
        &self.notifications
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.notifications
            .iter()
            .filter(|notification| notification.kind() == kind)
            .count()
    }

    /// Status snapshots in the order they were reported.
    pub fn statuses(&self) -> Vec<ZoomStatus> {
        self.notifications
            .iter()
            .filter_map(|notification| match notification {
                ZoomNotification::StatusChange(status) => Some(*status),
                _ => None,
            })
            .collect()
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Deliver the recorded notifications to `callbacks`, in order.
    pub fn replay(&self, callbacks: &mut ZoomCallbacks) {
        callbacks.dispatch_all(self.notifications.iter().copied());
    }

    fn collect(&mut self) {
        let notifications = &mut self.notifications;
        self.engine
            .drain_notifications(|notification| notifications.push(notification));
        self.detector.set_zoomed(self.engine.is_zoomed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robot_reports_initial_layout() {
        let robot = ZoomRobot::new(320.0, 480.0);
        assert_eq!(robot.viewport(), Size::new(320.0, 480.0));
        assert_eq!(
            robot.notifications(),
            &[ZoomNotification::Layout(Size::new(320.0, 480.0))]
        );
    }

    #[test]
    fn advance_time_without_animation_is_quiet() {
        let mut robot = ZoomRobot::new(300.0, 300.0);
        robot.clear_notifications();
        robot.advance_time(FRAME_INTERVAL_NANOS);
        robot.wait_for_idle();
        assert!(robot.notifications().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ZoomConfig {
            maximum_zoom_scale: 0.5,
            ..ZoomConfig::default()
        };
        assert!(ZoomRobot::with_config(config, 300.0, 300.0).is_err());
    }
}
