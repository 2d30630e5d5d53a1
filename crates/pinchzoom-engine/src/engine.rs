//! The gesture reducer.
//!
//! [`PinchToZoomEngine`] owns the live transform and is its only writer.
//! Gesture events mutate it directly; when a gesture ends out of bounds a
//! settle animation takes over until the next gesture starts. Starting a
//! gesture cancels the animation's frame registration so it can never write
//! again.

use std::collections::VecDeque;
use std::sync::Arc;

use log::{debug, trace, warn};
use pinchzoom_animation::Animatable;
use pinchzoom_core::{DefaultScheduler, Runtime};
use pinchzoom_foundation::{GestureEvent, PanUpdate, PinchUpdate};
use pinchzoom_ui_graphics::{Point, Size};

use crate::config::{ConfigError, ZoomConfig};
use crate::geometry::{clamp_transform, exceeds_dismiss_threshold, focal_translation};
use crate::notification::{ImpactStyle, ZoomNotification};
use crate::session::{GestureSession, PanSession, PinchAnchor, PinchSession};
use crate::transform::{TransformState, ZoomStatus};

pub struct PinchToZoomEngine {
    config: ZoomConfig,
    runtime: Runtime,
    viewport: Size,
    transform: TransformState,
    /// Settled transform new gestures start from.
    baseline: TransformState,
    session: GestureSession,
    settle: Animatable<TransformState>,
    zoomed: bool,
    /// Set once a gesture chain dismissed; cleared by the next chain.
    dismissed: bool,
    last_status: ZoomStatus,
    outbox: VecDeque<ZoomNotification>,
}

impl PinchToZoomEngine {
    pub fn new(config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let identity = TransformState::identity(config.minimum_zoom_scale);
        let settle = Animatable::new(identity, runtime.handle());
        Ok(Self {
            config,
            runtime,
            viewport: Size::ZERO,
            transform: identity,
            baseline: identity,
            session: GestureSession::default(),
            settle,
            zoomed: false,
            dismissed: false,
            last_status: ZoomStatus::from(identity),
            outbox: VecDeque::new(),
        })
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn transform(&self) -> TransformState {
        self.transform
    }

    /// Transform the engine rests at once any running settle finishes.
    pub fn resting_transform(&self) -> TransformState {
        self.baseline
    }

    pub fn status(&self) -> ZoomStatus {
        ZoomStatus::from(self.transform)
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_running()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.session.is_active()
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Records the measured viewport and reports it.
    pub fn set_viewport(&mut self, viewport: Size) {
        if viewport.is_degenerate() {
            warn!("degenerate viewport {viewport:?}; translation bounds collapse to zero");
        }
        self.viewport = viewport;
        self.emit(ZoomNotification::Layout(viewport));
    }

    /// Disabling ends any gesture in progress, then ignores gesture events.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && !self.config.disabled {
            if self.session.pinch.is_some() {
                self.pinch_end();
            }
            if self.session.pan.is_some() {
                self.pan_end();
            }
        }
        self.config.disabled = disabled;
    }

    pub fn handle(&mut self, event: GestureEvent) {
        if self.config.disabled {
            trace!("engine disabled; dropping {event:?}");
            return;
        }
        match event {
            GestureEvent::PinchStart => self.pinch_start(),
            GestureEvent::PinchUpdate(update) => self.pinch_update(update),
            GestureEvent::PinchEnd => self.pinch_end(),
            GestureEvent::PanStart => self.pan_start(),
            GestureEvent::PanUpdate(update) => self.pan_update(update),
            GestureEvent::PanEnd => self.pan_end(),
            GestureEvent::DoubleTap(position) => self.double_tap(position),
        }
    }

    pub fn handle_all(&mut self, events: impl IntoIterator<Item = GestureEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    pub fn pinch_start(&mut self) {
        self.begin_gesture();
        self.baseline.scale = self.transform.scale;
        self.session.pinch = Some(PinchSession::new(self.transform.scale));
        debug!("pinch started at scale {}", self.transform.scale);
        if !self.zoomed {
            self.zoomed = true;
            self.emit(ZoomNotification::ScaleChange);
        }
    }

    pub fn pinch_update(&mut self, update: PinchUpdate) {
        if update.number_of_pointers != 2 {
            trace!(
                "ignoring pinch update with {} pointers",
                update.number_of_pointers
            );
            return;
        }
        if !update.scale.is_finite() || update.scale <= 0.0 || !update.focal.is_finite() {
            warn!("ignoring degenerate pinch update {update:?}");
            return;
        }
        if self.session.pinch.is_none() {
            warn!("pinch update without a pinch start; starting a session");
            self.pinch_start();
        }
        let Some(mut pinch) = self.session.pinch else {
            return;
        };

        let minimum = self.config.minimum_zoom_scale;
        let scale = (pinch.base_scale * update.scale).min(self.config.maximum_zoom_scale);
        let translation = self.transform.translation();
        let anchor = *pinch.anchor.get_or_insert(PinchAnchor {
            origin: update.focal,
            offset_scale: scale,
            base_translation: translation,
        });
        self.session.pinch = Some(pinch);

        let translation = focal_translation(
            anchor.base_translation,
            scale,
            anchor.offset_scale,
            anchor.origin,
            self.viewport.center(),
        );
        self.transform = clamp_transform(
            TransformState::new(scale, translation.x, translation.y),
            self.viewport,
            minimum,
        );
        trace!("pinch update -> {:?}", self.transform);
        self.publish_status();
    }

    pub fn pinch_end(&mut self) {
        let Some(pinch) = self.session.pinch.take() else {
            warn!("pinch end without an active pinch");
            return;
        };
        if self.dismissed {
            return;
        }

        let minimum = self.config.minimum_zoom_scale;
        let scale = self.transform.scale;
        if scale < minimum / 2.0 && pinch.base_scale <= minimum {
            debug!("pinch collapsed to {scale}; dismissing");
            self.baseline = self.transform;
            self.dismiss();
        } else if scale < minimum {
            debug!("pinch ended below minimum at {scale}; settling back");
            self.emit(ZoomNotification::HapticFeedback(ImpactStyle::Light));
            self.settle_to(TransformState::identity(minimum));
            self.mark_reset();
        } else {
            self.baseline = self.transform;
            if scale <= minimum && self.zoomed {
                self.mark_reset();
            }
        }
    }

    pub fn pan_start(&mut self) {
        self.begin_gesture();
        self.session.pan = Some(PanSession {
            base_translation: self.transform.translation(),
        });
        trace!("pan started from {:?}", self.transform.translation());
    }

    pub fn pan_update(&mut self, update: PanUpdate) {
        if !update.translation.is_finite() {
            warn!("ignoring non-finite pan update {update:?}");
            return;
        }
        if self.session.pan.is_none() {
            warn!("pan update without a pan start; starting a session");
            self.pan_start();
        }
        let Some(mut pan) = self.session.pan else {
            return;
        };
        if self.settle.is_running() {
            // A pinch released below the minimum is settling; the pan follows
            // from wherever the animation leaves the content.
            pan.base_translation = self.transform.translation() - update.translation;
            self.session.pan = Some(pan);
            return;
        }

        let target = pan.base_translation + update.translation;
        self.transform = if self.is_at_rest_scale() {
            // Free movement so the content can be dragged away to dismiss.
            self.transform.with_translation(target)
        } else {
            clamp_transform(
                self.transform.with_translation(target),
                self.viewport,
                self.config.minimum_zoom_scale,
            )
        };
        trace!("pan update -> {:?}", self.transform);
        self.publish_status();
    }

    pub fn pan_end(&mut self) {
        if self.session.pan.take().is_none() {
            warn!("pan end without an active pan");
            return;
        }
        if self.dismissed || self.session.pinch.is_some() || self.is_animating() {
            self.baseline = self.settle_target();
            return;
        }

        let minimum = self.config.minimum_zoom_scale;
        let scale = self.transform.scale;
        if self.is_at_rest_scale() {
            if exceeds_dismiss_threshold(self.transform, self.viewport) {
                debug!(
                    "pan released at {:?}; dismissing",
                    self.transform.translation()
                );
                self.baseline = self.transform;
                self.dismiss();
            } else {
                // Also restores a scale frozen below the minimum by a
                // cancelled settle.
                self.emit(ZoomNotification::HapticFeedback(ImpactStyle::Light));
                self.settle_to(TransformState::identity(minimum));
            }
            return;
        }

        let window_height = self.config.window_height.unwrap_or(self.viewport.height);
        let clamped = clamp_transform(self.transform, self.viewport, minimum);
        if self.viewport.height * (scale - minimum) <= window_height && clamped != self.transform {
            debug!("pan released out of bounds; settling to {clamped:?}");
            self.settle_to(clamped);
        } else {
            self.baseline = self.transform;
        }
    }

    /// Zooms in to [`ZoomConfig::double_tap_scale`] or resets a zoomed view.
    pub fn double_tap(&mut self, position: Point) {
        if self.session.is_active() {
            debug!("double tap at {position:?} ignored during an active gesture");
            return;
        }
        self.dismissed = false;
        let minimum = self.config.minimum_zoom_scale;
        if self.transform.scale > minimum {
            debug!("double tap resets zoom");
            self.settle_to(TransformState::identity(minimum));
            self.mark_reset();
        } else {
            let target = clamp_transform(
                self.transform.with_scale(self.config.double_tap_scale()),
                self.viewport,
                minimum,
            );
            debug!("double tap zooms to {}", target.scale);
            self.settle_to(target);
            self.zoomed = true;
            self.emit(ZoomNotification::ScaleChange);
        }
    }

    /// Runs pending animation frames for `frame_time_nanos` and syncs the
    /// live transform with the settle animation.
    pub fn advance_frame(&mut self, frame_time_nanos: u64) {
        let was_running = self.settle.is_running();
        self.runtime.drain_frame_callbacks(frame_time_nanos);
        if !was_running {
            return;
        }
        self.transform = self.settle.value();
        trace!("settle frame -> {:?}", self.transform);
        self.publish_status();
        if !self.settle.is_running() {
            debug!("settled at {:?}", self.transform);
        }
    }

    /// Snaps back to the identity transform without animating or notifying
    /// scale changes. Used when a viewer is reopened after a dismiss.
    pub fn reset(&mut self) {
        self.settle.snap_to(TransformState::identity(self.config.minimum_zoom_scale));
        self.session.clear();
        self.transform = TransformState::identity(self.config.minimum_zoom_scale);
        self.baseline = self.transform;
        self.zoomed = false;
        self.dismissed = false;
        self.publish_status();
    }

    pub fn has_notifications(&self) -> bool {
        !self.outbox.is_empty()
    }

    pub fn take_notifications(&mut self) -> Vec<ZoomNotification> {
        self.outbox.drain(..).collect()
    }

    pub fn drain_notifications(&mut self, mut handler: impl FnMut(ZoomNotification)) -> usize {
        let mut count = 0;
        while let Some(notification) = self.outbox.pop_front() {
            handler(notification);
            count += 1;
        }
        count
    }

    fn begin_gesture(&mut self) {
        if !self.session.is_active() {
            self.dismissed = false;
        }
        if self.settle.is_running() {
            debug!("gesture started; cancelling settle at {:?}", self.transform);
            self.settle.stop();
            self.baseline = self.transform;
            self.sync_zoomed();
        }
    }

    /// A settle cut short leaves the content wherever the animation was; the
    /// zoom flag must describe that scale, not the abandoned target.
    fn sync_zoomed(&mut self) {
        let zoomed = self.transform.scale > self.config.minimum_zoom_scale;
        if zoomed == self.zoomed {
            return;
        }
        if zoomed {
            self.zoomed = true;
            self.emit(ZoomNotification::ScaleChange);
        } else {
            self.mark_reset();
        }
    }

    /// Both the live and settled scale are at or below the minimum.
    fn is_at_rest_scale(&self) -> bool {
        let minimum = self.config.minimum_zoom_scale;
        self.transform.scale <= minimum && self.baseline.scale <= minimum
    }

    fn settle_target(&self) -> TransformState {
        if self.settle.is_running() {
            self.settle.target()
        } else {
            self.transform
        }
    }

    fn settle_to(&mut self, target: TransformState) {
        self.settle.snap_to(self.transform);
        self.settle.animate_to(target, self.config.settle_animation);
        self.baseline = target;
    }

    fn mark_reset(&mut self) {
        self.zoomed = false;
        self.emit(ZoomNotification::ScaleReset);
    }

    fn dismiss(&mut self) {
        self.dismissed = true;
        self.emit(ZoomNotification::Dismiss);
    }

    fn publish_status(&mut self) {
        let status = ZoomStatus::from(self.transform);
        if status != self.last_status {
            self.last_status = status;
            self.emit(ZoomNotification::StatusChange(status));
        }
    }

    fn emit(&mut self, notification: ZoomNotification) {
        self.outbox.push_back(notification);
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
