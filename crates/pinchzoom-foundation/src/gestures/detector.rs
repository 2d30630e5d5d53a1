//! Composition of the zoom gestures.
//!
//! Pinch and pan run simultaneously; the pair is exclusive with double tap.
//! Once pinch or pan activates, any tap sequence in progress is dropped, and
//! a recognized double tap resets pinch and pan tracking.

use crate::input::{PointerEvent, PointerEventKind, PointerQueue};

use super::event::GestureEvents;
use super::pan::PanRecognizer;
use super::pinch::PinchRecognizer;
use super::pointers::ActivePointers;
use super::tap::DoubleTapRecognizer;

pub struct ZoomGestureDetector {
    pointers: ActivePointers,
    queue: PointerQueue,
    pinch: PinchRecognizer,
    pan: PanRecognizer,
    double_tap: DoubleTapRecognizer,
    enabled: bool,
}

impl Default for ZoomGestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomGestureDetector {
    pub fn new() -> Self {
        let mut pan = PanRecognizer::new();
        // Content starts un-zoomed.
        pan.set_require_vertical_activation(true);
        Self {
            pointers: ActivePointers::new(),
            queue: PointerQueue::new(),
            pinch: PinchRecognizer::new(),
            pan,
            double_tap: DoubleTapRecognizer::new(),
            enabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling ends any active gesture and ignores input until re-enabled.
    pub fn set_enabled(&mut self, enabled: bool) -> GestureEvents {
        let mut out = GestureEvents::new();
        if self.enabled && !enabled {
            self.cancel_all(&mut out);
        }
        self.enabled = enabled;
        out
    }

    /// Zoomed content pans freely; un-zoomed content only pans after
    /// vertical travel so horizontal swipes reach the pager.
    pub fn set_zoomed(&mut self, zoomed: bool) {
        self.pan.set_require_vertical_activation(!zoomed);
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_active()
    }

    pub fn active_pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn pending_event_count(&self) -> usize {
        self.queue.len()
    }

    /// Queue an event for the next [`process_pending`](Self::process_pending).
    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    /// Run every queued event through the recognizers, in arrival order.
    pub fn process_pending(&mut self) -> GestureEvents {
        let mut out = GestureEvents::new();
        while let Some(event) = self.queue.pop() {
            out.extend(self.on_pointer_event(event));
        }
        out
    }

    pub fn on_pointer_event(&mut self, event: PointerEvent) -> GestureEvents {
        let mut out = GestureEvents::new();
        if !self.enabled {
            return out;
        }
        if !event.position.is_finite() {
            log::warn!("ignoring pointer event with non-finite position: {event:?}");
            return out;
        }

        self.pointers.apply(&event);
        self.pinch.on_pointer(&event, &self.pointers, &mut out);
        self.pan.on_pointer(&event, &self.pointers, &mut out);

        if self.pinch.is_active() || self.pan.is_active() {
            self.double_tap.reset();
        } else {
            let before = out.len();
            self.double_tap.on_pointer(&event, &self.pointers, &mut out);
            if out.len() > before {
                self.pinch.reset();
                self.pan.reset();
            }
        }

        if event.kind == PointerEventKind::Cancel {
            self.pointers.clear();
        }
        out
    }

    fn cancel_all(&mut self, out: &mut GestureEvents) {
        self.pinch.cancel(out);
        self.pan.cancel(out);
        self.double_tap.reset();
        self.pointers.clear();
    }
}

#[cfg(test)]
#[path = "../tests/detector_tests.rs"]
mod tests;
