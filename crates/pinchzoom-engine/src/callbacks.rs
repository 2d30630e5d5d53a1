//! Main-thread notification handlers.

use pinchzoom_ui_graphics::Size;

use crate::notification::{ImpactStyle, ZoomNotification};
use crate::transform::ZoomStatus;

pub type ListenerId = u64;

type StatusHandler = Box<dyn FnMut(ZoomStatus)>;

/// Optional handlers for every notification, plus any number of registered
/// status listeners. Status changes reach the `on_status_change` handler
/// first, then registered listeners in registration order.
#[derive(Default)]
pub struct ZoomCallbacks {
    on_layout: Option<Box<dyn FnMut(Size)>>,
    on_scale_change: Option<Box<dyn FnMut()>>,
    on_scale_reset: Option<Box<dyn FnMut()>>,
    on_status_change: Option<StatusHandler>,
    on_dismiss: Option<Box<dyn FnMut()>>,
    on_haptic_feedback: Option<Box<dyn FnMut(ImpactStyle)>>,
    status_listeners: Vec<(ListenerId, StatusHandler)>,
    next_listener_id: ListenerId,
}

impl ZoomCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_layout(mut self, handler: impl FnMut(Size) + 'static) -> Self {
        self.on_layout = Some(Box::new(handler));
        self
    }

    pub fn on_scale_change(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_scale_change = Some(Box::new(handler));
        self
    }

    pub fn on_scale_reset(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_scale_reset = Some(Box::new(handler));
        self
    }

    pub fn on_status_change(mut self, handler: impl FnMut(ZoomStatus) + 'static) -> Self {
        self.on_status_change = Some(Box::new(handler));
        self
    }

    pub fn on_dismiss(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(handler));
        self
    }

    pub fn on_haptic_feedback(mut self, handler: impl FnMut(ImpactStyle) + 'static) -> Self {
        self.on_haptic_feedback = Some(Box::new(handler));
        self
    }

    pub fn register_status_listener(
        &mut self,
        listener: impl FnMut(ZoomStatus) + 'static,
    ) -> ListenerId {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.status_listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn remove_status_listener(&mut self, id: ListenerId) -> bool {
        let before = self.status_listeners.len();
        self.status_listeners.retain(|(listener_id, _)| *listener_id != id);
        self.status_listeners.len() != before
    }

    pub fn status_listener_count(&self) -> usize {
        self.status_listeners.len()
    }

    pub fn dispatch(&mut self, notification: ZoomNotification) {
        match notification {
            ZoomNotification::Layout(size) => {
                if let Some(handler) = self.on_layout.as_mut() {
                    handler(size);
                }
            }
            ZoomNotification::ScaleChange => {
                if let Some(handler) = self.on_scale_change.as_mut() {
                    handler();
                }
            }
            ZoomNotification::ScaleReset => {
                if let Some(handler) = self.on_scale_reset.as_mut() {
                    handler();
                }
            }
            ZoomNotification::StatusChange(status) => {
                if let Some(handler) = self.on_status_change.as_mut() {
                    handler(status);
                }
                for (_, listener) in self.status_listeners.iter_mut() {
                    listener(status);
                }
            }
            ZoomNotification::Dismiss => {
                if let Some(handler) = self.on_dismiss.as_mut() {
                    handler();
                }
            }
            ZoomNotification::HapticFeedback(style) => {
                if let Some(handler) = self.on_haptic_feedback.as_mut() {
                    handler(style);
                }
            }
        }
    }

    pub fn dispatch_all(&mut self, notifications: impl IntoIterator<Item = ZoomNotification>) {
        for notification in notifications {
            self.dispatch(notification);
        }
    }
}

#[cfg(test)]
#[path = "tests/callbacks_tests.rs"]
mod tests;
