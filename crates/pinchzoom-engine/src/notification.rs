use pinchzoom_ui_graphics::Size;

use crate::transform::ZoomStatus;

/// Haptic intensity requested alongside a spring-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImpactStyle {
    Light,
}

/// Outbound event produced by the engine for the main thread.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomNotification {
    /// Viewport dimensions were measured.
    Layout(Size),
    /// Content left its un-zoomed resting state.
    ScaleChange,
    /// Content is returning to its un-zoomed resting state.
    ScaleReset,
    StatusChange(ZoomStatus),
    Dismiss,
    HapticFeedback(ImpactStyle),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Layout,
    ScaleChange,
    ScaleReset,
    StatusChange,
    Dismiss,
    HapticFeedback,
}

impl ZoomNotification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            ZoomNotification::Layout(_) => NotificationKind::Layout,
            ZoomNotification::ScaleChange => NotificationKind::ScaleChange,
            ZoomNotification::ScaleReset => NotificationKind::ScaleReset,
            ZoomNotification::StatusChange(_) => NotificationKind::StatusChange,
            ZoomNotification::Dismiss => NotificationKind::Dismiss,
            ZoomNotification::HapticFeedback(_) => NotificationKind::HapticFeedback,
        }
    }
}
