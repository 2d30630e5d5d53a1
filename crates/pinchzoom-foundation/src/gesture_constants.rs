//! Shared gesture constants for touch handling.
//!
//! All distances are in logical pixels, all durations in milliseconds.

/// Touch slop in logical pixels.
///
/// A pointer that travels further than this from where it went down is a
/// drag: pans may activate and taps are cancelled. The same value gates
/// pinch activation on the change in finger span.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Vertical travel required before a pan activates while the content is not
/// zoomed. Horizontal swipes below this stay with the surrounding pager.
pub const PAN_ACTIVE_OFFSET_Y: f32 = 20.0;

/// Longest press that still counts as a tap.
pub const TAP_MAX_DURATION_MILLIS: u64 = 500;

/// Longest pause between the first tap's release and the second press.
pub const DOUBLE_TAP_MAX_DELAY_MILLIS: u64 = 500;

/// Maximum distance between the two taps of a double tap.
pub const DOUBLE_TAP_SLOP: f32 = 100.0;
