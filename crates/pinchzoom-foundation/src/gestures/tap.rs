//! Double-tap recognizer.

use pinchzoom_ui_graphics::Point;

use crate::gesture_constants::{
    DOUBLE_TAP_MAX_DELAY_MILLIS, DOUBLE_TAP_SLOP, DRAG_THRESHOLD, TAP_MAX_DURATION_MILLIS,
};
use crate::input::{PointerEvent, PointerEventKind};

use super::event::{GestureEvent, GestureEvents};
use super::pointers::ActivePointers;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum TapState {
    #[default]
    Idle,
    FirstDown {
        at: Point,
        time: u64,
    },
    AwaitingSecond {
        first_at: Point,
        released: u64,
    },
    SecondDown {
        at: Point,
        time: u64,
    },
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct DoubleTapRecognizer {
    state: TapState,
}

impl DoubleTapRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.state = TapState::Idle;
    }

    pub fn on_pointer(
        &mut self,
        event: &PointerEvent,
        pointers: &ActivePointers,
        out: &mut GestureEvents,
    ) {
        if pointers.len() > 1 {
            self.reset();
            return;
        }

        let position = event.position;
        let time = event.uptime_millis;
        self.state = match (self.state, event.kind) {
            (_, PointerEventKind::Cancel) => TapState::Idle,
            (TapState::Idle, PointerEventKind::Down) => TapState::FirstDown { at: position, time },
            (TapState::FirstDown { at, .. }, PointerEventKind::Move)
            | (TapState::SecondDown { at, .. }, PointerEventKind::Move)
                if at.distance_to(position) > DRAG_THRESHOLD =>
            {
                TapState::Idle
            }
            (TapState::FirstDown { at, time: down }, PointerEventKind::Up) => {
                if time.saturating_sub(down) <= TAP_MAX_DURATION_MILLIS {
                    TapState::AwaitingSecond {
                        first_at: at,
                        released: time,
                    }
                } else {
                    TapState::Idle
                }
            }
            (TapState::AwaitingSecond { first_at, released }, PointerEventKind::Down) => {
                let in_time = time.saturating_sub(released) <= DOUBLE_TAP_MAX_DELAY_MILLIS;
                let in_range = first_at.distance_to(position) <= DOUBLE_TAP_SLOP;
                if in_time && in_range {
                    TapState::SecondDown { at: position, time }
                } else {
                    // Too late or too far: this press starts a new sequence.
                    TapState::FirstDown { at: position, time }
                }
            }
            (TapState::SecondDown { at, time: down }, PointerEventKind::Up) => {
                if time.saturating_sub(down) <= TAP_MAX_DURATION_MILLIS {
                    out.push(GestureEvent::DoubleTap(at));
                }
                TapState::Idle
            }
            (state, _) => state,
        };
    }
}
