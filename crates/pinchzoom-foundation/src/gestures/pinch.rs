//! Two-finger pinch recognizer.

use crate::gesture_constants::DRAG_THRESHOLD;
use crate::input::{PointerEvent, PointerEventKind};

use super::event::{GestureEvent, GestureEvents, PinchUpdate};
use super::pointers::ActivePointers;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum PinchState {
    #[default]
    Idle,
    Possible {
        initial_span: f32,
    },
    Active {
        initial_span: f32,
    },
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct PinchRecognizer {
    state: PinchState,
}

impl PinchRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PinchState::Active { .. })
    }

    /// Drop tracking state, ending an active pinch.
    pub fn cancel(&mut self, out: &mut GestureEvents) {
        if self.is_active() {
            out.push(GestureEvent::PinchEnd);
        }
        self.reset();
    }

    pub fn reset(&mut self) {
        self.state = PinchState::Idle;
    }

    pub fn on_pointer(
        &mut self,
        event: &PointerEvent,
        pointers: &ActivePointers,
        out: &mut GestureEvents,
    ) {
        if event.kind == PointerEventKind::Cancel {
            self.cancel(out);
            return;
        }

        let (span, focal) = match (pointers.span(), pointers.focal()) {
            (Some(span), Some(focal)) => (span, focal),
            _ => {
                // Fewer than two fingers left.
                self.cancel(out);
                return;
            }
        };

        match self.state {
            PinchState::Idle => {
                if span > 0.0 {
                    self.state = PinchState::Possible { initial_span: span };
                }
            }
            PinchState::Possible { initial_span } => {
                if (span - initial_span).abs() > DRAG_THRESHOLD {
                    self.state = PinchState::Active { initial_span };
                    out.push(GestureEvent::PinchStart);
                    out.push(GestureEvent::PinchUpdate(PinchUpdate {
                        number_of_pointers: pointers.len(),
                        scale: span / initial_span,
                        focal,
                    }));
                }
            }
            PinchState::Active { initial_span } => {
                if event.kind == PointerEventKind::Move {
                    out.push(GestureEvent::PinchUpdate(PinchUpdate {
                        number_of_pointers: pointers.len(),
                        scale: span / initial_span,
                        focal,
                    }));
                }
            }
        }
    }
}
