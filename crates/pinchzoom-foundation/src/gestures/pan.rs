//! Pan recognizer tracking the centroid of all active pointers.

use pinchzoom_ui_graphics::Point;

use crate::gesture_constants::{DRAG_THRESHOLD, PAN_ACTIVE_OFFSET_Y};
use crate::input::{PointerEvent, PointerEventKind};

use super::event::{GestureEvent, GestureEvents, PanUpdate};
use super::pointers::ActivePointers;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum PanState {
    #[default]
    Idle,
    Possible,
    Active,
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct PanRecognizer {
    state: PanState,
    require_vertical_activation: bool,
    /// Centroid the current pointer set started from.
    origin: Point,
    /// Translation accumulated by earlier pointer sets of this pan.
    offset: Point,
    last_centroid: Point,
    last_count: usize,
}

impl PanRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, the pan only activates after vertical travel past
    /// [`PAN_ACTIVE_OFFSET_Y`].
    pub fn set_require_vertical_activation(&mut self, require: bool) {
        self.require_vertical_activation = require;
    }

    pub fn is_active(&self) -> bool {
        self.state == PanState::Active
    }

    pub fn cancel(&mut self, out: &mut GestureEvents) {
        if self.is_active() {
            out.push(GestureEvent::PanEnd);
        }
        self.reset();
    }

    pub fn reset(&mut self) {
        self.state = PanState::Idle;
        self.origin = Point::ZERO;
        self.offset = Point::ZERO;
        self.last_centroid = Point::ZERO;
        self.last_count = 0;
    }

    fn translation(&self) -> Point {
        self.offset + (self.last_centroid - self.origin)
    }

    fn passes_activation(&self, translation: Point) -> bool {
        if self.require_vertical_activation {
            translation.y.abs() > PAN_ACTIVE_OFFSET_Y
        } else {
            translation.distance_to(Point::ZERO) > DRAG_THRESHOLD
        }
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

        let centroid = match pointers.centroid() {
            Some(centroid) => centroid,
            None => {
                self.cancel(out);
                return;
            }
        };

        if self.state == PanState::Idle {
            self.state = PanState::Possible;
            self.origin = centroid;
            self.offset = Point::ZERO;
            self.last_centroid = centroid;
            self.last_count = pointers.len();
            return;
        }

        if pointers.len() != self.last_count {
            // Rebase so adding or lifting a finger does not jump the pan.
            self.offset = self.translation();
            self.origin = centroid;
            self.last_centroid = centroid;
            self.last_count = pointers.len();
            return;
        }

        self.last_centroid = centroid;
        let translation = self.translation();
        let update = GestureEvent::PanUpdate(PanUpdate {
            translation,
            number_of_pointers: pointers.len(),
        });

        match self.state {
            PanState::Possible => {
                if self.passes_activation(translation) {
                    self.state = PanState::Active;
                    out.push(GestureEvent::PanStart);
                    out.push(update);
                }
            }
            PanState::Active => out.push(update),
            PanState::Idle => {}
        }
    }
}
