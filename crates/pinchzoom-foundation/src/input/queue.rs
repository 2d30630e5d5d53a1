//! Pointer input queue.
//!
//! Platform integrations enqueue raw touch samples here; the gesture
//! detector takes them back out in arrival order.

use std::collections::VecDeque;

use super::types::PointerEvent;

#[derive(Debug, Default)]
pub struct PointerQueue {
    events: VecDeque<PointerEvent>,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<PointerEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
