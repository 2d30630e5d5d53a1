use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::thread::ThreadId;

use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::FrameCallbackId;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

/// Callbacks waiting for the next frame, in registration order.
#[derive(Default)]
struct FrameQueue {
    pending: Vec<(FrameCallbackId, FrameCallback)>,
    last_id: FrameCallbackId,
}

impl FrameQueue {
    fn push(&mut self, callback: FrameCallback) -> FrameCallbackId {
        self.last_id += 1;
        self.pending.push((self.last_id, callback));
        self.last_id
    }

    fn remove(&mut self, id: FrameCallbackId) {
        self.pending.retain(|(pending, _)| *pending != id);
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

struct RuntimeState {
    scheduler: Arc<dyn RuntimeScheduler>,
    frames: RefCell<FrameQueue>,
    frame_requested: Cell<bool>,
    owner: ThreadId,
}

impl RuntimeState {
    fn register(&self, callback: FrameCallback) -> FrameCallbackId {
        debug_assert_eq!(
            std::thread::current().id(),
            self.owner,
            "frame callback registered off the runtime thread"
        );
        let id = self.frames.borrow_mut().push(callback);
        if !self.frame_requested.replace(true) {
            self.scheduler.schedule_frame();
        }
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        let mut frames = self.frames.borrow_mut();
        frames.remove(id);
        if frames.is_empty() {
            self.frame_requested.set(false);
        }
    }

    fn run_frame(&self, frame_time_nanos: u64) {
        // Taken up front: callbacks registered from inside a callback land in
        // the fresh queue and run on the following frame.
        let due = std::mem::take(&mut self.frames.borrow_mut().pending);
        self.frame_requested.set(false);
        for (_, callback) in due {
            callback(frame_time_nanos);
        }
        if !self.frames.borrow().is_empty() {
            self.frame_requested.set(true);
        }
    }
}

/// Single-threaded runtime owning the frame-callback queue.
///
/// The runtime lives on the thread that created it; everything that touches
/// the live transform is driven from that thread.
#[derive(Clone)]
pub struct Runtime {
    state: Rc<RuntimeState>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            state: Rc::new(RuntimeState {
                scheduler,
                frames: RefCell::default(),
                frame_requested: Cell::new(false),
                owner: std::thread::current().id(),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Whether a frame has been requested from the scheduler and not run yet.
    pub fn needs_frame(&self) -> bool {
        self.state.frame_requested.get()
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.state.frames.borrow().is_empty()
    }

    /// Runs every callback registered before this call with `frame_time_nanos`.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.state.run_frame(frame_time_nanos);
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.handle().frame_clock()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Arc::new(DefaultScheduler))
    }
}

/// Scheduler for runtimes whose owner polls for frames itself.
#[derive(Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Weak handle to a [`Runtime`]. Operations on a dropped runtime are no-ops.
#[derive(Clone)]
pub struct RuntimeHandle {
    state: Weak<RuntimeState>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let state = self.state.upgrade()?;
        Some(state.register(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(state) = self.state.upgrade() {
            state.cancel(id);
        }
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(state) = self.state.upgrade() {
            state.run_frame(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|state| !state.frames.borrow().is_empty())
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
