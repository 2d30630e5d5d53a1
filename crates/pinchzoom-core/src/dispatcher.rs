//! Fire-and-forget message passing from the gesture thread to the main thread.
//!
//! The gesture thread posts through a [`UiDispatcher`]; the host drains the
//! paired [`UiQueue`] on its own thread whenever the scheduler wakes it.
//! Posting never blocks and there is no backpressure.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use crate::platform::RuntimeScheduler;

struct UiDispatcherInner<M> {
    scheduler: Arc<dyn RuntimeScheduler>,
    tx: mpsc::Sender<M>,
    pending: Arc<AtomicUsize>,
}

impl<M> UiDispatcherInner<M> {
    fn post(&self, message: M) {
        self.pending.fetch_add(1, Ordering::SeqCst);
        if self.tx.send(message).is_err() {
            // Receiver is gone; nobody is left to notify.
            self.pending.fetch_sub(1, Ordering::SeqCst);
            log::debug!("UI queue dropped; discarding posted message");
            return;
        }
        self.scheduler.schedule_frame();
    }
}

struct PendingGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> PendingGuard<'a> {
    fn new(counter: &'a AtomicUsize) -> Self {
        Self { counter }
    }
}

impl<'a> Drop for PendingGuard<'a> {
    fn drop(&mut self) {
        let previous = self.counter.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous > 0, "UI dispatcher pending count underflowed");
    }
}

/// Sending half, usable from any thread.
pub struct UiDispatcher<M> {
    inner: Arc<UiDispatcherInner<M>>,
}

impl<M> Clone for UiDispatcher<M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<M: Send + 'static> UiDispatcher<M> {
    pub fn post(&self, message: M) {
        self.inner.post(message);
    }

    pub fn has_pending(&self) -> bool {
        self.inner.pending.load(Ordering::SeqCst) > 0
    }
}

/// Receiving half, drained on the main thread.
pub struct UiQueue<M> {
    rx: mpsc::Receiver<M>,
    pending: Arc<AtomicUsize>,
}

impl<M> UiQueue<M> {
    /// Pops the next message without waiting.
    pub fn try_next(&self) -> Option<M> {
        let message = self.rx.try_recv().ok()?;
        let _guard = PendingGuard::new(&self.pending);
        Some(message)
    }

    /// Waits up to `timeout` for the next message.
    pub fn next_timeout(&self, timeout: Duration) -> Option<M> {
        let message = self.rx.recv_timeout(timeout).ok()?;
        let _guard = PendingGuard::new(&self.pending);
        Some(message)
    }

    /// Hands every queued message to `handler` in posting order and returns
    /// how many were delivered.
    pub fn drain(&self, mut handler: impl FnMut(M)) -> usize {
        let mut delivered = 0;
        while let Ok(message) = self.rx.try_recv() {
            let _guard = PendingGuard::new(&self.pending);
            handler(message);
            delivered += 1;
        }
        delivered
    }

    pub fn has_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }
}

/// Creates a connected dispatcher/queue pair. `scheduler` is poked on every
/// post so the host knows to drain.
pub fn ui_channel<M: Send + 'static>(
    scheduler: Arc<dyn RuntimeScheduler>,
) -> (UiDispatcher<M>, UiQueue<M>) {
    let (tx, rx) = mpsc::channel();
    let pending = Arc::new(AtomicUsize::new(0));
    let dispatcher = UiDispatcher {
        inner: Arc::new(UiDispatcherInner {
            scheduler,
            tx,
            pending: pending.clone(),
        }),
    };
    (dispatcher, UiQueue { rx, pending })
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
