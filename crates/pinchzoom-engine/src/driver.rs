//! Gesture thread.
//!
//! The engine and the gesture detector live on a dedicated thread so touch
//! deltas are integrated without waiting on the main thread. Commands reach
//! it over an ordered channel; notifications go back through a
//! [`UiDispatcher`] and are drained from the returned [`UiQueue`].

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{error, info, trace};
use pinchzoom_core::{
    ui_channel, Clock, RuntimeScheduler, SystemClock, UiDispatcher, UiQueue,
    FRAME_INTERVAL_NANOS,
};
use pinchzoom_foundation::{GestureEvent, PointerEvent, ZoomGestureDetector};
use pinchzoom_ui_graphics::Size;

use crate::config::ZoomConfig;
use crate::engine::PinchToZoomEngine;
use crate::error::ZoomError;
use crate::notification::ZoomNotification;

const THREAD_NAME: &str = "pinchzoom-gesture";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DriverCommand {
    /// Raw touch sample, run through the gesture detector.
    Pointer(PointerEvent),
    /// Already-recognized gesture event, fed straight to the engine.
    Gesture(GestureEvent),
    Layout(Size),
    SetDisabled(bool),
    /// Snap back to the identity transform.
    Reset,
    Shutdown,
}

pub struct GestureDriver {
    commands: Sender<DriverCommand>,
    thread: Option<JoinHandle<()>>,
}

impl GestureDriver {
    /// Starts the gesture thread. `scheduler` is woken whenever a
    /// notification is posted for the main thread.
    pub fn spawn(
        config: ZoomConfig,
        scheduler: Arc<dyn RuntimeScheduler>,
    ) -> Result<(Self, UiQueue<ZoomNotification>), ZoomError> {
        config.validate()?;
        let (dispatcher, queue) = ui_channel(scheduler);
        let (commands, receiver) = mpsc::channel();
        let thread = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || run_gesture_thread(config, receiver, dispatcher))
            .map_err(ZoomError::DriverSpawn)?;
        info!("spawned {THREAD_NAME} thread");
        Ok((
            Self {
                commands,
                thread: Some(thread),
            },
            queue,
        ))
    }

    pub fn send(&self, command: DriverCommand) -> Result<(), ZoomError> {
        self.commands
            .send(command)
            .map_err(|_| ZoomError::DriverStopped)
    }

    pub fn pointer(&self, event: PointerEvent) -> Result<(), ZoomError> {
        self.send(DriverCommand::Pointer(event))
    }

    pub fn gesture(&self, event: GestureEvent) -> Result<(), ZoomError> {
        self.send(DriverCommand::Gesture(event))
    }

    pub fn layout(&self, viewport: Size) -> Result<(), ZoomError> {
        self.send(DriverCommand::Layout(viewport))
    }

    pub fn set_disabled(&self, disabled: bool) -> Result<(), ZoomError> {
        self.send(DriverCommand::SetDisabled(disabled))
    }

    pub fn reset(&self) -> Result<(), ZoomError> {
        self.send(DriverCommand::Reset)
    }

    /// Stops the gesture thread and waits for it to exit.
    pub fn shutdown(mut self) -> Result<(), ZoomError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<(), ZoomError> {
        let Some(thread) = self.thread.take() else {
            return Ok(());
        };
        // The thread may already be gone; joining reports how it ended.
        let _ = self.commands.send(DriverCommand::Shutdown);
        thread.join().map_err(|_| ZoomError::DriverPanicked)
    }
}

impl Drop for GestureDriver {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            error!("{err}");
        }
    }
}

fn run_gesture_thread(
    config: ZoomConfig,
    receiver: Receiver<DriverCommand>,
    dispatcher: UiDispatcher<ZoomNotification>,
) {
    let mut engine = match PinchToZoomEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            error!("gesture thread could not start: {err}");
            return;
        }
    };
    let mut detector = ZoomGestureDetector::new();
    engine.handle_all(detector.set_enabled(!config.disabled));
    let clock = SystemClock;
    let epoch = clock.now();
    let frame_interval = Duration::from_nanos(FRAME_INTERVAL_NANOS);

    loop {
        let command = if engine.is_animating() {
            match receiver.recv_timeout(frame_interval) {
                Ok(command) => Some(command),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match receiver.recv() {
                Ok(command) => Some(command),
                Err(_) => break,
            }
        };

        match command {
            Some(DriverCommand::Shutdown) => break,
            Some(command) => apply_command(&mut engine, &mut detector, command),
            None => {}
        }

        if engine.is_animating() {
            engine.advance_frame(clock.elapsed_nanos(epoch));
        }
        detector.set_zoomed(engine.is_zoomed());
        let posted = engine.drain_notifications(|notification| dispatcher.post(notification));
        if posted > 0 {
            trace!("posted {posted} notifications");
        }
    }
    info!("{THREAD_NAME} thread stopped");
}

fn apply_command(
    engine: &mut PinchToZoomEngine,
    detector: &mut ZoomGestureDetector,
    command: DriverCommand,
) {
    match command {
        DriverCommand::Pointer(event) => engine.handle_all(detector.on_pointer_event(event)),
        DriverCommand::Gesture(event) => engine.handle(event),
        DriverCommand::Layout(viewport) => engine.set_viewport(viewport),
        DriverCommand::SetDisabled(disabled) => {
            engine.handle_all(detector.set_enabled(!disabled));
            engine.set_disabled(disabled);
        }
        DriverCommand::Reset => engine.reset(),
        DriverCommand::Shutdown => {}
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
