//! # I/O Worker
//!
//! A dedicated thread that owns the device channel and reflects link
//! status into the event queue. It never touches UI state.
//!
//! The current body is a placeholder for a real protocol reader: it holds
//! the channel open and walks one fixed active/idle cycle. A real reader
//! replaces [`run`] with a read-or-timeout loop, keeping the surrounding
//! spawn/shutdown plumbing — every wait already goes through the shutdown
//! channel, so the main thread's join is bounded by one timeout tick.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use log::{info, warn};

use super::Channel;
use crate::core::event::Event;
use crate::core::queue::EventSender;

/// Handle to the worker thread. `shutdown` (or dropping the handle)
/// signals the thread and joins it.
pub struct Worker {
    shutdown: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Start the worker on its own thread. The channel handle moves into
    /// the thread and stays claimed until the worker exits.
    pub fn spawn<C>(
        channel: C,
        events: EventSender,
        spinup_delay: Duration,
        active_window: Duration,
    ) -> Worker
    where
        C: Channel + 'static,
    {
        let (shutdown_tx, shutdown_rx) = mpsc::channel();
        let handle = std::thread::spawn(move || {
            run(channel, events, shutdown_rx, spinup_delay, active_window);
        });
        Worker {
            shutdown: shutdown_tx,
            handle: Some(handle),
        }
    }

    /// Signal the thread to stop and wait for it to finish.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let _ = self.shutdown.send(());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("io worker thread panicked");
            }
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run<C: Channel>(
    channel: C,
    events: EventSender,
    shutdown: Receiver<()>,
    spinup_delay: Duration,
    active_window: Duration,
) {
    // Held for the thread's lifetime so the device stays claimed; the
    // placeholder cycle performs no reads.
    let _channel = channel;

    info!("io worker started");

    if wait(&shutdown, spinup_delay) {
        info!("io worker stopping before spinup");
        return;
    }
    publish(&events, true);

    if wait(&shutdown, active_window) {
        info!("io worker stopping mid-cycle");
        return;
    }
    publish(&events, false);

    info!("io worker cycle complete");
}

/// Interruptible sleep. Returns `true` when shutdown was requested (or the
/// handle vanished, which means the same thing).
fn wait(shutdown: &Receiver<()>, duration: Duration) -> bool {
    match shutdown.recv_timeout(duration) {
        Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
        Err(RecvTimeoutError::Timeout) => false,
    }
}

fn publish(events: &EventSender, active: bool) {
    // Non-blocking by contract: a full queue drops the notification and a
    // later one re-triggers the repaint.
    let _ = events.push(Event::WorkerStatus(active));
}
