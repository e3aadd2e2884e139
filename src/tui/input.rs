//! Terminal input pump.
//!
//! crossterm exposes input as a pollable source, so the terminal session
//! runs a reader thread that polls, translates, and forwards typed events
//! into the queue. Keystrokes use the blocking (lossless) send; the pump
//! checks its stop flag between polls, so shutdown latency is bounded by
//! one poll interval.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event;
use log::{error, warn};

use crate::core::queue::EventSender;
use crate::tui::event::translate;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Handle to the input pump thread. `shutdown` (or dropping the handle)
/// stops and joins it.
pub struct InputPump {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputPump {
    pub fn spawn(events: EventSender) -> InputPump {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = std::thread::spawn(move || run(events, flag));
        InputPump {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the pump and wait for it to finish.
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("input pump thread panicked");
            }
        }
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

fn run(events: EventSender, stop: Arc<AtomicBool>) {
    while !stop.load(Ordering::Relaxed) {
        match event::poll(POLL_INTERVAL) {
            Ok(false) => {}
            Ok(true) => match event::read() {
                Ok(raw) => {
                    if let Some(translated) = translate(raw) {
                        if !events.send(translated) {
                            // Consumer gone: the main loop has already moved on.
                            break;
                        }
                    }
                }
                Err(e) => {
                    error!("terminal input read failed: {e}");
                    break;
                }
            },
            Err(e) => {
                error!("terminal input poll failed: {e}");
                break;
            }
        }
    }
}
