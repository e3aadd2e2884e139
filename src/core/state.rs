//! # Application State
//!
//! Core business state for serimon. This module contains domain state only,
//! no TUI-specific types. Presentation decisions live in the `tui` module.
//!
//! ```text
//! App
//! ├── should_quit: bool       // Running → Quitting latch
//! ├── selected_index: usize   // current selection (not key-driven yet)
//! └── worker_active: bool     // link status reported by the I/O worker
//! ```
//!
//! State changes only happen through `update(app, event)` in event.rs, on
//! the main thread. The worker never touches this struct; its status
//! arrives as queued `WorkerStatus` events, so there is exactly one writer
//! and no locking.

pub struct App {
    pub should_quit: bool,
    pub selected_index: usize,
    pub worker_active: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            selected_index: 0,
            worker_active: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
