//! # Events
//!
//! Everything that can happen in serimon becomes an [`Event`].
//! User presses a key? That's `Event::KeyPress(key)`.
//! The worker's link comes up? That's `Event::WorkerStatus(true)`.
//!
//! The [`update`] function takes the current state and an event and folds
//! the event in. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Event  →  update()  →  New State
//! ```
//!
//! Events are produced by the terminal input pump and the device worker,
//! pushed through the [`crate::core::queue`], and consumed exactly once by
//! the main loop. They carry no references and are `Copy`: created, queued,
//! applied, dropped.

use log::{debug, info};

use crate::core::state::App;

// ============================================================================
// Key model
// ============================================================================

/// Modifier flags attached to a key. Matching is exact: `q` with Ctrl held
/// is a different key than a bare `q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false, alt: false, shift: false };
    pub const CTRL: Modifiers = Modifiers { ctrl: true, alt: false, shift: false };
}

/// A printable or control code. Only codes the application can bind are
/// modeled; anything else never leaves the translation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

/// A key code plus its modifier flags. Equality is by the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub mods: Modifiers,
}

impl Key {
    /// A bare printable key, no modifiers.
    pub fn char(c: char) -> Key {
        Key { code: KeyCode::Char(c), mods: Modifiers::NONE }
    }

    /// A printable key with Ctrl held.
    pub fn ctrl(c: char) -> Key {
        Key { code: KeyCode::Char(c), mods: Modifiers::CTRL }
    }

    /// The quit bindings: Ctrl-C, or the letter `q` with no modifiers.
    pub fn is_quit(&self) -> bool {
        matches!(
            (self.code, self.mods),
            (KeyCode::Char('c'), Modifiers::CTRL) | (KeyCode::Char('q'), Modifiers::NONE)
        )
    }
}

// ============================================================================
// Events
// ============================================================================

/// The tagged union merged through the event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key went down (terminals that report repeats fold them in here).
    KeyPress(Key),
    /// A key came back up. Reserved; nothing binds on release yet.
    KeyRelease(Key),
    /// The terminal window changed size to (width, height).
    Resize(u16, u16),
    /// Pure wake signal: repaint without any state change.
    Redraw,
    /// The device worker's link status changed.
    WorkerStatus(bool),
}

// ============================================================================
// Reducer
// ============================================================================

/// Fold one event into the application state.
///
/// The caller drains the queue and applies every buffered event before
/// rendering, so a burst (a resize chased by a worker notification)
/// produces a single frame.
pub fn update(app: &mut App, event: Event) {
    match event {
        Event::KeyPress(key) if key.is_quit() => {
            info!("quit requested via {:?}", key.code);
            app.should_quit = true;
        }
        // Hook point for navigation bindings; the selection index is not
        // key-driven yet.
        Event::KeyPress(_) => {}
        Event::KeyRelease(_) => {}
        Event::Resize(w, h) => {
            // The terminal reapplies geometry on the next draw; the event's
            // job is to force that draw.
            debug!("terminal resized to {w}x{h}");
        }
        Event::Redraw => {}
        Event::WorkerStatus(active) => {
            debug!("worker link status: active={active}");
            app.worker_active = active;
        }
    }
}
