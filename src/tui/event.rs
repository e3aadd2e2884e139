//! Translation from crossterm input to core events.
//!
//! Core types stay free of crossterm; this is the only place the two
//! vocabularies meet. Anything without a core meaning (mouse, focus,
//! paste) translates to `None` and never reaches the queue.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode as CrosstermKeyCode, KeyEventKind, KeyModifiers,
};

use crate::core::event::{Event, Key, KeyCode, Modifiers};

/// Translate one low-level terminal event into a core event.
pub fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key_event) => {
            let key = Key {
                code: translate_code(key_event.code)?,
                mods: translate_modifiers(key_event.modifiers),
            };
            match key_event.kind {
                // Auto-repeat is a stream of presses as far as the core cares.
                KeyEventKind::Press | KeyEventKind::Repeat => Some(Event::KeyPress(key)),
                KeyEventKind::Release => Some(Event::KeyRelease(key)),
            }
        }
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

fn translate_code(code: CrosstermKeyCode) -> Option<KeyCode> {
    match code {
        CrosstermKeyCode::Char(c) => Some(KeyCode::Char(c)),
        CrosstermKeyCode::Enter => Some(KeyCode::Enter),
        CrosstermKeyCode::Esc => Some(KeyCode::Escape),
        CrosstermKeyCode::Backspace => Some(KeyCode::Backspace),
        CrosstermKeyCode::Tab => Some(KeyCode::Tab),
        CrosstermKeyCode::Up => Some(KeyCode::Up),
        CrosstermKeyCode::Down => Some(KeyCode::Down),
        CrosstermKeyCode::Left => Some(KeyCode::Left),
        CrosstermKeyCode::Right => Some(KeyCode::Right),
        _ => None,
    }
}

fn translate_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}
