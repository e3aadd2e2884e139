//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal session, pumps input into
//! the event queue, and runs the render/update loop.
//!
//! This is the only module that knows about ratatui and crossterm; the
//! core stays presentation-agnostic.
//!
//! ## Event loop
//!
//! One blocking pop, then a full drain, then at most one draw:
//!
//! ```text
//! sleep on queue → apply every buffered event → quit? → draw once → sleep
//! ```
//!
//! Draining before drawing coalesces bursts (a resize chased by a worker
//! notification) into a single frame, so render cost is bounded per wake,
//! not per event.
//!
//! ## Teardown order
//!
//! Loop errors return to [`run`] instead of unwinding, so the shutdown
//! sequence runs on the quit path and on error paths alike: join the
//! worker, drop the queue consumer (which unblocks a pump stuck on a full
//! queue), join the pump, and only then let the guard restore the screen.

mod event;
mod input;
pub mod ui;

use std::io::stdout;

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{info, warn};
use ratatui::DefaultTerminal;
use serialport::SerialPort;

use crate::core::config::ResolvedConfig;
use crate::core::event::update;
use crate::core::queue::{self, EventQueue};
use crate::core::state::App;
use crate::device::Worker;
use crate::tui::input::InputPump;

/// Scoped terminal-session teardown. Restores the user's terminal on every
/// exit path: normal quit, error propagation, and (via ratatui's hook)
/// panics.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> TerminalGuard {
        // Key-release reporting needs the enhancement protocol. Best
        // effort: terminals without it ignore the push and simply never
        // report releases.
        let _ = execute!(
            stdout(),
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        );
        TerminalGuard
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        ratatui::restore();
    }
}

pub fn run(config: ResolvedConfig, port: Box<dyn SerialPort>) -> std::io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let _guard = TerminalGuard::new();

    let (events, queue) = queue::channel(config.queue_capacity);
    let pump = InputPump::spawn(events.clone());
    let worker = Worker::spawn(port, events, config.spinup_delay, config.active_window);

    let mut app = App::new();
    let result = event_loop(&mut terminal, &queue, &mut app);

    info!("shutting down");
    worker.shutdown();
    drop(queue);
    pump.shutdown();
    result
    // _guard drops here, after both threads are joined.
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    queue: &EventQueue,
    app: &mut App,
) -> std::io::Result<()> {
    loop {
        let first = match queue.blocking_pop() {
            Ok(event) => event,
            Err(_) => {
                // Every producer is gone; no event can ever arrive again.
                warn!("all event producers disconnected, leaving main loop");
                return Ok(());
            }
        };

        // Apply the whole backlog before rendering.
        for event in std::iter::once(first).chain(std::iter::from_fn(|| queue.try_pop())) {
            update(app, event);
        }

        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|frame| ui::draw_ui(frame, app))?;
    }
}
