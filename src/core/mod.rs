//! # Core Application Logic
//!
//! This module contains serimon's business logic.
//! It knows nothing about any specific UI technology or device transport.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Event (what happens) │
//!                    │  • update() (reducer)   │
//!                    │  • EventQueue (merge)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  I/O       │
//!           │  Adapter   │              │  Worker    │
//!           │ (ratatui)  │              │ (serial)   │
//!           └────────────┘              └────────────┘
//! ```
//!
//! Both adapters talk to the core exclusively through the [`queue`]:
//! the TUI's input pump and the device worker push [`event::Event`]s,
//! the main loop drains them into [`state::App`] via [`event::update`].
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`event`]: The `Event` enum and the `update` reducer
//! - [`queue`]: The multi-producer, single-consumer event queue
//! - [`config`]: Compiled-in defaults and the resolved runtime config
//! - [`sensor`]: Declared device-channel model (protocol extension point)

pub mod config;
pub mod event;
pub mod queue;
pub mod sensor;
pub mod state;
