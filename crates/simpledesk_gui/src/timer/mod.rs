//! Countdown worker wiring.
//!
//! This module exposes the command/event protocol plus the worker spawn helper
//! used by the egui UI thread. The UI drains events each frame; the worker
//! never touches UI state.

mod protocol;
mod worker;

pub use protocol::{TimerCmd, TimerEvent};
pub use worker::{spawn_timer, spawn_timer_with_interval, TimerHandle, TICK_INTERVAL};
