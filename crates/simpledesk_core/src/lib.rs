//! Core domain library for SimpleDesk (config, JSON documents, panel state).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across SimpleDesk crates.
pub mod constants;
/// Process-global environment mutation helpers.
pub mod env;
/// Application error types.
pub mod error;
/// Persisted data models.
pub mod models;
/// Notes buffer and debounced autosave bookkeeping.
pub mod notes;
/// Quick-file launcher list.
pub mod quick_files;
/// JSON document persistence.
pub mod store;
/// Countdown timer state machine.
pub mod timer;
/// To-do list operations and plain-text export.
pub mod todo;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use error::AppError;
pub use notes::{AutosaveDebounce, NotesStore};
pub use quick_files::QuickFilesStore;
pub use store::{load_or_default, save_document, Document, Mutation};
pub use timer::{format_clock, Countdown, StartOutcome, Tick, TimerPhase};
pub use todo::{render_export, TodoStore};
