//! Shared constants used across SimpleDesk crates.

/// Application name used for window titles and dialog captions.
pub const APP_NAME: &str = "SimpleDesk";

/// Directory name appended to the home directory when no data dir is configured.
pub const DEFAULT_DATA_DIR_NAME: &str = ".simpledesk";
/// Sub-directory holding the JSON documents.
pub const DATA_SUBDIR_NAME: &str = "data";

/// Notes document file name.
pub const NOTES_FILE_NAME: &str = "notes.json";
/// To-do document file name.
pub const TODO_FILE_NAME: &str = "todos.json";
/// Quick-files document file name.
pub const QUICK_FILES_FILE_NAME: &str = "quick_files.json";

/// Default notes autosave delay in milliseconds.
pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 800;

/// Countdown value used at startup and by reset (25 minutes).
pub const DEFAULT_TIMER_SECONDS: u64 = 25 * 60;
/// Preset buttons offered by the timer panel, in minutes.
pub const TIMER_PRESETS_MINUTES: [u64; 3] = [25, 15, 5];

/// Default export file name suggested by the save dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "todos.txt";
