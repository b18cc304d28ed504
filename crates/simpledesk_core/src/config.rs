//! Configuration loading from environment variables.

use crate::constants::{
    DATA_SUBDIR_NAME, DEFAULT_AUTOSAVE_DELAY_MS, DEFAULT_DATA_DIR_NAME, NOTES_FILE_NAME,
    QUICK_FILES_FILE_NAME, TODO_FILE_NAME,
};
use crate::error::AppError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the document directory.
pub const DATA_DIR_ENV: &str = "SIMPLEDESK_DATA_DIR";
/// Environment variable overriding the notes autosave delay (milliseconds).
pub const AUTOSAVE_MS_ENV: &str = "SIMPLEDESK_AUTOSAVE_MS";

/// Runtime configuration for SimpleDesk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub autosave_delay_ms: u64,
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Home directory from `HOME`, `USERPROFILE`, or `HOMEDRIVE`+`HOMEPATH`,
/// falling back to the working directory.
fn home_dir() -> Option<PathBuf> {
    non_blank_var("HOME")
        .or_else(|| non_blank_var("USERPROFILE"))
        .or_else(|| Some(non_blank_var("HOMEDRIVE")? + &non_blank_var("HOMEPATH")?))
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok())
}

/// `~/rest` becomes `<home>/rest`; anything else is used as given.
fn expand_home(raw: String) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or unparsable.
    pub fn from_env() -> Self {
        Self {
            data_dir: non_blank_var(DATA_DIR_ENV)
                .map(expand_home)
                .unwrap_or_else(default_data_dir),
            autosave_delay_ms: env::var(AUTOSAVE_MS_ENV)
                .ok()
                .and_then(|ms| ms.trim().parse().ok())
                .unwrap_or(DEFAULT_AUTOSAVE_DELAY_MS),
        }
    }

    /// Build a config rooted at `data_dir` with default timings.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            autosave_delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
        }
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join(NOTES_FILE_NAME)
    }

    pub fn todo_path(&self) -> PathBuf {
        self.data_dir.join(TODO_FILE_NAME)
    }

    pub fn quick_files_path(&self) -> PathBuf {
        self.data_dir.join(QUICK_FILES_FILE_NAME)
    }

    /// Create the document directory if it does not exist yet.
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] naming the directory when creation fails.
    pub fn ensure_data_dir(&self) -> Result<(), AppError> {
        create_dir(&self.data_dir)
    }
}

fn default_data_dir() -> PathBuf {
    let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(DEFAULT_DATA_DIR_NAME).join(DATA_SUBDIR_NAME)
}

fn create_dir(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path).map_err(|err| {
        AppError::Storage(format!(
            "Failed to create data directory {}: {}",
            path.display(),
            err
        ))
    })
}
