//! JSON document persistence.
//!
//! Every persisted concern lives in its own indented JSON file. Documents are
//! read once at startup and rewritten in full after each mutation; the
//! in-memory value is always the source of truth.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read and parse the JSON document at `path`, or return `default`.
///
/// Load failures are never surfaced: a missing file, an I/O error, or content
/// that does not parse as `T` all yield `default`. Only the log records which
/// of these happened.
pub fn load_or_default<T: DeserializeOwned>(path: &Path, default: T) -> T {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no document at {}; starting empty", path.display());
            return default;
        }
        Err(err) => {
            warn!("failed to read {}: {}; starting empty", path.display(), err);
            return default;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "ignoring unreadable document {}: {}; starting empty",
                path.display(),
                err
            );
            default
        }
    }
}

/// Serialize `value` as indented JSON and overwrite `path` with it.
///
/// # Errors
/// Returns [`AppError::Serialization`] when `value` cannot be encoded and
/// [`AppError::Storage`] naming the path when the write fails.
pub fn save_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)?;
    fs::write(path, rendered).map_err(|err| {
        AppError::Storage(format!("Failed to write {}: {}", path.display(), err))
    })
}

/// Result of a mutating operation on a [`Document`].
#[derive(Debug)]
pub enum Mutation {
    /// The operation was a no-op; nothing was written.
    Unchanged,
    /// The value changed and the file now mirrors it.
    Saved,
    /// The value changed in memory but writing it failed.
    Unsaved(AppError),
}

impl Mutation {
    /// `true` when the in-memory value changed, regardless of the write.
    pub fn changed(&self) -> bool {
        !matches!(self, Mutation::Unchanged)
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Mutation::Unsaved(err) => Some(err),
            _ => None,
        }
    }

    pub fn into_error(self) -> Option<AppError> {
        match self {
            Mutation::Unsaved(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Result<(), AppError>> for Mutation {
    fn from(result: Result<(), AppError>) -> Self {
        match result {
            Ok(()) => Mutation::Saved,
            Err(err) => Mutation::Unsaved(err),
        }
    }
}

/// One JSON file and the value it mirrors.
///
/// A failed write marks the document dirty; the next save retries the full
/// write and clears the flag on success.
#[derive(Debug)]
pub struct Document<T> {
    path: PathBuf,
    value: T,
    dirty: bool,
}

impl<T> Document<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load the document at `path`, substituting `default` on any failure.
    pub fn load(path: impl Into<PathBuf>, default: T) -> Self {
        let path = path.into();
        let value = load_or_default(&path, default);
        Self {
            path,
            value,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access without writing; pair with [`Document::save`].
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rewrite the whole file from the in-memory value.
    pub fn save(&mut self) -> Mutation {
        match save_document(&self.path, &self.value) {
            Ok(()) => {
                self.dirty = false;
                Mutation::Saved
            }
            Err(err) => {
                warn!("save failed for {}: {}", self.path.display(), err);
                self.dirty = true;
                Mutation::Unsaved(err)
            }
        }
    }

    /// Apply `edit` and persist when it reports a change.
    ///
    /// `edit` returns `false` for a no-op, in which case nothing is written.
    pub fn modify<F>(&mut self, edit: F) -> Mutation
    where
        F: FnOnce(&mut T) -> bool,
    {
        if !edit(&mut self.value) {
            return Mutation::Unchanged;
        }
        self.save()
    }

    /// Retry the write if the last one failed.
    ///
    /// # Returns
    /// `None` when the document is clean, otherwise the retry result.
    pub fn flush(&mut self) -> Option<Result<(), AppError>> {
        if !self.dirty {
            return None;
        }
        Some(match self.save() {
            Mutation::Unsaved(err) => Err(err),
            _ => Ok(()),
        })
    }
}
