//! Notes buffer and debounced autosave bookkeeping.

use crate::error::AppError;
use crate::models::Note;
use crate::store::{Document, Mutation};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// The single free-text notes buffer mirrored to its JSON document.
#[derive(Debug)]
pub struct NotesStore {
    doc: Document<Note>,
}

impl NotesStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: Document::load(path, Note::default()),
        }
    }

    pub fn text(&self) -> &str {
        &self.doc.value().text
    }

    /// Editable buffer for the text widget. Edits stay in memory until [`NotesStore::save`].
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.doc.value_mut().text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.doc.value_mut().text = text.into();
    }

    /// Overwrite the document with the current buffer.
    pub fn save(&mut self) -> Mutation {
        self.doc.save()
    }

    pub fn is_dirty(&self) -> bool {
        self.doc.is_dirty()
    }

    pub fn path(&self) -> &Path {
        self.doc.path()
    }

    pub fn flush(&mut self) -> Option<Result<(), AppError>> {
        self.doc.flush()
    }
}

/// Quiet-period tracker for notes autosave.
///
/// Each change restarts the quiet period, so one save becomes due only after
/// `delay` has passed without further changes.
#[derive(Debug, Clone)]
pub struct AutosaveDebounce {
    delay: Duration,
    last_change: Option<Instant>,
}

impl AutosaveDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_change: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a change at `now`, superseding any pending save.
    pub fn record_change(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_change.is_some()
    }

    /// Drop the pending save, e.g. after a manual save.
    pub fn cancel(&mut self) {
        self.last_change = None;
    }

    /// Returns `true` exactly once per quiet period, when the save is due.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.last_change {
            Some(changed_at) if now.saturating_duration_since(changed_at) >= self.delay => {
                self.last_change = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending save is due, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let changed_at = self.last_change?;
        Some(
            self.delay
                .saturating_sub(now.saturating_duration_since(changed_at)),
        )
    }
}
