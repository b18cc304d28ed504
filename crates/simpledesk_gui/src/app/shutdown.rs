//! Shutdown save-flush logic for `SimpleDeskApp`.

use super::SimpleDeskApp;
use tracing::{info, warn};

impl SimpleDeskApp {
    /// Writes a pending notes autosave and retries every dirty document once.
    ///
    /// Failures are only logged; no dialogs are shown while closing.
    ///
    /// # Returns
    /// `true` when nothing was left unsaved.
    pub(super) fn flush_pending_saves_for_shutdown(&mut self) -> bool {
        let results = [
            ("notes", self.notes.flush()),
            ("to-dos", self.todo.flush()),
            ("quick files", self.quick_files.flush()),
        ];
        let mut clean = true;
        for (document, result) in results {
            match result {
                None => {}
                Some(Ok(())) => info!(document, "saved pending changes on shutdown"),
                Some(Err(err)) => {
                    clean = false;
                    warn!(document, error = %err, "Shutdown flush could not save document.");
                }
            }
        }
        clean
    }
}
