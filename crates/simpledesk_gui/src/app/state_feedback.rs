//! Status-line feedback helpers.

use super::{SimpleDeskApp, StatusMessage, STATUS_TTL};
use std::time::Instant;

impl SimpleDeskApp {
    /// Show `text` in the status bar until [`STATUS_TTL`] elapses.
    pub(super) fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    /// Applies a panel's optional status text.
    pub(super) fn apply_status(&mut self, text: Option<String>) {
        if let Some(text) = text {
            self.set_status(text);
        }
    }

    pub(super) fn expire_status(&mut self, now: Instant) {
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }
    }

    pub(super) fn status_text(&self) -> &str {
        self.status
            .as_ref()
            .map(|status| status.text.as_str())
            .unwrap_or("Ready")
    }
}
