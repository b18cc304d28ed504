//! Free-text notes with debounced autosave.

use super::super::context::ApplicationContext;
use super::super::style::NOTES_TEXT_STYLE;
use eframe::egui;
use simpledesk_core::{AppError, AutosaveDebounce, Mutation, NotesStore};
use std::time::{Duration, Instant};
use tracing::debug;

pub(crate) struct NotesPanel {
    store: NotesStore,
    autosave: AutosaveDebounce,
}

impl NotesPanel {
    pub(crate) fn new(context: &ApplicationContext) -> Self {
        let config = context.config();
        Self {
            store: NotesStore::open(config.notes_path()),
            autosave: AutosaveDebounce::new(config.autosave_delay()),
        }
    }

    #[cfg(test)]
    pub(crate) fn text(&self) -> &str {
        self.store.text()
    }

    #[cfg(test)]
    pub(crate) fn set_text(&mut self, text: &str) {
        self.store.set_text(text);
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    #[cfg(test)]
    pub(crate) fn autosave_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    /// Record a buffer edit; restarts the autosave quiet period.
    pub(crate) fn note_edited(&mut self, now: Instant) {
        self.autosave.record_change(now);
    }

    /// Save if the quiet period after the last edit has elapsed.
    pub(crate) fn poll_autosave(
        &mut self,
        context: &ApplicationContext,
        now: Instant,
    ) -> Option<String> {
        if !self.autosave.take_due(now) {
            return None;
        }
        debug!("notes autosave due");
        self.write(context)
    }

    /// Save immediately, dropping any pending autosave.
    pub(crate) fn save_now(&mut self, context: &ApplicationContext) -> Option<String> {
        self.autosave.cancel();
        self.write(context)
    }

    fn write(&mut self, context: &ApplicationContext) -> Option<String> {
        match self.store.save() {
            Mutation::Saved => Some(format!(
                "Notes saved at {}",
                chrono::Local::now().format("%H:%M:%S")
            )),
            failed => {
                context.report(failed);
                None
            }
        }
    }

    /// Time until the pending autosave is due.
    pub(crate) fn repaint_after(&self, now: Instant) -> Option<Duration> {
        self.autosave.remaining(now)
    }

    /// Shutdown flush: write a pending autosave, or retry a failed one.
    pub(crate) fn flush(&mut self) -> Option<Result<(), AppError>> {
        if self.autosave.is_pending() {
            self.autosave.cancel();
            return Some(match self.store.save() {
                Mutation::Unsaved(err) => Err(err),
                _ => Ok(()),
            });
        }
        self.store.flush()
    }

    pub(crate) fn show(&mut self, ui: &mut egui::Ui) {
        let response = ui.add_sized(
            ui.available_size(),
            egui::TextEdit::multiline(self.store.buffer_mut())
                .font(egui::TextStyle::Name(NOTES_TEXT_STYLE.into()))
                .hint_text("Write anything here. It is saved automatically.")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.note_edited(Instant::now());
        }
    }
}
