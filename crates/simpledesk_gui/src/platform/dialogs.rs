//! Modal dialogs backed by the platform's native dialog service.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use simpledesk_core::constants::APP_NAME;
use std::path::PathBuf;

/// Blocking dialog primitives used by the panels.
///
/// `None` from a picker means the user cancelled.
pub trait Dialogs {
    fn pick_file(&self, title: &str) -> Option<PathBuf>;
    fn save_text_file(&self, title: &str, default_name: &str) -> Option<PathBuf>;
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// [`Dialogs`] implemented with `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl NativeDialogs {
    fn message(level: MessageLevel, message: &str) {
        let _ = MessageDialog::new()
            .set_level(level)
            .set_title(APP_NAME)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Dialogs for NativeDialogs {
    fn pick_file(&self, title: &str) -> Option<PathBuf> {
        FileDialog::new().set_title(title).pick_file()
    }

    fn save_text_file(&self, title: &str, default_name: &str) -> Option<PathBuf> {
        FileDialog::new()
            .set_title(title)
            .set_file_name(default_name)
            .add_filter("Text", &["txt"])
            .save_file()
    }

    fn info(&self, message: &str) {
        Self::message(MessageLevel::Info, message);
    }

    fn error(&self, message: &str) {
        Self::message(MessageLevel::Error, message);
    }
}
