//! Process-wide application context handed to every panel.

use crate::platform::{Dialogs, Launcher, NativeDialogs, SystemLauncher};
use simpledesk_core::{Config, Mutation};

/// Everything panels need from outside their own state.
///
/// Built once at startup and passed explicitly to panel constructors and
/// operations; there is no global window object.
pub(crate) struct ApplicationContext {
    config: Config,
    dialogs: Box<dyn Dialogs>,
    launcher: Box<dyn Launcher>,
}

impl ApplicationContext {
    pub(crate) fn new(
        config: Config,
        dialogs: Box<dyn Dialogs>,
        launcher: Box<dyn Launcher>,
    ) -> Self {
        Self {
            config,
            dialogs,
            launcher,
        }
    }

    /// Context wired to the real desktop dialogs and OS opener.
    pub(crate) fn native(config: Config) -> Self {
        Self::new(config, Box::new(NativeDialogs), Box::new(SystemLauncher))
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn dialogs(&self) -> &dyn Dialogs {
        self.dialogs.as_ref()
    }

    pub(crate) fn launcher(&self) -> &dyn Launcher {
        self.launcher.as_ref()
    }

    pub(crate) fn show_info(&self, message: &str) {
        self.dialogs.info(message);
    }

    pub(crate) fn show_error(&self, message: &str) {
        self.dialogs.error(message);
    }

    /// Surface a failed write as a blocking error dialog.
    ///
    /// # Returns
    /// `true` when the in-memory value changed, whether or not it was saved.
    pub(crate) fn report(&self, mutation: Mutation) -> bool {
        let changed = mutation.changed();
        if let Some(err) = mutation.into_error() {
            self.show_error(&format!("Could not save:\n{}", err));
        }
        changed
    }
}
