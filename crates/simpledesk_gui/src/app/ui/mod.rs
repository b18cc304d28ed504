//! Window chrome around the active panel.

/// Menu bar and tab strip.
pub(super) mod top_bar;
/// Bottom status bar content.
pub(super) mod status_bar;
