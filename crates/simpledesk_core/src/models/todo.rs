//! To-do entry model.

use serde::{Deserialize, Serialize};

/// One to-do entry. Identity is its position in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl TodoItem {
    /// Creates an open (not done) item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    /// Export line without the trailing newline, e.g. `[x] buy milk`.
    pub fn export_line(&self) -> String {
        let mark = if self.done { "[x]" } else { "[ ]" };
        format!("{} {}", mark, self.text)
    }

    /// Label shown in the to-do list widget.
    pub fn display_label(&self) -> String {
        let mark = if self.done { "✔ " } else { "• " };
        format!("{}{}", mark, self.text)
    }
}
