//! Persisted document shapes.

/// Singleton notes document.
pub mod note;
/// To-do list entries.
pub mod todo;

pub use note::Note;
pub use todo::TodoItem;

/// Quick-file entries are stored verbatim as path strings.
pub type QuickFileEntry = String;

#[cfg(test)]
mod tests;
