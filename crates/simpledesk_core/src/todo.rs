//! To-do list operations and plain-text export.

use crate::error::AppError;
use crate::models::TodoItem;
use crate::store::{Document, Mutation};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Ordered to-do list mirrored to its JSON document.
///
/// Items are addressed by position; operations given `None` or an index past
/// the end are no-ops and leave the file untouched.
#[derive(Debug)]
pub struct TodoStore {
    doc: Document<Vec<TodoItem>>,
}

impl TodoStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: Document::load(path, Vec::new()),
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        self.doc.value()
    }

    pub fn len(&self) -> usize {
        self.doc.value().len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc.value().is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.doc.is_dirty()
    }

    pub fn path(&self) -> &Path {
        self.doc.path()
    }

    /// Append a new open item holding the trimmed `text`.
    ///
    /// Blank input (empty after trimming) is ignored.
    pub fn add(&mut self, text: &str) -> Mutation {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Mutation::Unchanged;
        }
        self.doc.modify(|items| {
            items.push(TodoItem::new(trimmed));
            true
        })
    }

    /// Mark the item at `index` as done.
    ///
    /// An item that is already done is rewritten anyway, matching a fresh
    /// completion.
    pub fn mark_done(&mut self, index: Option<usize>) -> Mutation {
        let Some(index) = index else {
            return Mutation::Unchanged;
        };
        self.doc.modify(|items| match items.get_mut(index) {
            Some(item) => {
                item.done = true;
                true
            }
            None => false,
        })
    }

    /// Remove the item at `index`.
    pub fn delete(&mut self, index: Option<usize>) -> Mutation {
        let Some(index) = index else {
            return Mutation::Unchanged;
        };
        self.doc.modify(|items| {
            if index < items.len() {
                items.remove(index);
                true
            } else {
                false
            }
        })
    }

    /// Write the plain-text export of the current list to `destination`.
    ///
    /// # Errors
    /// Returns [`AppError::Export`] naming the destination when the write fails.
    pub fn export_to(&self, destination: &Path) -> Result<(), AppError> {
        fs::write(destination, render_export(self.items())).map_err(|err| {
            AppError::Export(format!("{}: {}", destination.display(), err))
        })?;
        info!(
            "exported {} to-do items to {}",
            self.len(),
            destination.display()
        );
        Ok(())
    }

    /// Retry a failed write; see [`Document::flush`].
    pub fn flush(&mut self) -> Option<Result<(), AppError>> {
        self.doc.flush()
    }
}

/// Render `items` as export text: one newline-terminated `[x]`/`[ ]` line each.
pub fn render_export(items: &[TodoItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&item.export_line());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::load_or_default;
    use crate::test_support::blocked_path;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, TodoStore) {
        let dir = TempDir::new().expect("temp dir");
        let store = TodoStore::open(dir.path().join("todos.json"));
        (dir, store)
    }

    fn on_disk(store: &TodoStore) -> Vec<TodoItem> {
        load_or_default(store.path(), Vec::new())
    }

    #[test]
    fn add_trims_and_appends_in_order() {
        let (_dir, mut store) = open_store();
        assert!(store.add("  first ").changed());
        assert!(store.add("second").changed());

        let expected = vec![TodoItem::new("first"), TodoItem::new("second")];
        assert_eq!(store.items(), expected.as_slice());
        assert_eq!(on_disk(&store), expected);
    }

    #[test]
    fn add_ignores_blank_text() {
        let (_dir, mut store) = open_store();
        assert!(!store.add("").changed());
        assert!(!store.add("   ").changed());
        assert!(!store.add("\t\n").changed());
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn duplicates_are_kept() {
        let (_dir, mut store) = open_store();
        store.add("same");
        store.add("same");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn document_mirrors_memory_after_every_operation() {
        let (_dir, mut store) = open_store();
        store.add("a");
        assert_eq!(on_disk(&store), store.items());
        store.add("b");
        assert_eq!(on_disk(&store), store.items());
        store.add("c");
        assert_eq!(on_disk(&store), store.items());
        store.mark_done(Some(1));
        assert_eq!(on_disk(&store), store.items());
        store.delete(Some(0));
        assert_eq!(on_disk(&store), store.items());
        store.mark_done(Some(1));
        assert_eq!(on_disk(&store), store.items());

        assert_eq!(
            store.items(),
            &[
                TodoItem {
                    text: "b".to_string(),
                    done: true,
                },
                TodoItem {
                    text: "c".to_string(),
                    done: true,
                },
            ]
        );
    }

    #[test]
    fn no_selection_and_out_of_range_are_no_ops() {
        let (_dir, mut store) = open_store();
        store.add("only");
        let before = std::fs::read_to_string(store.path()).expect("read");

        assert!(!store.mark_done(None).changed());
        assert!(!store.delete(None).changed());
        assert!(!store.mark_done(Some(5)).changed());
        assert!(!store.delete(Some(1)).changed());

        assert_eq!(store.items(), &[TodoItem::new("only")]);
        let after = std::fs::read_to_string(store.path()).expect("read");
        assert_eq!(before, after);
    }

    #[test]
    fn render_export_matches_line_format() {
        let items = vec![
            TodoItem::new("a"),
            TodoItem {
                text: "b".to_string(),
                done: true,
            },
        ];
        assert_eq!(render_export(&items), "[ ] a\n[x] b\n");
        assert_eq!(render_export(&[]), "");
    }

    #[test]
    fn export_to_writes_file() {
        let (dir, mut store) = open_store();
        store.add("a");
        store.add("b");
        store.mark_done(Some(1));

        let destination = dir.path().join("export.txt");
        store.export_to(&destination).expect("export");
        let raw = std::fs::read_to_string(&destination).expect("read export");
        assert_eq!(raw, "[ ] a\n[x] b\n");
    }

    #[test]
    fn export_to_reports_destination_on_failure() {
        let (dir, mut store) = open_store();
        store.add("a");
        let destination = blocked_path(dir.path(), "export.txt");

        let err = store.export_to(&destination).expect_err("blocked");
        assert!(matches!(err, AppError::Export(_)));
        assert!(err.to_string().contains("export.txt"), "got {}", err);
    }

    #[test]
    fn reopen_loads_saved_list() {
        let (dir, mut store) = open_store();
        store.add("persist me");
        store.mark_done(Some(0));

        let reopened = TodoStore::open(dir.path().join("todos.json"));
        assert_eq!(reopened.items(), store.items());
    }
}
