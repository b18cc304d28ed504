//! Quick-file launcher list.

use crate::error::AppError;
use crate::models::QuickFileEntry;
use crate::store::{Document, Mutation};
use std::path::{Path, PathBuf};

/// Ordered list of file paths mirrored to its JSON document.
///
/// Paths are stored exactly as chosen; duplicates are allowed.
#[derive(Debug)]
pub struct QuickFilesStore {
    doc: Document<Vec<QuickFileEntry>>,
}

impl QuickFilesStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: Document::load(path, Vec::new()),
        }
    }

    pub fn entries(&self) -> &[QuickFileEntry] {
        self.doc.value()
    }

    /// Stored path at `index`, unmodified.
    pub fn get(&self, index: Option<usize>) -> Option<&str> {
        index
            .and_then(|index| self.doc.value().get(index))
            .map(String::as_str)
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

    pub fn add(&mut self, entry: impl Into<QuickFileEntry>) -> Mutation {
        let entry = entry.into();
        self.doc.modify(|entries| {
            entries.push(entry);
            true
        })
    }

    pub fn remove(&mut self, index: Option<usize>) -> Mutation {
        let Some(index) = index else {
            return Mutation::Unchanged;
        };
        self.doc.modify(|entries| {
            if index < entries.len() {
                entries.remove(index);
                true
            } else {
                false
            }
        })
    }

    pub fn flush(&mut self) -> Option<Result<(), AppError>> {
        self.doc.flush()
    }
}
