//! Shared test-only helpers for simpledesk_core.

use std::fs;
use std::path::{Path, PathBuf};

const BLOCKER_NAME: &str = "blocked";

/// Returns `root/blocked/<file_name>` where `root/blocked` is a regular file,
/// so any write to the returned path fails.
///
/// # Panics
/// Panics if the blocker file cannot be created.
pub(crate) fn blocked_path(root: &Path, file_name: &str) -> PathBuf {
    let blocker = root.join(BLOCKER_NAME);
    fs::write(&blocker, "not a directory").expect("write blocker file");
    blocker.join(file_name)
}

/// Replaces the blocker created by [`blocked_path`] with a real directory.
///
/// # Panics
/// Panics if the blocker cannot be swapped for a directory.
pub(crate) fn unblock(root: &Path) {
    let blocker = root.join(BLOCKER_NAME);
    fs::remove_file(&blocker).expect("remove blocker file");
    fs::create_dir(&blocker).expect("create blocker dir");
}
