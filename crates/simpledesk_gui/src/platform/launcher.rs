//! Opening files with the desktop's default application.

use std::io;
use std::path::Path;

pub trait Launcher {
    /// Open `path` exactly as stored.
    fn open(&self, path: &str) -> io::Result<()>;
}

/// Delegates to `open`, which picks the platform mechanism
/// (`ShellExecute`, `open`, or `xdg-open` and friends).
///
/// The helper process is detached and its exit status is never seen, so a
/// path that no longer exists is rejected here instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, path: &str) -> io::Result<()> {
        if !Path::new(path).try_exists()? {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "file does not exist",
            ));
        }
        open::that_detached(path)
    }
}
