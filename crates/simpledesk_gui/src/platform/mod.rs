//! Seams to the host desktop: modal dialogs and the OS file opener.

mod dialogs;
mod launcher;

pub use dialogs::{Dialogs, NativeDialogs};
pub use launcher::{Launcher, SystemLauncher};
