//! The four panels. Each owns its state and talks to the outside world
//! only through the [`ApplicationContext`](super::context::ApplicationContext)
//! it is handed.

pub(super) mod notes;
pub(super) mod quick_files;
pub(super) mod timer;
pub(super) mod todo;

pub(super) use notes::NotesPanel;
pub(super) use quick_files::QuickFilesPanel;
pub(super) use timer::TimerPanel;
pub(super) use todo::TodoPanel;
