//! App-level tests driving panels through scripted dialogs and a fake timer worker.

use super::*;
use crate::platform::{Dialogs, Launcher};
use crate::timer::{TimerCmd, TimerEvent, TimerHandle};
use crossbeam_channel::{unbounded, Receiver, Sender};
use simpledesk_core::load_or_default;
use simpledesk_core::models::{Note, TodoItem};
use simpledesk_core::Countdown;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

mod quick_files_and_timer;

#[derive(Default)]
struct DialogScript {
    picks: VecDeque<Option<PathBuf>>,
    saves: VecDeque<Option<PathBuf>>,
    infos: Vec<String>,
    errors: Vec<String>,
}

/// Dialogs answered from queued responses; an empty queue means "cancelled".
#[derive(Clone, Default)]
struct ScriptedDialogs(Rc<RefCell<DialogScript>>);

impl ScriptedDialogs {
    fn queue_pick(&self, path: Option<PathBuf>) {
        self.0.borrow_mut().picks.push_back(path);
    }

    fn queue_save(&self, path: Option<PathBuf>) {
        self.0.borrow_mut().saves.push_back(path);
    }

    fn infos(&self) -> Vec<String> {
        self.0.borrow().infos.clone()
    }

    fn errors(&self) -> Vec<String> {
        self.0.borrow().errors.clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn pick_file(&self, _title: &str) -> Option<PathBuf> {
        self.0.borrow_mut().picks.pop_front().flatten()
    }

    fn save_text_file(&self, _title: &str, _default_name: &str) -> Option<PathBuf> {
        self.0.borrow_mut().saves.pop_front().flatten()
    }

    fn info(&self, message: &str) {
        self.0.borrow_mut().infos.push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.0.borrow_mut().errors.push(message.to_string());
    }
}

#[derive(Clone, Default)]
struct RecordingLauncher {
    opened: Rc<RefCell<Vec<String>>>,
    fail: Rc<Cell<bool>>,
}

impl RecordingLauncher {
    fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn open(&self, path: &str) -> io::Result<()> {
        if self.fail.get() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no handler"));
        }
        self.opened.borrow_mut().push(path.to_string());
        Ok(())
    }
}

struct TestHarness {
    _dir: TempDir,
    app: SimpleDeskApp,
    dialogs: ScriptedDialogs,
    launcher: RecordingLauncher,
    cmd_rx: Receiver<TimerCmd>,
    evt_tx: Sender<TimerEvent>,
}

impl TestHarness {
    fn data_dir(&self) -> PathBuf {
        self.app.context.config().data_dir.clone()
    }

    fn stored_todos(&self) -> Vec<TodoItem> {
        load_or_default(&self.app.context.config().todo_path(), Vec::new())
    }

    fn stored_quick_files(&self) -> Vec<String> {
        load_or_default(&self.app.context.config().quick_files_path(), Vec::new())
    }

    fn stored_notes(&self) -> Note {
        load_or_default(&self.app.context.config().notes_path(), Note::default())
    }
}

fn build_app(dir: TempDir, data_dir: PathBuf) -> TestHarness {
    let dialogs = ScriptedDialogs::default();
    let launcher = RecordingLauncher::default();
    let context = ApplicationContext::new(
        Config::with_data_dir(data_dir),
        Box::new(dialogs.clone()),
        Box::new(launcher.clone()),
    );
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let timer = TimerPanel::with_handle(TimerHandle { cmd_tx, evt_rx }, Countdown::default());
    TestHarness {
        _dir: dir,
        app: SimpleDeskApp::with_parts(context, timer),
        dialogs,
        launcher,
        cmd_rx,
        evt_tx,
    }
}

fn make_app() -> TestHarness {
    let dir = TempDir::new().expect("temp dir");
    let data_dir = dir.path().join("data");
    fs::create_dir(&data_dir).expect("create data dir");
    build_app(dir, data_dir)
}

/// App whose data directory is a regular file, so every document write fails.
fn make_blocked_app() -> TestHarness {
    let dir = TempDir::new().expect("temp dir");
    let data_dir = dir.path().join("data");
    fs::write(&data_dir, "not a directory").expect("write blocker file");
    build_app(dir, data_dir)
}

fn unblock(data_dir: &Path) {
    fs::remove_file(data_dir).expect("remove blocker file");
    fs::create_dir(data_dir).expect("create data dir");
}

fn run_frame(app: &mut SimpleDeskApp, ctx: &egui::Context, input: egui::RawInput) {
    let _ = ctx.run(input, |ctx| {
        app.ensure_style(ctx);
        app.handle_shortcuts(ctx);
        app.render(ctx);
    });
}
