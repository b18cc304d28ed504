//! SimpleDesk window state and frame loop.

mod context;
mod panels;
mod shutdown;
mod state_feedback;
mod style;
mod ui;

#[cfg(test)]
mod tests;

use context::ApplicationContext;
use eframe::egui;
use panels::{NotesPanel, QuickFilesPanel, TimerPanel, TodoPanel};
use simpledesk_core::Config;
use std::time::{Duration, Instant};
use style::*;
use tracing::{info, warn};

const STATUS_TTL: Duration = Duration::from_secs(5);
const TIMER_REPAINT_INTERVAL: Duration = Duration::from_millis(200);
const IDLE_REPAINT_INTERVAL: Duration = Duration::from_secs(1);
#[doc = "Default initial window size for native GUI startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [900.0, 600.0];
#[doc = "Minimum enforced window size."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tab {
    Notes,
    Todo,
    Timer,
    QuickFiles,
}

impl Tab {
    pub(crate) const ALL: [Tab; 4] = [Tab::Notes, Tab::Todo, Tab::Timer, Tab::QuickFiles];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Tab::Notes => "Notes",
            Tab::Todo => "To-Do",
            Tab::Timer => "Timer",
            Tab::QuickFiles => "Quick Files",
        }
    }
}

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

/// Top-level egui application: four panels behind a tab strip.
pub(crate) struct SimpleDeskApp {
    context: ApplicationContext,
    notes: NotesPanel,
    todo: TodoPanel,
    timer: TimerPanel,
    quick_files: QuickFilesPanel,
    active_tab: Tab,
    status: Option<StatusMessage>,
    data_dir_label: String,
    style_applied: bool,
}

impl SimpleDeskApp {
    /// Build the app against the native dialogs and OS launcher.
    ///
    /// A data directory that cannot be created is logged here and shows up
    /// later as save failures; startup continues with empty documents.
    pub(crate) fn new(config: Config) -> Self {
        info!("data directory: {}", config.data_dir.display());
        if let Err(err) = config.ensure_data_dir() {
            warn!("{}", err);
        }
        let context = ApplicationContext::native(config);
        let timer = TimerPanel::new();
        Self::with_parts(context, timer)
    }

    fn with_parts(context: ApplicationContext, timer: TimerPanel) -> Self {
        let notes = NotesPanel::new(&context);
        let todo = TodoPanel::new(&context);
        let quick_files = QuickFilesPanel::new(&context);
        let data_dir_label = context.config().data_dir.display().to_string();
        Self {
            context,
            notes,
            todo,
            timer,
            quick_files,
            active_tab: Tab::Notes,
            status: None,
            data_dir_label,
            style_applied: false,
        }
    }

    /// `true` while any document holds changes that failed to write.
    pub(crate) fn is_dirty(&self) -> bool {
        self.notes.is_dirty() || self.todo.is_dirty() || self.quick_files.is_dirty()
    }

    fn save_notes_now(&mut self) {
        let status = self.notes.save_now(&self.context);
        self.apply_status(status);
    }

    /// Per-frame bookkeeping that does not depend on rendering.
    fn poll(&mut self, now: Instant) {
        self.expire_status(now);
        self.timer.poll(&self.context);
        let autosaved = self.notes.poll_autosave(&self.context, now);
        self.apply_status(autosaved);
    }

    /// Ctrl/Cmd+S saves the notes from any tab.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let save_shortcut = ctx.input(|input| {
            let plain_command =
                input.modifiers.command && !input.modifiers.shift && !input.modifiers.alt;
            plain_command && input.key_pressed(egui::Key::S)
        });
        if save_shortcut {
            self.save_notes_now();
        }
    }

    fn render(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx);
        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let status = match self.active_tab {
                Tab::Notes => {
                    self.notes.show(ui);
                    None
                }
                Tab::Todo => self.todo.show(ui, &self.context),
                Tab::Timer => self.timer.show(ui),
                Tab::QuickFiles => {
                    self.quick_files.show(ui, &self.context);
                    None
                }
            };
            self.apply_status(status);
        });
    }

    fn repaint_after(&self, now: Instant) -> Duration {
        let mut repaint_after = if self.timer.is_running() {
            TIMER_REPAINT_INTERVAL
        } else {
            IDLE_REPAINT_INTERVAL
        };
        if let Some(until) = self.notes.repaint_after(now) {
            repaint_after = repaint_after.min(until);
        }
        if let Some(status) = &self.status {
            repaint_after = repaint_after.min(status.expires_at.saturating_duration_since(now));
        }
        repaint_after
    }
}

impl eframe::App for SimpleDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);
        self.poll(Instant::now());

        self.handle_shortcuts(ctx);
        self.render(ctx);
        ctx.request_repaint_after(self.repaint_after(Instant::now()));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.flush_pending_saves_for_shutdown();
    }
}
