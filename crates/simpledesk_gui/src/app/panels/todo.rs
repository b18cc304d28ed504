//! To-do list panel: add, complete, delete, and text export.

use super::super::context::ApplicationContext;
use super::super::style::{COLOR_TEXT_MUTED, COLOR_TEXT_SECONDARY};
use eframe::egui::{self, RichText};
use simpledesk_core::constants::DEFAULT_EXPORT_FILE_NAME;
use simpledesk_core::models::TodoItem;
use simpledesk_core::{AppError, TodoStore};
use tracing::warn;

pub(crate) struct TodoPanel {
    store: TodoStore,
    pub(crate) input: String,
    pub(crate) selected: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TodoAction {
    Add,
    MarkDone,
    Delete,
    Export,
}

impl TodoPanel {
    pub(crate) fn new(context: &ApplicationContext) -> Self {
        Self {
            store: TodoStore::open(context.config().todo_path()),
            input: String::new(),
            selected: None,
        }
    }

    pub(crate) fn items(&self) -> &[TodoItem] {
        self.store.items()
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    /// Add the input text as a new item; blank input is ignored and kept.
    pub(crate) fn add_from_input(&mut self, context: &ApplicationContext) {
        let mutation = self.store.add(&self.input);
        if context.report(mutation) {
            self.input.clear();
        }
    }

    pub(crate) fn mark_selected_done(&mut self, context: &ApplicationContext) {
        let mutation = self.store.mark_done(self.selected);
        context.report(mutation);
    }

    pub(crate) fn delete_selected(&mut self, context: &ApplicationContext) {
        let mutation = self.store.delete(self.selected);
        if context.report(mutation) {
            self.selected = None;
        }
    }

    /// Ask for a destination and write the plain-text export there.
    ///
    /// # Returns
    /// Status text on success; `None` when cancelled or failed.
    pub(crate) fn export(&mut self, context: &ApplicationContext) -> Option<String> {
        let destination = context
            .dialogs()
            .save_text_file("Export to-dos", DEFAULT_EXPORT_FILE_NAME)?;
        match self.store.export_to(&destination) {
            Ok(()) => {
                context.show_info("Exported as text.");
                Some(format!("Exported to {}", destination.display()))
            }
            Err(err) => {
                warn!("to-do export failed: {}", err);
                context.show_error(&err.to_string());
                None
            }
        }
    }

    pub(crate) fn flush(&mut self) -> Option<Result<(), AppError>> {
        self.store.flush()
    }

    pub(crate) fn show(
        &mut self,
        ui: &mut egui::Ui,
        context: &ApplicationContext,
    ) -> Option<String> {
        let mut action: Option<TodoAction> = None;

        egui::SidePanel::right("todo_actions")
            .resizable(false)
            .default_width(220.0)
            .show_inside(ui, |ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .hint_text("New task")
                        .desired_width(f32::INFINITY),
                );
                if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter))
                {
                    action = Some(TodoAction::Add);
                }
                ui.add_space(6.0);
                let has_selection = self.selected.is_some();
                let full_width = egui::vec2(ui.available_width(), 0.0);
                if ui.add(egui::Button::new("Add").min_size(full_width)).clicked() {
                    action = Some(TodoAction::Add);
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("Done").min_size(full_width))
                    .clicked()
                {
                    action = Some(TodoAction::MarkDone);
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("Delete").min_size(full_width))
                    .clicked()
                {
                    action = Some(TodoAction::Delete);
                }
                ui.add_space(8.0);
                if ui
                    .add(egui::Button::new("Export (txt)").min_size(full_width))
                    .clicked()
                {
                    action = Some(TodoAction::Export);
                }
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            if self.store.is_empty() {
                ui.label(RichText::new("Nothing to do yet.").color(COLOR_TEXT_MUTED));
                return;
            }
            let mut pending_select: Option<usize> = None;
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for (idx, item) in self.items().iter().enumerate() {
                        let selected = self.selected == Some(idx);
                        let mut label = RichText::new(item.display_label());
                        if item.done {
                            label = label.color(COLOR_TEXT_SECONDARY);
                        }
                        if ui.selectable_label(selected, label).clicked() {
                            pending_select = Some(idx);
                        }
                    }
                });
            if let Some(idx) = pending_select {
                self.selected = Some(idx);
            }
        });

        match action? {
            TodoAction::Add => self.add_from_input(context),
            TodoAction::MarkDone => self.mark_selected_done(context),
            TodoAction::Delete => self.delete_selected(context),
            TodoAction::Export => return self.export(context),
        }
        None
    }
}
