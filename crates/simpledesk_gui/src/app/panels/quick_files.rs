//! Quick-file launcher panel.

use super::super::context::ApplicationContext;
use super::super::style::COLOR_TEXT_MUTED;
use eframe::egui::{self, RichText};
use simpledesk_core::{AppError, QuickFilesStore};
use tracing::{info, warn};

pub(crate) struct QuickFilesPanel {
    store: QuickFilesStore,
    pub(crate) selected: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuickFileAction {
    Add,
    Open,
    Remove,
}

impl QuickFilesPanel {
    pub(crate) fn new(context: &ApplicationContext) -> Self {
        Self {
            store: QuickFilesStore::open(context.config().quick_files_path()),
            selected: None,
        }
    }

    pub(crate) fn entries(&self) -> &[String] {
        self.store.entries()
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    /// Prompt for a file and append its path.
    ///
    /// Only valid UTF-8 paths are stored, so the launched path is always the
    /// one the user picked.
    pub(crate) fn add(&mut self, context: &ApplicationContext) {
        let Some(path) = context.dialogs().pick_file("Add file") else {
            return;
        };
        let Some(entry) = path.to_str() else {
            warn!("refusing non UTF-8 quick file path {}", path.display());
            context.show_error(&format!(
                "Cannot add {}: the path is not valid UTF-8.",
                path.display()
            ));
            return;
        };
        let mutation = self.store.add(entry);
        context.report(mutation);
    }

    pub(crate) fn remove_selected(&mut self, context: &ApplicationContext) {
        let mutation = self.store.remove(self.selected);
        if context.report(mutation) {
            self.selected = None;
        }
    }

    /// Hand the selected path, unmodified, to the OS default application.
    pub(crate) fn open_selected(&self, context: &ApplicationContext) {
        let Some(path) = self.store.get(self.selected) else {
            return;
        };
        match context.launcher().open(path) {
            Ok(()) => info!("opened quick file {}", path),
            Err(err) => {
                warn!("failed to open quick file {}: {}", path, err);
                let err = AppError::Launch(format!("{}: {}", path, err));
                context.show_error(&err.to_string());
            }
        }
    }

    pub(crate) fn flush(&mut self) -> Option<Result<(), AppError>> {
        self.store.flush()
    }

    pub(crate) fn show(&mut self, ui: &mut egui::Ui, context: &ApplicationContext) {
        let mut action: Option<QuickFileAction> = None;

        ui.label(
            RichText::new("Add files for quick access. Double-click an entry to open it.")
                .color(COLOR_TEXT_MUTED),
        );
        ui.add_space(4.0);

        egui::TopBottomPanel::bottom("quick_file_actions")
            .resizable(false)
            .show_separator_line(false)
            .show_inside(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        action = Some(QuickFileAction::Add);
                    }
                    let has_selection = self.selected.is_some();
                    if ui
                        .add_enabled(has_selection, egui::Button::new("Open"))
                        .clicked()
                    {
                        action = Some(QuickFileAction::Open);
                    }
                    if ui
                        .add_enabled(has_selection, egui::Button::new("Remove from list"))
                        .clicked()
                    {
                        action = Some(QuickFileAction::Remove);
                    }
                });
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            let mut pending_select: Option<usize> = None;
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for (idx, entry) in self.entries().iter().enumerate() {
                        let selected = self.selected == Some(idx);
                        let response =
                            ui.selectable_label(selected, RichText::new(entry).monospace());
                        if response.clicked() {
                            pending_select = Some(idx);
                        }
                        if response.double_clicked() {
                            pending_select = Some(idx);
                            action = Some(QuickFileAction::Open);
                        }
                    }
                });
            if let Some(idx) = pending_select {
                self.selected = Some(idx);
            }
        });

        match action {
            Some(QuickFileAction::Add) => self.add(context),
            Some(QuickFileAction::Open) => self.open_selected(context),
            Some(QuickFileAction::Remove) => self.remove_selected(context),
            None => {}
        }
    }
}
