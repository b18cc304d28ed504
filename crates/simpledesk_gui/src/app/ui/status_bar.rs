//! Bottom status bar: transient status, data directory, unsaved marker.

use super::super::*;
use eframe::egui;

impl SimpleDeskApp {
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let status_color = if self.status.is_some() {
                        COLOR_WARNING
                    } else {
                        COLOR_TEXT_SECONDARY
                    };
                    ui.label(egui::RichText::new(self.status_text()).color(status_color));
                    ui.separator();
                    ui.label(egui::RichText::new("Data:").small().color(COLOR_TEXT_MUTED));
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.data_dir_label.as_str())
                                .small()
                                .monospace()
                                .color(COLOR_TEXT_SECONDARY),
                        )
                        .truncate(),
                    );
                    if self.is_dirty() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new("Unsaved changes").color(COLOR_WARNING));
                        });
                    }
                });
            });
    }
}
