//! Menu bar and tab strip rendering.

use super::super::*;
use eframe::egui::{self, RichText};
use simpledesk_core::constants::APP_NAME;

const ABOUT_TEXT: &str = "SimpleDesk\nNotes, to-dos, a countdown timer and quick files in one window.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    SaveNotes,
    Quit,
    About,
}

impl SimpleDeskApp {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let mut action: Option<MenuAction> = None;

        egui::TopBottomPanel::top("menu_bar")
            .resizable(false)
            .show(ctx, |ui| {
                egui::MenuBar::new().ui(ui, |ui| {
                    ui.menu_button("File", |ui| {
                        if ui.button("Save notes").clicked() {
                            action = Some(MenuAction::SaveNotes);
                            ui.close();
                        }
                        ui.separator();
                        if ui.button("Quit").clicked() {
                            action = Some(MenuAction::Quit);
                            ui.close();
                        }
                    });
                    ui.menu_button("Help", |ui| {
                        if ui.button("About").clicked() {
                            action = Some(MenuAction::About);
                            ui.close();
                        }
                    });
                });
            });

        egui::TopBottomPanel::top("tabs")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(APP_NAME).strong().color(COLOR_ACCENT));
                    ui.add_space(12.0);
                    for tab in Tab::ALL {
                        ui.selectable_value(&mut self.active_tab, tab, tab.label());
                    }
                });
            });

        match action {
            Some(MenuAction::SaveNotes) => self.save_notes_now(),
            Some(MenuAction::Quit) => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            Some(MenuAction::About) => self.context.show_info(ABOUT_TEXT),
            None => {}
        }
    }
}
