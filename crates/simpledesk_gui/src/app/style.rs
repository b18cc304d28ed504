//! Theme constants and one-time style application.

use super::SimpleDeskApp;
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};

pub(super) const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0x1b, 0x1e, 0x24);
pub(super) const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0x23, 0x27, 0x2e);
pub(super) const COLOR_BG_TERTIARY: Color32 = Color32::from_rgb(0x2c, 0x31, 0x3a);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0xdc, 0xdf, 0xe4);
pub(super) const COLOR_TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9a, 0xa1, 0xac);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x6f, 0x76, 0x82);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0x4c, 0xa3, 0x8f);
pub(super) const COLOR_ACCENT_HOVER: Color32 = Color32::from_rgb(0x3d, 0x8a, 0x78);
pub(super) const COLOR_WARNING: Color32 = Color32::from_rgb(0xe5, 0xc0, 0x7b);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0x3a, 0x40, 0x4a);
pub(super) const NOTES_TEXT_STYLE: &str = "Notes";

fn widget(bg: Color32, stroke: Color32, fg: Color32, expansion: f32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: Stroke::new(1.0, stroke),
        corner_radius: CornerRadius::same(4),
        fg_stroke: Stroke::new(1.0, fg),
        expansion,
    }
}

impl SimpleDeskApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::dark();
        style.visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        style.visuals.window_fill = COLOR_BG_PRIMARY;
        style.visuals.panel_fill = COLOR_BG_SECONDARY;
        style.visuals.extreme_bg_color = COLOR_BG_PRIMARY;
        style.visuals.faint_bg_color = COLOR_BG_TERTIARY;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.hyperlink_color = COLOR_ACCENT;
        style.visuals.selection.bg_fill = COLOR_ACCENT_HOVER;
        style.visuals.selection.stroke = Stroke::new(1.0, COLOR_ACCENT);
        style.visuals.text_edit_bg_color = Some(COLOR_BG_PRIMARY);

        style.visuals.widgets.noninteractive =
            widget(COLOR_BG_SECONDARY, COLOR_BORDER, COLOR_TEXT_SECONDARY, 0.0);
        style.visuals.widgets.inactive =
            widget(COLOR_BG_TERTIARY, COLOR_BORDER, COLOR_TEXT_PRIMARY, 0.0);
        style.visuals.widgets.hovered =
            widget(COLOR_ACCENT_HOVER, COLOR_ACCENT_HOVER, Color32::WHITE, 0.5);
        style.visuals.widgets.active = widget(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.5);
        style.visuals.widgets.open = widget(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.0);

        style.spacing.window_margin = Margin::same(10);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(10.0, 6.0);
        style.spacing.interact_size.y = 30.0;
        style.spacing.menu_margin = Margin::same(6);

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(22.0, FontFamily::Proportional),
        );
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Monospace,
            FontId::new(14.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            TextStyle::Name(NOTES_TEXT_STYLE.into()),
            FontId::new(15.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
        self.style_applied = true;
    }
}
