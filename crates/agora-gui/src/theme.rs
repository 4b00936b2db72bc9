//! Dark slate look shared by every screen, plus small layout helpers.

use agora_core::DebateStatus;
use agora_graph::Color;
use eframe::egui::{self, Color32};

/// Spacing constants
pub mod spacing {
    pub const ITEM_SPACING: f32 = 8.0;
    pub const SECTION_SPACING: f32 = 16.0;
}

pub const BACKGROUND: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a);
pub const PANEL: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b);
pub const ACCENT: Color32 = Color32::from_rgb(0x60, 0xa5, 0xfa);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);
pub const STAR_GOLD: Color32 = Color32::from_rgb(0xea, 0xb3, 0x08);

pub fn color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

pub fn with_alpha(color: Color, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

pub fn status_color(status: DebateStatus) -> Color32 {
    match status {
        DebateStatus::Hot => Color32::from_rgb(0xf9, 0x73, 0x16),
        DebateStatus::Active => Color32::from_rgb(0x10, 0xb9, 0x81),
        DebateStatus::New => Color32::from_rgb(0x3b, 0x82, 0xf6),
    }
}

/// Apply the dark slate visuals to the whole context.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = PANEL;
    visuals.extreme_bg_color = PANEL;
    visuals.widgets.noninteractive.bg_fill = PANEL;
    visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    visuals.hyperlink_color = ACCENT;
    ctx.set_visuals(visuals);
}

/// Centered icon/title/message block for empty and error screens.
pub fn empty_state(ui: &mut egui::Ui, icon: &str, title: &str, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(spacing::SECTION_SPACING * 4.0);
        ui.label(
            egui::RichText::new(icon)
                .size(48.0)
                .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(spacing::ITEM_SPACING);
        ui.label(egui::RichText::new(title).size(22.0).strong());
        ui.label(egui::RichText::new(message).color(MUTED_TEXT));
        ui.add_space(spacing::SECTION_SPACING);
    });
}
