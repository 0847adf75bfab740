//! Dark space theme for the galaxy viewer

use egui::Color32;

/// Near-black palette so additive points stay the brightest thing on screen
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);
    pub const BG_PANEL: Color32 = Color32::from_rgb(10, 10, 14);
    pub const BG_HOVER: Color32 = Color32::from_rgb(28, 28, 36);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 240);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(90, 90, 100);

    // === Lines & Borders ===
    pub const BORDER: Color32 = Color32::from_rgb(40, 40, 48);

    /// Rejected parameter change
    pub const ERROR: Color32 = Color32::from_rgb(220, 110, 100);
}

/// Create the viewer's egui Visuals
pub fn minimal_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_PANEL;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.inactive.bg_fill = BG_PRIMARY;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.weak_bg_fill = BG_PRIMARY;

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;

    visuals.widgets.active.bg_fill = BG_HOVER;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.active.weak_bg_fill = BG_HOVER;

    visuals.selection.bg_fill = Color32::from_rgb(60, 60, 80);
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
