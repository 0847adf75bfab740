//! Header bar with settings toggle and status

use eframe::egui;
use crate::theme::colors;
use crate::time::now_seconds;
use super::GalaxyApp;

impl GalaxyApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        self.fps_counter.tick();

        let galaxy = self.galaxy();
        let count = galaxy.buffer().len();
        let generation = galaxy.generation();
        let branches = galaxy.params().branches;

        ui.horizontal(|ui| {
            let settings_text = if self.show_settings { "Settings <<<" } else { "Settings >>>" };
            if ui.button(egui::RichText::new(settings_text)).clicked() {
                self.show_settings = !self.show_settings;
            }

            if let Some(error) = &self.last_error {
                ui.add_space(10.0);
                ui.colored_label(colors::ERROR, error);
            }

            // RIGHT: stats (right-to-left order)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_SECONDARY),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                ui.label(
                    egui::RichText::new(format!("gen {}", generation)).color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                ui.label(
                    egui::RichText::new(format!("{} arms", branches)).color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                ui.label(
                    egui::RichText::new(format!("{} points", count)).color(colors::TEXT_MUTED),
                );
            });
        });
    }
}

/// FPS over the last 60 frames
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(61),
        }
    }

    pub fn tick(&mut self) {
        self.push(now_seconds());
    }

    fn push(&mut self, seconds: f64) {
        self.frames.push(seconds);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
