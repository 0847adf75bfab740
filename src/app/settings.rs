//! Settings sidebar: galaxy shape, colors and drift
//!
//! Every widget edits the draft parameters; the app applies the draft once
//! the pointer is released.

use eframe::egui;
use std::ops::RangeInclusive;

use crate::core::{Parameters, Rgb};
use crate::theme::colors;
use super::GalaxyApp;

fn slider<N: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    value: &mut N,
    range: RangeInclusive<N>,
    step: f64,
    label: &str,
) -> bool {
    ui.add(
        egui::Slider::new(value, range)
            .step_by(step)
            .clamping(egui::SliderClamping::Edits)
            .text(label),
    )
    .changed()
}

fn color_row(ui: &mut egui::Ui, color: &mut Rgb, label: &str) -> bool {
    let mut rgb = color.to_array();
    let changed = ui
        .horizontal(|ui| {
            let response = egui::color_picker::color_edit_button_rgb(ui, &mut rgb);
            ui.label(label);
            response.changed()
        })
        .inner;
    if changed {
        *color = Rgb::from_array(rgb);
    }
    changed
}

impl GalaxyApp {
    pub(crate) fn render_settings(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("settings")
            .default_width(300.0)
            .min_width(240.0)
            .resizable(true)
            .frame(egui::Frame::new().fill(colors::BG_PANEL).inner_margin(8.0))
            .show(ctx, |ui| {
                let group_frame = egui::Frame::new()
                    .stroke(egui::Stroke::new(1.0, colors::TEXT_MUTED.gamma_multiply(0.6)))
                    .corner_radius(4.0)
                    .inner_margin(6.0);

                let p = &mut self.draft;
                let mut changed = false;
                let mut regenerate = false;

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Motion:").color(colors::TEXT_MUTED));
                    changed |= slider(ui, &mut p.animation_speed, 0.0..=2.0, 0.01, "Animation speed");
                    changed |= slider(ui, &mut p.motion_radius, 0.0..=0.5, 0.01, "Motion radius");
                });

                ui.add_space(8.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Shape:").color(colors::TEXT_MUTED));
                    changed |= slider(ui, &mut p.count, 100..=300_000, 50.0, "Particles count");
                    changed |= slider(ui, &mut p.size, 0.001..=0.1, 0.001, "Particles size");
                    changed |= slider(ui, &mut p.radius, 0.01..=20.0, 0.01, "Branch radius");
                    changed |= slider(ui, &mut p.branches, 2..=20, 1.0, "Branch count");
                    changed |= slider(ui, &mut p.spin, -5.0..=5.0, 0.001, "Spin angle");
                    changed |= slider(ui, &mut p.randomness, 0.0..=2.0, 0.001, "Randomness");
                    changed |= slider(ui, &mut p.randomness_power, 1.0..=10.0, 0.001, "Randomness power");
                });

                ui.add_space(8.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Colors:").color(colors::TEXT_MUTED));
                    changed |= color_row(ui, &mut p.inner_color, "Inner color");
                    changed |= color_row(ui, &mut p.outer_color, "Outer color");
                });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Regenerate").clicked() {
                        // Same parameters, fresh randomness
                        regenerate = true;
                    }
                    if ui.button("Defaults").clicked() {
                        *p = Parameters::default();
                        changed = true;
                    }
                });

                if changed {
                    self.dirty = true;
                }
                if regenerate {
                    self.regenerate_requested = true;
                }
            });
    }
}
