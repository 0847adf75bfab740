//! Galaxy viewer app
//!
//! Runs on both native and WASM. Owns the session, turns settings panel
//! edits into parameter-change events and drives one tick per repaint.

mod header;
mod settings;
mod view;

use eframe::egui;
use tracing::debug;

use crate::core::{Galaxy, GalaxyEvent, Parameters};
use crate::theme::{colors, minimal_visuals};
use crate::time::Clock;

/// Galaxy viewer - runs on both native and WASM
pub struct GalaxyApp {
    galaxy: Galaxy,
    /// Parameters as edited in the settings panel
    pub(crate) draft: Parameters,
    /// Draft edited since the last applied change
    pub(crate) dirty: bool,
    /// Rebuild with the current parameters and fresh randomness
    pub(crate) regenerate_requested: bool,
    /// Message of the last rejected parameter change
    pub(crate) last_error: Option<String>,
    clock: Clock,
    pub(crate) camera: view::OrbitCamera,
    pub(crate) fps_counter: header::FpsCounter,
    /// Show settings sidebar
    pub(crate) show_settings: bool,
}

impl GalaxyApp {
    pub fn new(cc: &eframe::CreationContext<'_>, galaxy: Galaxy) -> Self {
        cc.egui_ctx.set_visuals(minimal_visuals());

        Self {
            draft: galaxy.params().clone(),
            galaxy,
            dirty: false,
            regenerate_requested: false,
            last_error: None,
            clock: Clock::start(),
            camera: view::OrbitCamera::default(),
            fps_counter: header::FpsCounter::new(),
            show_settings: true,
        }
    }

    /// Apply the pending draft once the pointer is released.
    ///
    /// Edits made while dragging only mark the draft dirty; only the
    /// latest draft reaches the generator.
    fn flush_parameter_change(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.pointer.any_down()) {
            return;
        }
        let requested = std::mem::take(&mut self.regenerate_requested);
        if !self.dirty && !requested {
            return;
        }
        self.dirty = false;
        if !requested && &self.draft == self.galaxy.params() {
            return;
        }
        debug!("parameter change finished");
        match self
            .galaxy
            .handle(GalaxyEvent::ParametersChanged(self.draft.clone()))
        {
            Ok(()) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    pub(crate) fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }
}

impl eframe::App for GalaxyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Continuous repaint drives the animation
        ctx.request_repaint();

        self.flush_parameter_change(ctx);

        let elapsed = self.clock.elapsed();
        self.galaxy.tick(elapsed);

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(colors::BG_PANEL).inner_margin(4.0))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        // Settings sidebar (must be shown before CentralPanel)
        if self.show_settings {
            self.render_settings(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| {
                self.render_view(ui, elapsed);
            });
    }
}
