//! Spiral galaxy point cloud
//!
//! - `core`: parameter record, generation, per-frame drift, session events
//! - `app`: egui viewer shared by the native window and the browser build
//!
//! The browser build reads an optional `window.__galaxy_params` JSON string
//! for its initial parameters.

pub mod config;
pub mod core;
pub mod time;

#[cfg(any(feature = "wasm", feature = "native"))]
pub mod app;
#[cfg(any(feature = "wasm", feature = "native"))]
mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web {
    use tracing::warn;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::GalaxyApp;
    use crate::core::{Galaxy, Parameters};

    fn initial_parameters() -> Parameters {
        let Some(text) = js_sys::eval("window.__galaxy_params")
            .ok()
            .and_then(|v| v.as_string())
        else {
            return Parameters::default();
        };
        Parameters::from_json(&text).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring window.__galaxy_params");
            Parameters::default()
        })
    }

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();

        let web_options = eframe::WebOptions::default();
        let galaxy = Galaxy::new(initial_parameters()).expect("default parameters are valid");

        wasm_bindgen_futures::spawn_local(async move {
            let canvas = web_sys::window()
                .expect("no window")
                .document()
                .expect("no document")
                .get_element_by_id("canvas")
                .expect("no canvas element")
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .expect("not a canvas element");

            eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(move |cc| Ok(Box::new(GalaxyApp::new(cc, galaxy)))),
                )
                .await
                .expect("Failed to start eframe");
        });
    }
}
