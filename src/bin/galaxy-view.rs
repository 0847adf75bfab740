//! Native galaxy viewer
//!
//! Run with: cargo run --features native --bin galaxy-view

use spiral_galaxy::app::GalaxyApp;
use spiral_galaxy::config::DriverConfig;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,spiral_galaxy=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = DriverConfig::from_env()?;
    let galaxy = config.build(config.parameters()?)?;
    info!(points = galaxy.buffer().len(), "Opening viewer");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Galaxy")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "galaxy-view",
        options,
        Box::new(move |cc| Ok(Box::new(GalaxyApp::new(cc, galaxy)))),
    )?;
    Ok(())
}
