//! Headless galaxy driver
//!
//! Runs the frame clock without a window. Each stdin line is a JSON object
//! of parameter overrides, e.g. `{"branches": 5, "spin": -1.2}`, applied as
//! one parameter change between frames.
//!
//! Run with: cargo run --features cli --bin galaxy-cli

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use spiral_galaxy::config::DriverConfig;
    use spiral_galaxy::core::{FrameSnapshot, GalaxyEvent};
    use std::time::{Duration, Instant};
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tracing::{debug, error, info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,spiral_galaxy=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = DriverConfig::from_env()?;
    let mut galaxy = config.build(config.parameters()?)?;
    info!(
        frames = config.frames,
        fps = config.fps,
        seed = ?config.seed,
        "Galaxy ready, reading parameter changes from stdin"
    );

    let start_time = Instant::now();
    let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / config.fps));
    let mut stats_interval = tokio::time::interval(Duration::from_secs(5));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut frame = 0u64;
    let mut elapsed = 0.0;

    while frame < config.frames {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(text)) if text.trim().is_empty() => {}
                    Ok(Some(text)) => match galaxy.params().patched(&text) {
                        Ok(params) => {
                            // Rejections are logged by the session
                            let _ = galaxy.handle(GalaxyEvent::ParametersChanged(params));
                        }
                        Err(e) => warn!(error = %e, "Ignoring parameter change"),
                    },
                    Ok(None) => {
                        debug!("stdin closed");
                        stdin_open = false;
                    }
                    Err(e) => {
                        error!(error = %e, "stdin error");
                        stdin_open = false;
                    }
                }
            }
            _ = frame_interval.tick() => {
                elapsed = start_time.elapsed().as_secs_f64();
                galaxy.handle(GalaxyEvent::Tick(elapsed))?;
                frame += 1;
            }
            _ = stats_interval.tick() => {
                let stats = galaxy.buffer().stats();
                info!(
                    frame,
                    elapsed = format!("{:.2}", elapsed),
                    points = stats.count,
                    generation = galaxy.generation(),
                    max_radius = format!("{:.3}", stats.max_planar_radius),
                    y_range = ?stats.y_range,
                    "stats"
                );
            }
        }
    }

    if let Some(path) = &config.dump_path {
        let json = FrameSnapshot::capture(&galaxy, elapsed).to_json()?;
        tokio::fs::write(path, json).await?;
        info!(path = %path.display(), "Snapshot written");
    }

    info!(frames = frame, "done");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
