//! Platform-agnostic core - shared between the egui viewer and the CLI

pub mod error;
pub mod export;
pub mod galaxy;
pub mod motion;
pub mod params;
pub mod session;

pub use error::{ConfigError, LoadError};
pub use export::FrameSnapshot;
pub use galaxy::{generate, generate_with, BufferStats, PointBuffer};
pub use motion::{advance, rotate_y, rotation_angle};
pub use params::{Parameters, Rgb, MAX_COUNT};
pub use session::{Galaxy, GalaxyEvent};
