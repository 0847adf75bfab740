//! Errors raised at the parameter boundary
//!
//! Generation and animation are total over valid parameters, so the only
//! failure surface is a bad configuration or a config source that cannot
//! be read.

use thiserror::Error;

/// A parameter set that would produce a degenerate or undefined buffer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("count must be at least 1")]
    ZeroCount,
    #[error("count {0} exceeds the maximum of {}", super::params::MAX_COUNT)]
    TooManyPoints(usize),
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("branches must be at least 1")]
    ZeroBranches,
    #[error("randomness power must be positive and finite, got {0}")]
    InvalidRandomnessPower(f32),
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} channel out of [0, 1]: {value}")]
    ColorOutOfRange { field: &'static str, value: f32 },
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// Failure to obtain a parameter set or driver setting.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read parameters: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed parameters JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parameter patch must be a JSON object")]
    NotAnObject,
    #[error("invalid value {value:?} for {key}")]
    Env { key: &'static str, value: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
