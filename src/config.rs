//! Driver configuration from environment variables
//!
//! - `GALAXY_PARAMS`: path to a parameters JSON file
//! - `GALAXY_SEED`: u64 seed for a reproducible layout
//! - `GALAXY_FRAMES`: frames to run before exiting (CLI)
//! - `GALAXY_FPS`: frame rate of the CLI clock
//! - `GALAXY_DUMP`: path for a JSON snapshot of the last frame (CLI)

use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::core::{ConfigError, Galaxy, LoadError, Parameters};

pub const DEFAULT_FRAMES: u64 = 600;
pub const DEFAULT_FPS: f64 = 60.0;

#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    pub params_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub frames: u64,
    pub fps: f64,
    pub dump_path: Option<PathBuf>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            params_path: None,
            seed: None,
            frames: DEFAULT_FRAMES,
            fps: DEFAULT_FPS,
            dump_path: None,
        }
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, LoadError> {
    value.trim().parse().map_err(|_| LoadError::Env { key, value })
}

impl DriverConfig {
    pub fn from_env() -> Result<Self, LoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoadError> {
        let mut config = Self::default();
        config.params_path = lookup("GALAXY_PARAMS").map(PathBuf::from);
        config.dump_path = lookup("GALAXY_DUMP").map(PathBuf::from);
        if let Some(value) = lookup("GALAXY_SEED") {
            config.seed = Some(parse("GALAXY_SEED", value)?);
        }
        if let Some(value) = lookup("GALAXY_FRAMES") {
            config.frames = parse("GALAXY_FRAMES", value)?;
        }
        if let Some(value) = lookup("GALAXY_FPS") {
            let fps: f64 = parse("GALAXY_FPS", value.clone())?;
            if !fps.is_finite() || fps <= 0.0 {
                return Err(LoadError::Env { key: "GALAXY_FPS", value });
            }
            config.fps = fps;
        }
        Ok(config)
    }

    pub fn parameters(&self) -> Result<Parameters, LoadError> {
        match &self.params_path {
            Some(path) => {
                info!(path = %path.display(), "Loading parameters");
                Parameters::load(path)
            }
            None => Ok(Parameters::default()),
        }
    }

    pub fn build(&self, params: Parameters) -> Result<Galaxy, ConfigError> {
        match self.seed {
            Some(seed) => Galaxy::with_seed(params, seed),
            None => Galaxy::new(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = DriverConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DriverConfig::default());
        assert_eq!(config.parameters().unwrap(), Parameters::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("GALAXY_SEED", "42"),
            ("GALAXY_FRAMES", " 10 "),
            ("GALAXY_FPS", "30"),
            ("GALAXY_DUMP", "/tmp/frame.json"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.frames, 10);
        assert_eq!(config.fps, 30.0);
        assert_eq!(config.dump_path, Some(PathBuf::from("/tmp/frame.json")));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(matches!(
            DriverConfig::from_lookup(lookup(&[("GALAXY_SEED", "abc")])),
            Err(LoadError::Env { key: "GALAXY_SEED", .. })
        ));
        assert!(matches!(
            DriverConfig::from_lookup(lookup(&[("GALAXY_FPS", "0")])),
            Err(LoadError::Env { key: "GALAXY_FPS", .. })
        ));
    }

    #[test]
    fn test_missing_params_file() {
        let config = DriverConfig {
            params_path: Some(PathBuf::from("/nonexistent/galaxy.json")),
            ..DriverConfig::default()
        };
        assert!(matches!(config.parameters(), Err(LoadError::Io(_))));
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let config = DriverConfig {
            seed: Some(5),
            ..DriverConfig::default()
        };
        let params = Parameters {
            count: 20,
            ..Parameters::default()
        };
        let a = config.build(params.clone()).unwrap();
        let b = config.build(params).unwrap();
        assert_eq!(a.buffer(), b.buffer());
    }
}
