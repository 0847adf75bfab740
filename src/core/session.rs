//! Galaxy session: parameters, the current buffer and the random stream
//!
//! Drivers (UI panel, CLI, tests) feed explicit events in; the session
//! regenerates on parameter changes and advances on ticks. The two never
//! interleave because both go through `&mut self`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use super::error::ConfigError;
use super::galaxy::{generate_with, PointBuffer};
use super::motion::{advance, rotation_angle};
use super::params::Parameters;
use crate::time::now_seconds;

/// Input to a [`Galaxy`]
#[derive(Clone, Debug)]
pub enum GalaxyEvent {
    /// A finalized parameter set; triggers a full regeneration
    ParametersChanged(Parameters),
    /// One frame at `elapsed` seconds since the clock started
    Tick(f64),
}

pub struct Galaxy {
    params: Parameters,
    buffer: PointBuffer,
    rng: StdRng,
    /// Number of successful generations, starting at 1
    generation: u64,
}

impl Galaxy {
    /// Generate from `params` with an entropy-seeded stream.
    pub fn new(params: Parameters) -> Result<Self, ConfigError> {
        Self::with_rng(params, StdRng::from_entropy())
    }

    /// Generate from `params` with a reproducible stream.
    pub fn with_seed(params: Parameters, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: Parameters, mut rng: StdRng) -> Result<Self, ConfigError> {
        let buffer = generate_with(&params, &mut rng)?;
        info!(count = buffer.len(), branches = params.branches, "galaxy created");
        Ok(Self {
            params,
            buffer,
            rng,
            generation: 1,
        })
    }

    pub fn handle(&mut self, event: GalaxyEvent) -> Result<(), ConfigError> {
        match event {
            GalaxyEvent::ParametersChanged(params) => self.regenerate(params),
            GalaxyEvent::Tick(elapsed) => {
                self.tick(elapsed);
                Ok(())
            }
        }
    }

    /// Replace the buffer with a fresh one built from `params`.
    ///
    /// The new buffer is fully built before the swap; on a rejected
    /// configuration the current parameters and buffer stay in place.
    pub fn regenerate(&mut self, params: Parameters) -> Result<(), ConfigError> {
        let started = now_seconds();
        let buffer = match generate_with(&params, &mut self.rng) {
            Ok(buffer) => buffer,
            Err(e) => {
                warn!(error = %e, "rejected parameter change");
                return Err(e);
            }
        };
        self.buffer = buffer;
        self.params = params;
        self.generation += 1;
        info!(
            generation = self.generation,
            count = self.buffer.len(),
            branches = self.params.branches,
            elapsed_ms = (now_seconds() - started) * 1000.0,
            "galaxy regenerated"
        );
        Ok(())
    }

    pub fn tick(&mut self, elapsed: f64) {
        advance(&mut self.buffer, elapsed, &self.params);
    }

    /// Y rotation the display should apply at `elapsed`
    pub fn rotation(&self, elapsed: f64) -> f32 {
        rotation_angle(elapsed)
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn buffer(&self) -> &PointBuffer {
        &self.buffer
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
