//! Frame snapshots for offline inspection
//!
//! Positions and colors are written flat with item size 3, the same layout
//! a vertex buffer upload uses.

use serde::Serialize;

use super::session::Galaxy;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot<'a> {
    pub elapsed: f64,
    /// Display rotation about y; not baked into `positions`
    pub rotation_y: f32,
    pub generation: u64,
    pub count: usize,
    pub positions: &'a [f32],
    pub colors: &'a [f32],
}

impl<'a> FrameSnapshot<'a> {
    pub fn capture(galaxy: &'a Galaxy, elapsed: f64) -> Self {
        let buffer = galaxy.buffer();
        Self {
            elapsed,
            rotation_y: galaxy.rotation(elapsed),
            generation: galaxy.generation(),
            count: buffer.len(),
            positions: buffer.positions_flat(),
            colors: buffer.colors_flat(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::Parameters;

    #[test]
    fn test_snapshot_layout() {
        let mut galaxy = Galaxy::with_seed(
            Parameters {
                count: 4,
                ..Parameters::default()
            },
            8,
        )
        .unwrap();
        galaxy.tick(1.0);

        let json = FrameSnapshot::capture(&galaxy, 1.0).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 4);
        assert_eq!(value["generation"], 1);
        assert_eq!(value["positions"].as_array().unwrap().len(), 12);
        assert_eq!(value["colors"].as_array().unwrap().len(), 12);
        assert!(value["rotationY"].as_f64().unwrap() > 0.0);
    }
}
