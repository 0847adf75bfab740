//! Spiral galaxy point generation
//!
//! Each point is assigned to an arm by index, placed at a uniformly drawn
//! radius along that arm with a radius-proportional twist, displaced by
//! per-axis power-shaped jitter, and colored by mixing inner and outer
//! colors with its normalized radius.

use rand::Rng;
use serde::Serialize;
use std::f32::consts::TAU;
use tracing::debug;

use super::error::ConfigError;
use super::params::Parameters;

// ============================================================================
// PointBuffer - generated point cloud
// ============================================================================

/// Generated point cloud: baseline and color are fixed per generation,
/// live positions are rewritten from the baseline on every tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PointBuffer {
    baseline: Vec<[f32; 3]>,
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
}

/// Summary of a buffer's extent, for logging and headers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BufferStats {
    pub count: usize,
    /// Largest distance from the vertical axis over baseline positions
    pub max_planar_radius: f32,
    /// Lowest and highest baseline y
    pub y_range: (f32, f32),
}

impl PointBuffer {
    fn with_capacity(count: usize) -> Self {
        Self {
            baseline: Vec::with_capacity(count),
            positions: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
        }
    }

    fn push(&mut self, position: [f32; 3], color: [f32; 3]) {
        self.baseline.push(position);
        self.positions.push(position);
        self.colors.push(color);
    }

    pub fn len(&self) -> usize {
        self.baseline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baseline.is_empty()
    }

    pub fn baseline(&self) -> &[[f32; 3]] {
        &self.baseline
    }

    /// Live (drifted) positions
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Live positions as a flat `x, y, z, x, y, z, ...` slice for upload
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Baseline and live positions split for in-place animation
    pub(crate) fn animation_view(&mut self) -> (&[[f32; 3]], &mut [[f32; 3]]) {
        (&self.baseline, &mut self.positions)
    }

    pub fn stats(&self) -> BufferStats {
        let mut max_planar_radius = 0.0f32;
        let mut y_range = (f32::MAX, f32::MIN);
        for &[x, y, z] in &self.baseline {
            max_planar_radius = max_planar_radius.max((x * x + z * z).sqrt());
            y_range = (y_range.0.min(y), y_range.1.max(y));
        }
        if self.is_empty() {
            y_range = (0.0, 0.0);
        }
        BufferStats {
            count: self.len(),
            max_planar_radius,
            y_range,
        }
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Angle of the arm that point `index` belongs to.
#[inline]
pub fn branch_angle(index: usize, branches: u32) -> f32 {
    let branches = branches.max(1) as usize;
    (index % branches) as f32 / branches as f32 * TAU
}

/// One axis of jitter: `u^power` with a random sign, scaled by `randomness`.
#[inline]
fn jitter<R: Rng + ?Sized>(rng: &mut R, power: f32, randomness: f32) -> f32 {
    let magnitude = rng.gen::<f32>().powf(power);
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    magnitude * sign * randomness
}

/// Generate a galaxy with the thread-local entropy source.
/// Every call yields a different layout.
pub fn generate(params: &Parameters) -> Result<PointBuffer, ConfigError> {
    generate_with(params, &mut rand::thread_rng())
}

/// Generate a galaxy drawing from `rng`. Parameters are validated before
/// anything is allocated.
pub fn generate_with<R: Rng + ?Sized>(
    params: &Parameters,
    rng: &mut R,
) -> Result<PointBuffer, ConfigError> {
    params.validate()?;

    let mut buffer = PointBuffer::with_capacity(params.count);

    for i in 0..params.count {
        let radius = rng.gen::<f32>() * params.radius;
        let spin_angle = radius * params.spin;
        let angle = branch_angle(i, params.branches) + spin_angle;

        let jitter_x = jitter(rng, params.randomness_power, params.randomness);
        let jitter_y = jitter(rng, params.randomness_power, params.randomness);
        let jitter_z = jitter(rng, params.randomness_power, params.randomness);

        let position = [
            angle.cos() * radius + jitter_x,
            jitter_y,
            angle.sin() * radius + jitter_z,
        ];

        let color = params
            .inner_color
            .lerp(params.outer_color, radius / params.radius)
            .to_array();

        buffer.push(position, color);
    }

    debug!(count = buffer.len(), branches = params.branches, "galaxy generated");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::Rgb;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small(count: usize) -> Parameters {
        Parameters {
            count,
            ..Parameters::default()
        }
    }

    #[test]
    fn test_generates_exactly_count_points() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [1, 2, 3, 1000] {
            let buffer = generate_with(&small(count), &mut rng).unwrap();
            assert_eq!(buffer.len(), count);
            assert_eq!(buffer.positions().len(), count);
            assert_eq!(buffer.colors().len(), count);
            assert_eq!(buffer.positions_flat().len(), count * 3);
        }
    }

    #[test]
    fn test_live_positions_start_at_baseline() {
        let buffer = generate_with(&small(500), &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(buffer.positions(), buffer.baseline());
    }

    #[test]
    fn test_radius_bounded_without_jitter() {
        let params = Parameters {
            count: 2000,
            randomness: 0.0,
            ..Parameters::default()
        };
        let buffer = generate_with(&params, &mut StdRng::seed_from_u64(3)).unwrap();
        for &[x, y, z] in buffer.baseline() {
            assert_eq!(y, 0.0);
            assert!((x * x + z * z).sqrt() <= params.radius + 1e-4);
        }
        assert!(buffer.stats().max_planar_radius <= params.radius + 1e-4);
    }

    #[test]
    fn test_points_lie_on_discrete_branches() {
        let params = Parameters {
            count: 600,
            branches: 5,
            spin: 0.0,
            randomness: 0.0,
            ..Parameters::default()
        };
        let buffer = generate_with(&params, &mut StdRng::seed_from_u64(11)).unwrap();
        let arms: Vec<f32> = (0..5).map(|b| b as f32 / 5.0 * TAU).collect();
        for (i, &[x, _, z]) in buffer.baseline().iter().enumerate() {
            if (x * x + z * z).sqrt() < 1e-3 {
                continue; // angle undefined at the center
            }
            let angle = z.atan2(x).rem_euclid(TAU);
            let expected = arms[i % 5];
            let diff = (angle - expected).abs();
            assert!(
                diff < 1e-3 || (TAU - diff) < 1e-3,
                "point {} at angle {} should be on arm {}",
                i,
                angle,
                expected
            );
        }
    }

    #[test]
    fn test_single_point_boundary() {
        let params = Parameters {
            count: 1,
            branches: 1,
            radius: 5.0,
            spin: 0.0,
            randomness: 0.0,
            ..Parameters::default()
        };
        let buffer = generate_with(&params, &mut StdRng::seed_from_u64(42)).unwrap();
        let [x, y, z] = buffer.baseline()[0];
        assert!((0.0..=5.0).contains(&x));
        assert_eq!(y, 0.0);
        assert_eq!(z, 0.0);

        let r = x / 5.0;
        let expected = params.inner_color.lerp(params.outer_color, r).to_array();
        assert_eq!(buffer.colors()[0], expected);
    }

    #[test]
    fn test_color_tracks_radius() {
        let params = Parameters {
            count: 3000,
            randomness: 0.0,
            inner_color: Rgb::new(1.0, 0.0, 0.0),
            outer_color: Rgb::new(0.0, 0.0, 1.0),
            ..Parameters::default()
        };
        let buffer = generate_with(&params, &mut StdRng::seed_from_u64(5)).unwrap();
        for (&[x, _, z], &[r, g, b]) in buffer.baseline().iter().zip(buffer.colors()) {
            let t = (x * x + z * z).sqrt() / params.radius;
            assert!((b - t).abs() < 1e-3);
            assert!((r - (1.0 - t)).abs() < 1e-3);
            assert_eq!(g, 0.0);
        }
    }

    #[test]
    fn test_jitter_bounded_by_randomness() {
        let params = Parameters {
            count: 2000,
            randomness: 0.5,
            ..Parameters::default()
        };
        let buffer = generate_with(&params, &mut StdRng::seed_from_u64(9)).unwrap();
        let (low, high) = buffer.stats().y_range;
        assert!(low >= -0.5 && high <= 0.5);
        assert!(high > low);
    }

    #[test]
    fn test_regeneration_differs() {
        let first = generate(&Parameters {
            count: 200,
            randomness_power: 2.0,
            ..Parameters::default()
        })
        .unwrap();
        let second = generate(&Parameters {
            count: 200,
            randomness_power: 5.0,
            ..Parameters::default()
        })
        .unwrap();
        assert_eq!(first.len(), 200);
        assert_eq!(second.len(), 200);
        assert_ne!(first.baseline(), second.baseline());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let params = small(300);
        let a = generate_with(&params, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = generate_with(&params, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_with(&small(0), &mut rng),
            Err(ConfigError::ZeroCount)
        );
        let params = Parameters {
            branches: 0,
            ..small(10)
        };
        assert_eq!(generate_with(&params, &mut rng), Err(ConfigError::ZeroBranches));
    }

    #[test]
    fn test_branch_angle_cycles() {
        assert_eq!(branch_angle(0, 3), 0.0);
        assert_eq!(branch_angle(3, 3), 0.0);
        assert!((branch_angle(1, 4) - TAU / 4.0).abs() < 1e-6);
        assert_eq!(branch_angle(5, 1), 0.0);
    }

    fn channel() -> impl Strategy<Value = f32> {
        0.0f32..=1.0
    }

    fn color() -> impl Strategy<Value = Rgb> {
        (channel(), channel(), channel()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
    }

    proptest! {
        #[test]
        fn color_mix_is_bounded_and_monotonic(
            inner in color(),
            outer in color(),
            t1 in 0.0f32..=1.0,
            t2 in 0.0f32..=1.0,
        ) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let c_lo = inner.lerp(outer, lo).to_array();
            let c_hi = inner.lerp(outer, hi).to_array();

            for (k, (a, b)) in inner.to_array().into_iter().zip(outer.to_array()).enumerate() {
                prop_assert!(c_lo[k] >= a.min(b) && c_lo[k] <= a.max(b));
                prop_assert!(c_hi[k] >= a.min(b) && c_hi[k] <= a.max(b));
                if a <= b {
                    prop_assert!(c_lo[k] <= c_hi[k]);
                } else {
                    prop_assert!(c_lo[k] >= c_hi[k]);
                }
            }
        }
    }
}
