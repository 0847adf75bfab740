//! Per-frame drift of the point cloud
//!
//! Live positions are recomputed from the baseline every tick, so motion is
//! a pure function of elapsed time: no state carries over between ticks.

use tracing::trace;

use super::galaxy::PointBuffer;
use super::params::Parameters;

/// Rigid rotation about the vertical axis, radians per second
pub const ROTATION_RATE: f32 = 0.02;

/// Per-index phase step for the x/y drift pair
const PHASE_STEP_XY: f64 = 0.1;
/// Per-index phase step for the z drift
const PHASE_STEP_Z: f64 = 0.2;

/// Drift of point `index` at `elapsed` seconds.
///
/// Each axis follows a sinusoid whose phase advances with time and is
/// offset by the point index so neighbours do not move in lockstep. The
/// sinusoids are measured relative to their value at `elapsed = 0`, so the
/// drift is exactly zero at the start of the clock.
#[inline]
pub fn drift_offset(index: usize, elapsed: f64, speed: f32, motion_radius: f32) -> [f32; 3] {
    let t = elapsed * speed as f64;
    let m = motion_radius as f64;
    let xy = index as f64 * PHASE_STEP_XY;
    let z = index as f64 * PHASE_STEP_Z;
    [
        (m * ((t + xy).sin() - xy.sin())) as f32,
        (m * ((t + xy).cos() - xy.cos())) as f32,
        (m * ((t + z).sin() - z.sin())) as f32,
    ]
}

/// Overwrite every live position with `baseline + drift(elapsed)`.
///
/// Never fails. A non-finite `elapsed` is treated as zero.
pub fn advance(buffer: &mut PointBuffer, elapsed: f64, params: &Parameters) {
    let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
    let (baseline, live) = buffer.animation_view();

    if params.motion_radius == 0.0 {
        live.copy_from_slice(baseline);
        return;
    }

    for (i, (out, base)) in live.iter_mut().zip(baseline).enumerate() {
        let [dx, dy, dz] = drift_offset(i, elapsed, params.animation_speed, params.motion_radius);
        *out = [base[0] + dx, base[1] + dy, base[2] + dz];
    }
    trace!(elapsed, points = live.len(), "advanced");
}

/// Display-time rotation of the whole cloud about the vertical axis.
#[inline]
pub fn rotation_angle(elapsed: f64) -> f32 {
    (elapsed * ROTATION_RATE as f64) as f32
}

/// Rotate `point` about the y axis by `angle` radians (right-handed).
#[inline]
pub fn rotate_y([x, y, z]: [f32; 3], angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    [x * cos + z * sin, y, -x * sin + z * cos]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::galaxy::generate_with;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn buffer(params: &Parameters) -> PointBuffer {
        generate_with(params, &mut StdRng::seed_from_u64(21)).unwrap()
    }

    fn params() -> Parameters {
        Parameters {
            count: 1000,
            ..Parameters::default()
        }
    }

    #[test]
    fn test_zero_time_is_identity() {
        let params = params();
        let mut buf = buffer(&params);
        advance(&mut buf, 3.5, &params);
        advance(&mut buf, 0.0, &params);
        assert_eq!(buf.positions(), buf.baseline());
    }

    #[test]
    fn test_advance_is_idempotent() {
        let params = params();
        let mut buf = buffer(&params);
        advance(&mut buf, 12.25, &params);
        let first: Vec<[f32; 3]> = buf.positions().to_vec();
        advance(&mut buf, 40.0, &params);
        advance(&mut buf, 12.25, &params);
        advance(&mut buf, 12.25, &params);
        assert_eq!(buf.positions(), first.as_slice());
    }

    #[test]
    fn test_baseline_never_changes() {
        let params = params();
        let mut buf = buffer(&params);
        let baseline: Vec<[f32; 3]> = buf.baseline().to_vec();
        for frame in 0..120 {
            advance(&mut buf, frame as f64 / 60.0, &params);
        }
        assert_eq!(buf.baseline(), baseline.as_slice());
        assert_ne!(buf.positions(), buf.baseline());
    }

    #[test]
    fn test_zero_motion_radius_is_noop() {
        let params = Parameters {
            motion_radius: 0.0,
            ..params()
        };
        let mut buf = buffer(&params);
        for elapsed in [0.0, 1.0, -7.5, 1e6] {
            advance(&mut buf, elapsed, &params);
            assert_eq!(buf.positions(), buf.baseline());
        }
    }

    #[test]
    fn test_drift_amplitude_bounded() {
        let params = params();
        let mut buf = buffer(&params);
        advance(&mut buf, 17.0, &params);
        let limit = 2.0 * params.motion_radius + 1e-5;
        for (live, base) in buf.positions().iter().zip(buf.baseline()) {
            for axis in 0..3 {
                assert!((live[axis] - base[axis]).abs() <= limit);
            }
        }
    }

    #[test]
    fn test_points_are_desynchronized() {
        let a = drift_offset(0, 2.0, 0.3, 0.1);
        let b = drift_offset(10, 2.0, 0.3, 0.1);
        assert_ne!(a, b);
        assert_eq!(drift_offset(5, 0.0, 0.3, 0.1), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_negative_and_non_finite_time() {
        let params = params();
        let mut buf = buffer(&params);
        advance(&mut buf, -3.0, &params);
        assert!(buf.positions().iter().flatten().all(|v| v.is_finite()));
        advance(&mut buf, f64::NAN, &params);
        assert_eq!(buf.positions(), buf.baseline());
    }

    #[test]
    fn test_rotation() {
        assert_eq!(rotation_angle(0.0), 0.0);
        assert!((rotation_angle(50.0) - 1.0).abs() < 1e-6);

        let p = rotate_y([1.0, 2.0, 0.0], std::f32::consts::FRAC_PI_2);
        assert!(p[0].abs() < 1e-6);
        assert_eq!(p[1], 2.0);
        assert!((p[2] + 1.0).abs() < 1e-6);

        let q = rotate_y([3.0, 0.0, 4.0], 0.7);
        assert!(((q[0] * q[0] + q[2] * q[2]).sqrt() - 5.0).abs() < 1e-5);
    }
}
