//! Galaxy parameter record
//!
//! One explicit configuration value passed into both generation and
//! animation. Colors travel as `#rrggbb` strings on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use super::error::{ConfigError, LoadError};

// ============================================================================
// Rgb - linear color triple
// ============================================================================

/// RGB color with channels in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional). Bytes map to `byte / 255`.
    pub fn from_hex(text: &str) -> Result<Self, ConfigError> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(text.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ConfigError::InvalidColor(text.to_string()))?;
        let channel = |shift: u32| ((value >> shift) & 0xff) as f32 / 255.0;
        Ok(Self::new(channel(16), channel(8), channel(0)))
    }

    pub fn to_hex(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }

    /// Per-channel linear mix toward `other`. `t` is clamped to [0, 1];
    /// `t = 0` yields `self` and `t = 1` yields `other` exactly.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: f32, b: f32| {
            if t >= 1.0 {
                return b;
            }
            (a + (b - a) * t).clamp(a.min(b), a.max(b))
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    fn check(self, field: &'static str) -> Result<(), ConfigError> {
        for value in [self.r, self.g, self.b] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ColorOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&text)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Upper bound on `count`, well above the settings panel range
pub const MAX_COUNT: usize = 10_000_000;

/// Full galaxy configuration. Replaced as a whole on every change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Parameters {
    /// Number of points
    pub count: usize,
    /// Display point size (world units, attenuated by distance)
    pub size: f32,
    /// Maximum spiral extent
    pub radius: f32,
    /// Number of spiral arms
    pub branches: u32,
    /// Radians of twist per unit radius
    pub spin: f32,
    /// Jitter magnitude
    pub randomness: f32,
    /// Jitter concentration exponent, higher pulls jitter toward zero
    pub randomness_power: f32,
    pub inner_color: Rgb,
    pub outer_color: Rgb,
    /// Time scale of the drift
    pub animation_speed: f32,
    /// Drift amplitude
    pub motion_radius: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            count: 100_000,
            size: 0.01,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
            randomness: 0.02,
            randomness_power: 3.5,
            inner_color: Rgb::new(1.0, 96.0 / 255.0, 48.0 / 255.0), // #ff6030
            outer_color: Rgb::new(27.0 / 255.0, 57.0 / 255.0, 132.0 / 255.0), // #1b3984
            animation_speed: 0.3,
            motion_radius: 0.1,
        }
    }
}

impl Parameters {
    /// Reject configurations that would divide by zero, produce an empty
    /// buffer or leak NaN into positions and colors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if self.count > MAX_COUNT {
            return Err(ConfigError::TooManyPoints(self.count));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if self.branches == 0 {
            return Err(ConfigError::ZeroBranches);
        }
        if !self.randomness_power.is_finite() || self.randomness_power <= 0.0 {
            return Err(ConfigError::InvalidRandomnessPower(self.randomness_power));
        }
        for (field, value) in [
            ("randomness", self.randomness),
            ("motionRadius", self.motion_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        for (field, value) in [
            ("size", self.size),
            ("spin", self.spin),
            ("animationSpeed", self.animation_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        self.inner_color.check("innerColor")?;
        self.outer_color.check("outerColor")?;
        Ok(())
    }

    /// Parse a full parameter set; absent fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let params: Parameters = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Overlay a partial JSON object on the current values.
    ///
    /// Colors absent from the patch keep their exact channels rather than
    /// the `#rrggbb` rounding of the merged JSON.
    pub fn patched(&self, patch: &str) -> Result<Self, LoadError> {
        let Value::Object(fields) = serde_json::from_str::<Value>(patch)? else {
            return Err(LoadError::NotAnObject);
        };
        let keep_inner = !fields.contains_key("innerColor");
        let keep_outer = !fields.contains_key("outerColor");
        let mut merged = serde_json::to_value(self)?;
        if let Value::Object(base) = &mut merged {
            base.extend(fields);
        }
        let mut params: Parameters = serde_json::from_value(merged)?;
        if keep_inner {
            params.inner_color = self.inner_color;
        }
        if keep_outer {
            params.outer_color = self.outer_color;
        }
        params.validate()?;
        Ok(params)
    }
}
