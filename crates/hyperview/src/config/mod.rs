//! Configuration boundary between a controller and the frame loop.
//!
//! Raw controller values (`ViewInput`) are validated once into an immutable
//! `FrameConfig`; the frame loop only ever sees validated configuration, so it
//! has no error paths of its own.

pub mod presets;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ShapeKind;
use crate::rotation::{Plane, RotationSpeeds};

pub use presets::{surprise, Preset, Surprise, DEFAULT_SPEEDS};

/// Rejected controller input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
    #[error("rotation speed for plane {plane} must be finite, got {value}")]
    NonFiniteSpeed { plane: Plane, value: f64 },
    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f64),
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("invalid speed override: {0}")]
    InvalidSpeedOverride(String),
}

/// Positive, finite multiplier on projected screen size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Scale(f64);

impl Scale {
    pub const ONE: Scale = Scale(1.0);

    pub fn new(v: f64) -> Result<Self, ConfigError> {
        if v.is_finite() && v > 0.0 {
            Ok(Self(v))
        } else {
            Err(ConfigError::InvalidScale(v))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<f64> for Scale {
    type Error = ConfigError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Scale::new(v)
    }
}

impl From<Scale> for f64 {
    fn from(s: Scale) -> f64 {
        s.0
    }
}

/// Everything one frame needs from the controller, already validated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrameConfig {
    pub shape: ShapeKind,
    pub speeds: RotationSpeeds,
    pub playing: bool,
    pub scale: Scale,
}

impl Default for FrameConfig {
    /// Start-up state: tesseract, normal speeds, playing, scale 1.
    fn default() -> Self {
        Self {
            shape: ShapeKind::Tesseract,
            speeds: DEFAULT_SPEEDS,
            playing: true,
            scale: Scale::ONE,
        }
    }
}

impl FrameConfig {
    /// Reset speeds, scale and playback while keeping the current shape.
    pub fn reset_view(self) -> Self {
        Self {
            shape: self.shape,
            ..Self::default()
        }
    }

    pub fn with_shape(self, shape: ShapeKind) -> Self {
        Self { shape, ..self }
    }

    pub fn with_speeds(self, speeds: RotationSpeeds) -> Self {
        Self { speeds, ..self }
    }

    pub fn with_playing(self, playing: bool) -> Self {
        Self { playing, ..self }
    }
}

/// Unvalidated controller values, e.g. deserialized from a JSON file.
///
/// Missing fields fall back to the start-up state. A `preset` supplies the
/// speeds; explicit `speeds` entries override it plane by plane.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewInput {
    pub shape: Option<String>,
    pub preset: Option<String>,
    pub speeds: Option<SpeedInput>,
    pub playing: Option<bool>,
    pub scale: Option<f64>,
}

/// Per-plane speed overrides; absent planes keep the preset value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeedInput {
    pub xy: Option<f64>,
    pub xz: Option<f64>,
    pub xw: Option<f64>,
    pub yz: Option<f64>,
    pub yw: Option<f64>,
    pub zw: Option<f64>,
}

impl SpeedInput {
    fn get(&self, plane: Plane) -> Option<f64> {
        match plane {
            Plane::XY => self.xy,
            Plane::XZ => self.xz,
            Plane::XW => self.xw,
            Plane::YZ => self.yz,
            Plane::YW => self.yw,
            Plane::ZW => self.zw,
        }
    }
}

impl ViewInput {
    pub fn validate(&self) -> Result<FrameConfig, ConfigError> {
        let base = FrameConfig::default();
        let shape = match &self.shape {
            Some(s) => s.parse::<ShapeKind>()?,
            None => base.shape,
        };
        let mut speeds = match &self.preset {
            Some(p) => p.parse::<Preset>()?.speeds(),
            None => base.speeds,
        };
        if let Some(over) = &self.speeds {
            for plane in Plane::ALL {
                if let Some(v) = over.get(plane) {
                    speeds[plane] = v;
                }
            }
        }
        let speeds = check_speeds(speeds)?;
        let scale = match self.scale {
            Some(v) => Scale::new(v)?,
            None => base.scale,
        };
        Ok(FrameConfig {
            shape,
            speeds,
            playing: self.playing.unwrap_or(base.playing),
            scale,
        })
    }
}

/// Reject NaN and infinite speeds; any finite value is accepted.
pub fn check_speeds(speeds: RotationSpeeds) -> Result<RotationSpeeds, ConfigError> {
    match speeds.iter().find(|(_, v)| !v.is_finite()) {
        Some((plane, value)) => Err(ConfigError::NonFiniteSpeed { plane, value }),
        None => Ok(speeds),
    }
}

/// Parse a `plane=value` override such as `xw=0.02`.
pub fn parse_speed_override(s: &str) -> Result<(Plane, f64), ConfigError> {
    let (plane, value) = s
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidSpeedOverride(format!("expected plane=value, got `{s}`")))?;
    let plane: Plane = plane.parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSpeedOverride(format!("`{}` is not a number", value.trim())))?;
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteSpeed { plane, value });
    }
    Ok((plane, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_startup_state() {
        assert_eq!(ViewInput::default().validate().unwrap(), FrameConfig::default());
    }

    #[test]
    fn json_input_validates() {
        let raw = r#"{"shape": "16-cell", "preset": "chaotic", "speeds": {"zw": 0.5}, "playing": false, "scale": 2.0}"#;
        let input: ViewInput = serde_json::from_str(raw).unwrap();
        let cfg = input.validate().unwrap();
        assert_eq!(cfg.shape, ShapeKind::SixteenCell);
        assert!(!cfg.playing);
        assert_eq!(cfg.scale.get(), 2.0);
        assert_eq!(cfg.speeds.xy, 0.03);
        assert_eq!(cfg.speeds.zw, 0.5);
    }

    #[test]
    fn bad_inputs_are_rejected_at_the_boundary() {
        let bad_shape = ViewInput { shape: Some("cube".into()), ..Default::default() };
        assert_eq!(bad_shape.validate(), Err(ConfigError::UnknownShape("cube".into())));

        let bad_scale = ViewInput { scale: Some(0.0), ..Default::default() };
        assert_eq!(bad_scale.validate(), Err(ConfigError::InvalidScale(0.0)));
        assert!(Scale::new(-1.0).is_err());
        assert!(Scale::new(f64::INFINITY).is_err());

        let bad_speed = ViewInput {
            speeds: Some(SpeedInput { yw: Some(f64::NAN), ..Default::default() }),
            ..Default::default()
        };
        assert!(matches!(
            bad_speed.validate(),
            Err(ConfigError::NonFiniteSpeed { plane: Plane::YW, .. })
        ));

        let bad_preset = ViewInput { preset: Some("warp".into()), ..Default::default() };
        assert_eq!(bad_preset.validate(), Err(ConfigError::UnknownPreset("warp".into())));
    }

    #[test]
    fn unknown_json_fields_are_rejected() {
        let raw = r#"{"shape": "tesseract", "colour": "red"}"#;
        assert!(serde_json::from_str::<ViewInput>(raw).is_err());
    }

    #[test]
    fn large_speeds_are_accepted() {
        let speeds = RotationSpeeds::new(1e9, -1e9, 0.0, 3.0, -7.5, 100.0);
        assert_eq!(check_speeds(speeds), Ok(speeds));
    }

    #[test]
    fn speed_override_parsing() {
        assert_eq!(parse_speed_override("xw=0.02").unwrap(), (Plane::XW, 0.02));
        assert_eq!(parse_speed_override(" YZ = -1.5").unwrap(), (Plane::YZ, -1.5));
        assert!(parse_speed_override("xw").is_err());
        assert!(parse_speed_override("xw=fast").is_err());
        assert!(parse_speed_override("qq=1").is_err());
        assert!(matches!(
            parse_speed_override("zw=inf"),
            Err(ConfigError::NonFiniteSpeed { plane: Plane::ZW, .. })
        ));
    }

    #[test]
    fn reset_view_keeps_shape_only() {
        let cfg = FrameConfig {
            shape: ShapeKind::CubicPyramid,
            speeds: RotationSpeeds::splat(0.3),
            playing: false,
            scale: Scale::new(2.5).unwrap(),
        };
        let reset = cfg.reset_view();
        assert_eq!(reset, FrameConfig::default().with_shape(ShapeKind::CubicPyramid));
    }

    #[test]
    fn scale_serde_validates() {
        assert!(serde_json::from_str::<Scale>("1.5").is_ok());
        assert!(serde_json::from_str::<Scale>("-2").is_err());
    }
}
