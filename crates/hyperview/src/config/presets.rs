//! Named speed presets and the seeded "surprise me" draw.
//!
//! Why seeded
//! - Every random draw carries its seed so a host can log it and replay the
//!   exact same shape and speeds later.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::{ConfigError, FrameConfig};
use crate::catalog::ShapeKind;
use crate::rotation::{Plane, RotationSpeeds};

/// Speeds used at start-up and after a reset.
pub const DEFAULT_SPEEDS: RotationSpeeds = RotationSpeeds::splat(0.005);

/// Half-width of the uniform range random speeds are drawn from.
pub const SURPRISE_SPEED_RANGE: f64 = 0.03;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Normal,
    Slow,
    Fast,
    Chaotic,
    Focus3d,
    Focus4d,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Normal,
        Preset::Slow,
        Preset::Fast,
        Preset::Chaotic,
        Preset::Focus3d,
        Preset::Focus4d,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Preset::Normal => "normal",
            Preset::Slow => "slow",
            Preset::Fast => "fast",
            Preset::Chaotic => "chaotic",
            Preset::Focus3d => "focus3d",
            Preset::Focus4d => "focus4d",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Preset::Normal => "Normal Rotation",
            Preset::Slow => "Slow & Hypnotic",
            Preset::Fast => "Fast",
            Preset::Chaotic => "Chaotic",
            Preset::Focus3d => "3D Focus (No 4D)",
            Preset::Focus4d => "4D Focus (Only W)",
        }
    }

    pub const fn speeds(self) -> RotationSpeeds {
        match self {
            Preset::Normal => DEFAULT_SPEEDS,
            Preset::Slow => RotationSpeeds::splat(0.002),
            Preset::Fast => RotationSpeeds::splat(0.02),
            Preset::Chaotic => RotationSpeeds::new(0.03, -0.02, 0.04, -0.03, 0.01, -0.04),
            Preset::Focus3d => RotationSpeeds::new(0.01, 0.01, 0.0, 0.01, 0.0, 0.0),
            Preset::Focus4d => RotationSpeeds::new(0.0, 0.0, 0.01, 0.0, 0.01, 0.01),
        }
    }

    /// Preset whose speeds equal `speeds` exactly, if any.
    pub fn matching(speeds: &RotationSpeeds) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.speeds() == *speeds)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|p| p.id() == key)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

/// Result of a random draw, with the seed that reproduces it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Surprise {
    pub seed: u64,
    pub shape: ShapeKind,
    pub speeds: RotationSpeeds,
}

impl Surprise {
    /// Apply to `cfg`: new shape and speeds, playback forced on, scale kept.
    pub fn apply(&self, cfg: FrameConfig) -> FrameConfig {
        FrameConfig {
            shape: self.shape,
            speeds: self.speeds,
            playing: true,
            scale: cfg.scale,
        }
    }
}

/// Uniformly random shape and six speeds in `[-0.03, 0.03)`.
pub fn surprise(seed: u64) -> Surprise {
    let mut rng = StdRng::seed_from_u64(seed);
    let shape = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
    let mut speeds = RotationSpeeds::ZERO;
    for plane in Plane::ALL {
        speeds[plane] = rng.gen_range(-SURPRISE_SPEED_RANGE..SURPRISE_SPEED_RANGE);
    }
    Surprise { seed, shape, speeds }
}
