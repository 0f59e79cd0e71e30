//! Six-plane 4D rotation.
//!
//! A rotation is the composition of six Givens rotations applied in the fixed
//! order XY, XZ, XW, YZ, YW, ZW. Each step reads the coordinates already updated
//! by the previous steps, so the order is part of the visual result and must
//! not change. Zero angles are skipped.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::Point4;

/// Coordinate plane of a 4D rotation, listed in application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    XY,
    XZ,
    XW,
    YZ,
    YW,
    ZW,
}

impl Plane {
    pub const ALL: [Plane; 6] = [Plane::XY, Plane::XZ, Plane::XW, Plane::YZ, Plane::YW, Plane::ZW];

    /// Coordinate indices `(a, b)` rotated by this plane (x=0, y=1, z=2, w=3).
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            Plane::XY => (0, 1),
            Plane::XZ => (0, 2),
            Plane::XW => (0, 3),
            Plane::YZ => (1, 2),
            Plane::YW => (1, 3),
            Plane::ZW => (2, 3),
        }
    }

    /// Whether the plane involves the hidden w-axis.
    #[inline]
    pub const fn touches_w(self) -> bool {
        self.axes().1 == 3
    }

    pub const fn label(self) -> &'static str {
        match self {
            Plane::XY => "xy",
            Plane::XZ => "xz",
            Plane::XW => "xw",
            Plane::YZ => "yz",
            Plane::YW => "yw",
            Plane::ZW => "zw",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Plane {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Plane::ALL
            .into_iter()
            .find(|p| p.label() == key)
            .ok_or_else(|| ConfigError::InvalidSpeedOverride(format!("unknown plane `{s}`")))
    }
}

/// One scalar per rotation plane.
///
/// Used both for accumulated angles (radians) and for per-frame speeds
/// (radians per frame). Values are unbounded; angles are never wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneAngles {
    pub xy: f64,
    pub xz: f64,
    pub xw: f64,
    pub yz: f64,
    pub yw: f64,
    pub zw: f64,
}

/// Accumulated rotation angles.
pub type RotationAngles = PlaneAngles;
/// Per-frame angle increments.
pub type RotationSpeeds = PlaneAngles;

impl PlaneAngles {
    pub const ZERO: PlaneAngles = PlaneAngles::splat(0.0);

    pub const fn splat(v: f64) -> Self {
        Self { xy: v, xz: v, xw: v, yz: v, yw: v, zw: v }
    }

    pub const fn new(xy: f64, xz: f64, xw: f64, yz: f64, yw: f64, zw: f64) -> Self {
        Self { xy, xz, xw, yz, yw, zw }
    }

    /// `(plane, value)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (Plane, f64)> + '_ {
        Plane::ALL.into_iter().map(move |p| (p, self[p]))
    }

    /// Add `speeds` to every plane, wrapping each angle into `[0, 2π)`.
    ///
    /// Wrapping keeps angles finite for any finite speed.
    #[inline]
    pub fn advance(&mut self, speeds: &RotationSpeeds) {
        for p in Plane::ALL {
            self[p] = (self[p] + speeds[p]).rem_euclid(TAU);
        }
    }

    pub fn negated(&self) -> Self {
        let mut out = *self;
        for p in Plane::ALL {
            out[p] = -out[p];
        }
        out
    }
}

impl Index<Plane> for PlaneAngles {
    type Output = f64;

    fn index(&self, plane: Plane) -> &f64 {
        match plane {
            Plane::XY => &self.xy,
            Plane::XZ => &self.xz,
            Plane::XW => &self.xw,
            Plane::YZ => &self.yz,
            Plane::YW => &self.yw,
            Plane::ZW => &self.zw,
        }
    }
}

impl IndexMut<Plane> for PlaneAngles {
    fn index_mut(&mut self, plane: Plane) -> &mut f64 {
        match plane {
            Plane::XY => &mut self.xy,
            Plane::XZ => &mut self.xz,
            Plane::XW => &mut self.xw,
            Plane::YZ => &mut self.yz,
            Plane::YW => &mut self.yw,
            Plane::ZW => &mut self.zw,
        }
    }
}

/// Rotate `p` in one plane by `theta`:
/// `a' = a cos θ - b sin θ`, `b' = a sin θ + b cos θ`.
#[inline]
pub fn rotate_plane(p: Point4, plane: Plane, theta: f64) -> Point4 {
    if theta == 0.0 {
        return p;
    }
    let (i, j) = plane.axes();
    let (s, c) = theta.sin_cos();
    let mut out = p;
    out[i] = p[i] * c - p[j] * s;
    out[j] = p[i] * s + p[j] * c;
    out
}

/// Apply all six plane rotations in order XY, XZ, XW, YZ, YW, ZW.
#[inline]
pub fn rotate(p: Point4, angles: &RotationAngles) -> Point4 {
    Plane::ALL
        .into_iter()
        .fold(p, |q, plane| rotate_plane(q, plane, angles[plane]))
}

/// Exact inverse of [`rotate`]: negated angles in reverse plane order.
pub fn rotate_inverse(p: Point4, angles: &RotationAngles) -> Point4 {
    Plane::ALL
        .into_iter()
        .rev()
        .fold(p, |q, plane| rotate_plane(q, plane, -angles[plane]))
}
