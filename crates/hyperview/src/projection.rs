//! Two-stage perspective projection 4D → 3D → 2D.
//!
//! Stage 1 divides by the distance to a camera on the w-axis, stage 2 by the
//! distance to a camera on the z-axis of the projected point. A point at or
//! behind either camera is not visible; callers drop it from the frame.
//!
//! Two depth cues leave this module: `depth_factor` (the 4D foreshortening,
//! used for point size) and `raw_w` (the pre-projection w, used for color).

use serde::{Deserialize, Serialize};

use crate::cfg::{DISTANCE_3D, DISTANCE_4D, SCREEN_FRACTION};
use crate::{Point2, Point4};

/// Size of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        Point2::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Screen position plus depth metadata for one visible vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Point2,
    /// `1 / (d4 - w)`; larger for points nearer the 4D camera.
    pub depth_factor: f64,
    /// w-coordinate of the rotated point before projection.
    pub raw_w: f64,
}

/// Camera setup for the two perspective stages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub d4: f64,
    pub d3: f64,
    pub screen_fraction: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            d4: DISTANCE_4D,
            d3: DISTANCE_3D,
            screen_fraction: SCREEN_FRACTION,
        }
    }
}

impl Projection {
    /// Project `p` onto the viewport, or `None` if it lies behind either camera
    /// (or its coordinates are NaN).
    ///
    /// Screen x and y both scale with the viewport *width*, so the aspect ratio
    /// of the shape does not depend on the viewport's.
    pub fn project(&self, p: Point4, viewport: Viewport, scale: f64) -> Option<Projected> {
        let w_dist = self.d4 - p.w;
        if w_dist.is_nan() || w_dist <= 0.0 {
            return None;
        }
        let factor4 = 1.0 / w_dist;
        let p3 = p.xyz() * factor4;

        let z_dist = self.d3 - p3.z;
        if z_dist.is_nan() || z_dist <= 0.0 {
            return None;
        }
        let factor3 = 1.0 / z_dist;
        let k = factor3 * f64::from(viewport.width) * self.screen_fraction * scale;
        let screen = Point2::new(p3.x * k, p3.y * k) + viewport.center();

        Some(Projected {
            screen,
            depth_factor: factor4,
            raw_w: p.w,
        })
    }
}

/// [`Projection::project`] with the default cameras.
#[inline]
pub fn project(p: Point4, viewport: Viewport, scale: f64) -> Option<Projected> {
    Projection::default().project(p, viewport, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800, 600);

    #[test]
    fn origin_maps_to_center_for_any_scale() {
        for scale in [0.5, 1.0, 2.75, 1e6] {
            let pr = project(Point4::zeros(), VP, scale).unwrap();
            assert_eq!(pr.screen, Point2::new(400.0, 300.0));
            assert_eq!(pr.depth_factor, 0.5);
            assert_eq!(pr.raw_w, 0.0);
        }
    }

    #[test]
    fn behind_4d_camera_is_not_visible() {
        assert!(project(Point4::new(0.0, 0.0, 0.0, 2.0), VP, 1.0).is_none());
        assert!(project(Point4::new(0.1, 0.2, 0.3, 7.5), VP, 1.0).is_none());
        assert!(project(Point4::new(0.0, 0.0, 0.0, 1.999), VP, 1.0).is_some());
    }

    #[test]
    fn behind_3d_camera_is_not_visible() {
        // w = 1 → factor4 = 1, so z3 = z; z = 3 sits on the 3D camera.
        assert!(project(Point4::new(0.0, 0.0, 3.0, 1.0), VP, 1.0).is_none());
        assert!(project(Point4::new(0.0, 0.0, 2.9, 1.0), VP, 1.0).is_some());
    }

    #[test]
    fn nan_geometry_is_not_visible() {
        let nan = f64::NAN;
        assert!(project(Point4::new(0.0, 0.0, 0.0, nan), VP, 1.0).is_none());
        assert!(project(Point4::new(0.0, 0.0, nan, 0.0), VP, 1.0).is_none());
    }

    #[test]
    fn known_point_lands_where_expected() {
        // w = 0 → factor4 = 1/2 → p3 = (0.5, -0.5, 0); factor3 = 1/3.
        let pr = project(Point4::new(1.0, -1.0, 0.0, 0.0), VP, 1.0).unwrap();
        let k = 800.0 * 0.4 / 3.0;
        assert!((pr.screen.x - (400.0 + 0.5 * k)).abs() < 1e-9);
        assert!((pr.screen.y - (300.0 - 0.5 * k)).abs() < 1e-9);
    }

    #[test]
    fn depth_factor_grows_toward_the_4d_camera() {
        let near = project(Point4::new(0.0, 0.0, 0.0, 1.0), VP, 1.0).unwrap();
        let far = project(Point4::new(0.0, 0.0, 0.0, -1.0), VP, 1.0).unwrap();
        assert!(near.depth_factor > far.depth_factor);
        assert_eq!(near.raw_w, 1.0);
    }

    #[test]
    fn scale_stretches_about_the_center() {
        let p = Point4::new(0.5, 0.25, 0.1, -0.3);
        let a = project(p, VP, 1.0).unwrap();
        let b = project(p, VP, 2.0).unwrap();
        let c = VP.center();
        assert!(((b.screen - c) - (a.screen - c) * 2.0).amax() < 1e-9);
    }
}
