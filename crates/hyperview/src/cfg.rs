//! Fixed constants for the projection and morph pipeline (internal).
//!
//! Policy
//! - Defaults are fixed constants to avoid “knob juggling” during normal
//!   development. None of them is exposed to the controller; hosts tune speeds,
//!   scale and shape only.

/// Camera distance along the w-axis for the 4D→3D stage.
pub const DISTANCE_4D: f64 = 2.0;
/// Camera distance along the z-axis for the 3D→2D stage.
pub const DISTANCE_3D: f64 = 3.0;
/// Fraction of the viewport width covered by one projected unit at scale 1.
pub const SCREEN_FRACTION: f64 = 0.4;

/// Fraction of the remaining distance a working vertex covers per frame.
pub const MORPH_EASE: f64 = 0.08;
/// Squared 4D norm below which a ghost vertex counts as collapsed and is not drawn.
pub const GHOST_COLLAPSE_EPS_SQ: f64 = 1e-3;

/// Stroke width of every edge line.
pub const EDGE_LINE_WIDTH: f64 = 1.5;
/// Minimum rendered point radius; the radius is `max(this, POINT_RADIUS_SCALE * depth)`.
pub const POINT_RADIUS_MIN: f64 = 1.0;
/// Point radius per unit of 4D depth factor.
pub const POINT_RADIUS_SCALE: f64 = 3.0;

/// w-range mapped onto the cyan↔purple edge gradient.
pub(crate) const DEPTH_COLOR_W_HALF_RANGE: f64 = 1.5;
pub(crate) const DEPTH_COLOR_GREEN: u8 = 200;
pub(crate) const DEPTH_COLOR_ALPHA: f64 = 0.6;
pub(crate) const GHOST_POINT_ALPHA: f64 = 0.3;

/// Tolerance used by the catalog edge rules (dot product and squared distance).
pub(crate) const ORTHO_DOT_EPS: f64 = 0.1;
pub(crate) const EDGE_DIST_EPS: f64 = 0.01;
