//! Continuously rotating, morphing wireframe projections of 4D polytopes.
//!
//! Pipeline
//! - [`catalog`]: vertex/edge data for each shape, generated once.
//! - [`rotation`]: six-plane rotation in a fixed order.
//! - [`projection`]: 4D → 3D → 2D perspective with visibility culling.
//! - [`morph`]: growable vertex arena easing toward the selected shape.
//! - [`frame`]: per-frame scheduler emitting a renderer-agnostic draw list,
//!   plus the surface and driver seams a host plugs into.
//! - [`config`]: validation of controller input into an immutable `FrameConfig`.
//!
//! The crate never draws or sleeps by itself; hosts provide a [`frame::Surface`]
//! and an [`frame::AnimationDriver`].

pub mod catalog;
pub mod cfg;
pub mod config;
pub mod frame;
pub mod morph;
pub mod projection;
pub mod rotation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Point in R⁴ with fields `x, y, z, w`.
pub type Point4 = nalgebra::Vector4<f64>;
/// Screen-space point in pixels.
pub type Point2 = nalgebra::Vector2<f64>;

/// Common exports for quick imports in hosts.
pub mod prelude {
    pub use crate::catalog::{Catalog, Edge, Polytope, ShapeKind};
    pub use crate::config::{ConfigError, FrameConfig, Preset, Scale, ViewInput};
    pub use crate::frame::{
        animate, AnimationDriver, DrawCmd, DrawList, FixedStepDriver, FrameHandle,
        FrameScheduler, FrameTick, RecordingSurface, Rgba, Surface,
    };
    pub use crate::morph::MorphBuffer;
    pub use crate::projection::{project, Projected, Projection, Viewport};
    pub use crate::rotation::{rotate, rotate_inverse, Plane, RotationAngles, RotationSpeeds};
    pub use crate::{Point2, Point4};
}
