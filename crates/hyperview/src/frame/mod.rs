//! Per-frame driver: morph, rotate, project, and emit a draw list.
//!
//! Purpose
//! - Own the only mutable state of the pipeline (morph buffer, accumulated
//!   angles, viewport cache) and turn one `FrameConfig` into one `DrawList`.
//!
//! Frame order
//! 1. resize the surface if its reported size changed (`render` only);
//! 2. step the morph buffer toward the selected shape;
//! 3. advance angles by the speeds if playing;
//! 4. rotate and project every working vertex;
//! 5. emit one line per target edge whose endpoints are both visible;
//! 6. emit one point per visible working vertex, skipping collapsed ghosts.
//!
//! Edge topology always comes from the target shape, never from the working
//! set. Configuration changes never reset the morph buffer or the angles.

pub mod draw;
pub mod driver;
pub mod surface;

use tracing::debug;

use crate::catalog::{Catalog, ShapeKind};
use crate::cfg::{EDGE_LINE_WIDTH, POINT_RADIUS_MIN, POINT_RADIUS_SCALE};
use crate::config::FrameConfig;
use crate::morph::MorphBuffer;
use crate::projection::{Projected, Projection, Viewport};
use crate::rotation::{rotate, RotationAngles};

pub use draw::{depth_color, DrawCmd, DrawList, GradientStop, Rgba};
pub use driver::{animate, AnimationDriver, FixedStepDriver, FrameHandle, FrameTick};
pub use surface::{RecordingSurface, Surface, SurfaceOp};

#[derive(Clone, Debug)]
pub struct FrameScheduler {
    catalog: &'static Catalog,
    projection: Projection,
    morph: MorphBuffer,
    angles: RotationAngles,
    viewport: Option<Viewport>,
    target: Option<ShapeKind>,
    /// Scratch buffer reused across frames.
    projected: Vec<Option<Projected>>,
}

impl FrameScheduler {
    /// Scheduler already showing `initial`; later shape changes morph.
    pub fn new(initial: ShapeKind) -> Self {
        let catalog = Catalog::global();
        let mut s = Self::empty();
        s.morph = MorphBuffer::seeded(&catalog.get(initial).vertices);
        s.target = Some(initial);
        s
    }

    /// Scheduler with an empty morph buffer: the first shape grows out of the origin.
    pub fn empty() -> Self {
        Self {
            catalog: Catalog::global(),
            projection: Projection::default(),
            morph: MorphBuffer::new(),
            angles: RotationAngles::ZERO,
            viewport: None,
            target: None,
            projected: Vec::new(),
        }
    }

    /// Replace the default cameras.
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn angles(&self) -> &RotationAngles {
        &self.angles
    }

    pub fn morph(&self) -> &MorphBuffer {
        &self.morph
    }

    /// Viewport of the last `render` call.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Steps 2-6 for one frame.
    pub fn step(&mut self, tick: FrameTick, cfg: &FrameConfig, viewport: Viewport) -> DrawList {
        let catalog = self.catalog;
        let shape = catalog.get(cfg.shape);
        if self.target != Some(cfg.shape) {
            debug!(
                from = ?self.target.map(ShapeKind::id),
                to = cfg.shape.id(),
                slots = self.morph.len(),
                target_vertices = shape.vertex_count(),
                "shape switch"
            );
            self.target = Some(cfg.shape);
        }

        self.morph.step(&shape.vertices);

        if cfg.playing {
            self.angles.advance(&cfg.speeds);
        }

        let angles = self.angles;
        let projection = self.projection;
        let scale = cfg.scale.get();
        self.projected.clear();
        self.projected.extend(
            self.morph
                .vertices()
                .iter()
                .map(|&v| projection.project(rotate(v, &angles), viewport, scale)),
        );

        let mut commands = Vec::with_capacity(shape.edge_count() + self.projected.len());
        for &edge in &shape.edges {
            let ends = (
                self.projected.get(edge.source).copied().flatten(),
                self.projected.get(edge.target).copied().flatten(),
            );
            if let (Some(a), Some(b)) = ends {
                commands.push(DrawCmd::Line {
                    edge,
                    from: a.screen,
                    to: b.screen,
                    stops: GradientStop::pair(depth_color(a.raw_w), depth_color(b.raw_w)),
                    width: EDGE_LINE_WIDTH,
                });
            }
        }

        for (vertex, p) in self.projected.iter().enumerate() {
            let Some(p) = p else { continue };
            if self.morph.is_collapsed(vertex) {
                continue;
            }
            let color = if self.morph.is_ghost(vertex) {
                Rgba::GHOST
            } else {
                Rgba::WHITE
            };
            commands.push(DrawCmd::Point {
                vertex,
                center: p.screen,
                radius: POINT_RADIUS_MIN.max(POINT_RADIUS_SCALE * p.depth_factor),
                color,
            });
        }

        DrawList {
            frame: tick.index,
            shape: cfg.shape,
            commands,
        }
    }

    /// Full frame onto `surface`: resize if needed, step, clear, draw.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        tick: FrameTick,
        cfg: &FrameConfig,
        surface: &mut S,
    ) -> DrawList {
        let reported = surface.display_size();
        if surface.size() != reported {
            debug!(width = reported.width, height = reported.height, "resize surface");
            surface.resize(reported);
        }
        self.viewport = Some(reported);
        let list = self.step(tick, cfg, reported);
        list.replay(surface);
        list
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(FrameConfig::default().shape)
    }
}
