//! Drawing-surface seam and an in-memory recording implementation.

use crate::projection::Viewport;
use crate::Point2;

use super::draw::{GradientStop, Rgba};

/// Drawing target for one frame's commands (raster canvas, SVG, recorder, ...).
pub trait Surface {
    /// Size the host currently reports for the surface (e.g. its layout size).
    fn display_size(&self) -> Viewport;
    /// Size of the backing store that commands are drawn into.
    fn size(&self) -> Viewport;
    fn resize(&mut self, size: Viewport);
    fn clear(&mut self);
    fn draw_line(&mut self, from: Point2, to: Point2, stops: &[GradientStop; 2], width: f64);
    fn fill_circle(&mut self, center: Point2, radius: f64, color: Rgba);
}

/// Operation received by a [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Resize(Viewport),
    Line {
        from: Point2,
        to: Point2,
        stops: [GradientStop; 2],
        width: f64,
    },
    Circle {
        center: Point2,
        radius: f64,
        color: Rgba,
    },
}

/// Surface that only records what it is asked to do.
///
/// `display` plays the role of the host-reported size; set it with
/// [`RecordingSurface::set_display_size`] to simulate a layout change.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    display: Viewport,
    backing: Viewport,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Surface whose backing store has not been sized yet.
    pub fn new(display: Viewport) -> Self {
        Self {
            display,
            backing: Viewport::default(),
            ops: Vec::new(),
        }
    }

    pub fn set_display_size(&mut self, size: Viewport) {
        self.display = size;
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Operations since the most recent `clear`, i.e. the visible frame.
    pub fn last_frame(&self) -> &[SurfaceOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }
}

impl Surface for RecordingSurface {
    fn display_size(&self) -> Viewport {
        self.display
    }

    fn size(&self) -> Viewport {
        self.backing
    }

    fn resize(&mut self, size: Viewport) {
        self.backing = size;
        self.ops.push(SurfaceOp::Resize(size));
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn draw_line(&mut self, from: Point2, to: Point2, stops: &[GradientStop; 2], width: f64) {
        self.ops.push(SurfaceOp::Line {
            from,
            to,
            stops: *stops,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point2, radius: f64, color: Rgba) {
        self.ops.push(SurfaceOp::Circle {
            center,
            radius,
            color,
        });
    }
}
