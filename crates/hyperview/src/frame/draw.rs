//! Draw list: the renderer-agnostic output of one frame.

use serde::Serialize;

use crate::catalog::{Edge, ShapeKind};
use crate::cfg::{
    DEPTH_COLOR_ALPHA, DEPTH_COLOR_GREEN, DEPTH_COLOR_W_HALF_RANGE, GHOST_POINT_ALPHA,
};
use crate::Point2;

use super::surface::Surface;

/// 8-bit color with a floating-point alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);
    pub const GHOST: Rgba = Rgba::new(255, 255, 255, GHOST_POINT_ALPHA);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Color for a vertex with pre-projection coordinate `w`.
///
/// `w ∈ [-1.5, 1.5]` maps linearly from cyan-ish (low w) to purple-ish (high w);
/// values outside the range clamp to the ends.
pub fn depth_color(w: f64) -> Rgba {
    let span = 2.0 * DEPTH_COLOR_W_HALF_RANGE;
    let intensity = ((w + DEPTH_COLOR_W_HALF_RANGE) / span).clamp(0.0, 1.0);
    let r = (255.0 * intensity).floor() as u8;
    let b = (255.0 * (1.0 - intensity)).floor() as u8;
    Rgba::new(r, DEPTH_COLOR_GREEN, b, DEPTH_COLOR_ALPHA)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

impl GradientStop {
    /// Two-stop gradient from `from` (offset 0) to `to` (offset 1).
    pub fn pair(from: Rgba, to: Rgba) -> [GradientStop; 2] {
        [
            GradientStop { offset: 0.0, color: from },
            GradientStop { offset: 1.0, color: to },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCmd {
    /// Edge of the target shape between two visible vertices.
    Line {
        edge: Edge,
        from: Point2,
        to: Point2,
        stops: [GradientStop; 2],
        width: f64,
    },
    /// Visible, non-collapsed working vertex.
    Point {
        vertex: usize,
        center: Point2,
        radius: f64,
        color: Rgba,
    },
}

/// Commands for one frame: all lines first, then all points.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawList {
    pub frame: u64,
    pub shape: ShapeKind,
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter().filter(|c| matches!(c, DrawCmd::Line { .. }))
    }

    pub fn points(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter().filter(|c| matches!(c, DrawCmd::Point { .. }))
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    /// Vertex indices that received a point, in draw order.
    pub fn point_vertices(&self) -> Vec<usize> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Point { vertex, .. } => Some(*vertex),
                DrawCmd::Line { .. } => None,
            })
            .collect()
    }

    /// Clear `surface` and draw every command in order.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for cmd in &self.commands {
            match cmd {
                DrawCmd::Line {
                    from,
                    to,
                    stops,
                    width,
                    ..
                } => surface.draw_line(*from, *to, stops, *width),
                DrawCmd::Point {
                    center,
                    radius,
                    color,
                    ..
                } => surface.fill_circle(*center, *radius, *color),
            }
        }
    }
}
