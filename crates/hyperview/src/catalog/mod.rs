//! Polytope catalog: vertex/edge data for every supported 4D shape.
//!
//! Purpose
//! - Generate each shape once from its closed-form rule and share it read-only for
//!   the rest of the process. Nothing here is recomputed per frame.
//!
//! Why this design
//! - Shapes are addressed by a closed enum (`ShapeKind`), so an unresolved shape
//!   cannot reach the frame loop; string identifiers are parsed at the boundary.
//! - Vertex insertion order defines index identity; `Edge` indices point into it.

mod special;
mod util;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::Point4;

pub use special::generate;

/// Ordered pair of vertex indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    #[inline]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

/// The six catalog shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    #[serde(rename = "tesseract")]
    Tesseract,
    #[serde(rename = "pentachoron")]
    Pentachoron,
    #[serde(rename = "16-cell")]
    SixteenCell,
    #[serde(rename = "24-cell")]
    TwentyFourCell,
    #[serde(rename = "tetra-prism")]
    TetrahedralPrism,
    #[serde(rename = "cubic-pyramid")]
    CubicPyramid,
}

impl ShapeKind {
    /// Catalog order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Tesseract,
        ShapeKind::Pentachoron,
        ShapeKind::SixteenCell,
        ShapeKind::TwentyFourCell,
        ShapeKind::TetrahedralPrism,
        ShapeKind::CubicPyramid,
    ];

    /// Stable identifier used in configuration and JSON.
    pub const fn id(self) -> &'static str {
        match self {
            ShapeKind::Tesseract => "tesseract",
            ShapeKind::Pentachoron => "pentachoron",
            ShapeKind::SixteenCell => "16-cell",
            ShapeKind::TwentyFourCell => "24-cell",
            ShapeKind::TetrahedralPrism => "tetra-prism",
            ShapeKind::CubicPyramid => "cubic-pyramid",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Tesseract => "Tesseract (Hypercube)",
            ShapeKind::Pentachoron => "Pentachoron (5-Cell)",
            ShapeKind::SixteenCell => "16-Cell (Orthoplex)",
            ShapeKind::TwentyFourCell => "24-Cell",
            ShapeKind::TetrahedralPrism => "Tetrahedral Prism",
            ShapeKind::CubicPyramid => "Cubic Pyramid",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ShapeKind::Tesseract => {
                "The four-dimensional analogue of the cube. It has 16 vertices, 32 edges, \
                 24 square faces, and 8 cubic cells."
            }
            ShapeKind::Pentachoron => {
                "The simplest regular 4-polytope, analogous to a tetrahedron. \
                 It has 5 vertices and 10 edges."
            }
            ShapeKind::SixteenCell => {
                "The dual of the tesseract and the 4D analogue of the octahedron. \
                 It has 8 vertices and 24 edges."
            }
            ShapeKind::TwentyFourCell => {
                "A regular 4-polytope with no 3D analogue. It is self-dual and \
                 composed of 24 octahedral cells."
            }
            ShapeKind::TetrahedralPrism => {
                "A prism made by extruding a tetrahedron into the fourth dimension."
            }
            ShapeKind::CubicPyramid => {
                "A 4D pyramid bounded by one cube and 6 square pyramids meeting at an apex."
            }
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    /// Accepts the stable ids and the older camel-case catalog keys, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let kind = match key.as_str() {
            "tesseract" | "hypercube" => ShapeKind::Tesseract,
            "pentachoron" | "5-cell" => ShapeKind::Pentachoron,
            "16-cell" | "hexadecachoron" | "orthoplex" => ShapeKind::SixteenCell,
            "24-cell" | "icositetrachoron" => ShapeKind::TwentyFourCell,
            "tetra-prism" | "tetraprism" => ShapeKind::TetrahedralPrism,
            "cubic-pyramid" | "cubicpyramid" => ShapeKind::CubicPyramid,
            _ => return Err(ConfigError::UnknownShape(s.to_string())),
        };
        Ok(kind)
    }
}

/// Immutable shape definition.
///
/// Invariants:
/// - every `Edge` index is `< vertices.len()`;
/// - `name`/`description` are presentation metadata only.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polytope {
    pub kind: ShapeKind,
    pub name: &'static str,
    pub description: &'static str,
    pub vertices: Vec<Point4>,
    pub edges: Vec<Edge>,
}

impl Polytope {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// All catalog shapes, generated once.
#[derive(Clone, Debug)]
pub struct Catalog {
    shapes: Vec<Polytope>,
}

impl Catalog {
    pub fn new() -> Self {
        let shapes = ShapeKind::ALL.iter().map(|&k| generate(k)).collect();
        Self { shapes }
    }

    /// Process-wide catalog, built on first use.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::new)
    }

    pub fn get(&self, kind: ShapeKind) -> &Polytope {
        // Discriminants follow `ShapeKind::ALL`, which is the order `shapes` is built in.
        &self.shapes[kind as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Polytope> {
        self.shapes.iter()
    }

    /// Largest vertex count in the catalog (upper bound for the morph buffer).
    pub fn max_vertex_count(&self) -> usize {
        self.shapes.iter().map(Polytope::vertex_count).max().unwrap_or(0)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
