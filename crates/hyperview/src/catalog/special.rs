//! Closed-form generators for the catalog polytopes.
//!
//! Purpose
//! - Provide the exact vertex order and edge rule for each shape. Vertex order is
//!   part of a shape's identity: edges and the morph buffer address vertices by
//!   index, so a reordering changes how shapes morph into each other.
//! - Keep constructors small and explicit so tests can rely on them deterministically.
//!
//! References
//! - Counts (vertices/edges): tesseract 16/32, 5-cell 5/10, 16-cell 8/24,
//!   24-cell 24/96, tetrahedral prism 8/16, cubic pyramid 9/20.

use crate::cfg::{EDGE_DIST_EPS, ORTHO_DOT_EPS};
use crate::Point4;

use super::util::{complete_graph, edges_where, hamming, pairs, sign_point};
use super::{Edge, Polytope, ShapeKind};

/// Regular tetrahedron inscribed in the cube `[-1,1]^3` (even number of minus signs).
const TETRA_BASE: [[f64; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
];

/// Build the polytope for `kind`.
pub fn generate(kind: ShapeKind) -> Polytope {
    let (vertices, edges) = match kind {
        ShapeKind::Tesseract => tesseract(),
        ShapeKind::Pentachoron => pentachoron(),
        ShapeKind::SixteenCell => sixteen_cell(),
        ShapeKind::TwentyFourCell => twenty_four_cell(),
        ShapeKind::TetrahedralPrism => tetrahedral_prism(),
        ShapeKind::CubicPyramid => cubic_pyramid(),
    };
    Polytope {
        kind,
        name: kind.name(),
        description: kind.description(),
        vertices,
        edges,
    }
}

/// Hypercube `{±1}^4`; vertex `i` takes its sign pattern from the bits of `i`.
/// Edges join vertices that differ in exactly one coordinate.
fn tesseract() -> (Vec<Point4>, Vec<Edge>) {
    let vertices: Vec<Point4> = (0..16).map(|i| sign_point(i, None)).collect();
    let edges = edges_where(&vertices, |a, b| hamming(a, b, 4) == 1);
    (vertices, edges)
}

/// Regular 5-cell: the tetrahedron base at `w = -1/√5` plus the apex at `w = 4/√5`.
/// All ten pairs are edges.
fn pentachoron() -> (Vec<Point4>, Vec<Edge>) {
    let base_w = -1.0 / 5f64.sqrt();
    let mut vertices: Vec<Point4> = TETRA_BASE
        .iter()
        .map(|&[x, y, z]| Point4::new(x, y, z, base_w))
        .collect();
    vertices.push(Point4::new(0.0, 0.0, 0.0, 4.0 / 5f64.sqrt()));
    let edges = complete_graph(0, vertices.len()).collect();
    (vertices, edges)
}

/// Orthoplex: `±e_k` for each axis, ordered `+e_x, -e_x, +e_y, ...`.
/// Edges join every pair that is (numerically) orthogonal, which excludes antipodes.
fn sixteen_cell() -> (Vec<Point4>, Vec<Edge>) {
    let mut vertices = Vec::with_capacity(8);
    for axis in 0..4 {
        for sign in [1.0, -1.0] {
            let mut v = Point4::zeros();
            v[axis] = sign;
            vertices.push(v);
        }
    }
    let edges = edges_where(&vertices, |a, b| a.dot(b).abs() < ORTHO_DOT_EPS);
    (vertices, edges)
}

/// 24-cell: two coordinates `±1`, two zero. Enumerated over axis pairs `(i, j)`
/// with `i < j`, then signs `(+,+), (+,-), (-,+), (-,-)`.
/// Edges join vertices at squared distance 2.
fn twenty_four_cell() -> (Vec<Point4>, Vec<Edge>) {
    const SIGNS: [(f64, f64); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)];
    let mut vertices = Vec::with_capacity(24);
    for (i, j) in pairs(4) {
        for (si, sj) in SIGNS {
            let mut v = Point4::zeros();
            v[i] = si;
            v[j] = sj;
            vertices.push(v);
        }
    }
    let edges = edges_where(&vertices, |a, b| {
        ((a - b).norm_squared() - 2.0).abs() < EDGE_DIST_EPS
    });
    (vertices, edges)
}

/// Tetrahedron base at `w = -1` (indices 0..4) and `w = +1` (indices 4..8).
/// Edges: each layer's complete graph, then the four vertical struts `i → i + 4`.
fn tetrahedral_prism() -> (Vec<Point4>, Vec<Edge>) {
    let mut vertices = Vec::with_capacity(8);
    for w in [-1.0, 1.0] {
        vertices.extend(TETRA_BASE.iter().map(|&[x, y, z]| Point4::new(x, y, z, w)));
    }
    let mut edges: Vec<Edge> = complete_graph(0, 4).chain(complete_graph(4, 4)).collect();
    edges.extend((0..4).map(|i| Edge::new(i, i + 4)));
    (vertices, edges)
}

/// Cube `{±1}^3` at `w = -0.5` (indices 0..8) plus the apex `(0,0,0,1.2)` at index 8.
/// Edges: cube edges (one differing coordinate among x, y, z), then one edge from
/// every cube vertex to the apex.
fn cubic_pyramid() -> (Vec<Point4>, Vec<Edge>) {
    let mut vertices: Vec<Point4> = (0..8).map(|i| sign_point(i, Some(-0.5))).collect();
    let mut edges = edges_where(&vertices, |a, b| hamming(a, b, 3) == 1);
    let apex = vertices.len();
    vertices.push(Point4::new(0.0, 0.0, 0.0, 1.2));
    edges.extend((0..apex).map(|i| Edge::new(i, apex)));
    (vertices, edges)
}
