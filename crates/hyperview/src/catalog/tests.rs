//! Closed-form counts and structural checks for every catalog shape.

use super::*;
use std::collections::HashSet;

fn degree_histogram(p: &Polytope) -> Vec<usize> {
    let mut deg = vec![0usize; p.vertex_count()];
    for e in &p.edges {
        deg[e.source] += 1;
        deg[e.target] += 1;
    }
    deg
}

#[test]
fn counts_match_closed_form() {
    let expected = [
        (ShapeKind::Tesseract, 16, 32),
        (ShapeKind::Pentachoron, 5, 10),
        (ShapeKind::SixteenCell, 8, 24),
        (ShapeKind::TwentyFourCell, 24, 96),
        (ShapeKind::TetrahedralPrism, 8, 16),
        (ShapeKind::CubicPyramid, 9, 20),
    ];
    let catalog = Catalog::new();
    for (kind, v, e) in expected {
        let p = catalog.get(kind);
        assert_eq!(p.kind, kind);
        assert_eq!(p.vertex_count(), v, "{kind} vertices");
        assert_eq!(p.edge_count(), e, "{kind} edges");
    }
}

#[test]
fn edges_are_valid_unique_and_not_loops() {
    for p in Catalog::global().iter() {
        let mut seen = HashSet::new();
        for e in &p.edges {
            assert!(e.source < p.vertex_count() && e.target < p.vertex_count());
            assert_ne!(e.source, e.target, "{}: self loop", p.kind);
            let key = (e.source.min(e.target), e.source.max(e.target));
            assert!(seen.insert(key), "{}: duplicate edge {key:?}", p.kind);
        }
    }
}

#[test]
fn regular_shapes_have_uniform_degree() {
    let c = Catalog::global();
    let cases = [
        (ShapeKind::Tesseract, 4),
        (ShapeKind::Pentachoron, 4),
        (ShapeKind::SixteenCell, 6),
        (ShapeKind::TwentyFourCell, 8),
    ];
    for (kind, d) in cases {
        assert!(degree_histogram(c.get(kind)).iter().all(|&x| x == d), "{kind}");
    }
}

#[test]
fn pentachoron_is_regular() {
    let p = Catalog::global().get(ShapeKind::Pentachoron);
    let lens: Vec<f64> = p
        .edges
        .iter()
        .map(|e| (p.vertices[e.source] - p.vertices[e.target]).norm())
        .collect();
    for l in &lens {
        assert!((l - 8f64.sqrt()).abs() < 1e-12, "edge length {l}");
    }
    assert!((p.vertices[4].w - 4.0 / 5f64.sqrt()).abs() < 1e-15);
}

#[test]
fn tesseract_vertex_order_is_binary() {
    let p = Catalog::global().get(ShapeKind::Tesseract);
    assert_eq!(p.vertices[0], Point4::new(-1.0, -1.0, -1.0, -1.0));
    assert_eq!(p.vertices[5], Point4::new(1.0, -1.0, 1.0, -1.0));
    assert_eq!(p.vertices[15], Point4::new(1.0, 1.0, 1.0, 1.0));
}

#[test]
fn sixteen_cell_excludes_antipodes() {
    let p = Catalog::global().get(ShapeKind::SixteenCell);
    for e in &p.edges {
        let a = p.vertices[e.source];
        let b = p.vertices[e.target];
        assert!((a + b).norm() > 1e-9, "antipodal pair joined: {e:?}");
    }
}

#[test]
fn prism_and_pyramid_edge_layout() {
    let c = Catalog::global();
    let prism = c.get(ShapeKind::TetrahedralPrism);
    assert_eq!(
        &prism.edges[12..],
        &[Edge::new(0, 4), Edge::new(1, 5), Edge::new(2, 6), Edge::new(3, 7)]
    );
    assert!(prism.vertices[..4].iter().all(|v| v.w == -1.0));
    assert!(prism.vertices[4..].iter().all(|v| v.w == 1.0));

    let pyr = c.get(ShapeKind::CubicPyramid);
    assert_eq!(pyr.vertices[8], Point4::new(0.0, 0.0, 0.0, 1.2));
    assert_eq!(pyr.edges.iter().filter(|e| e.target == 8).count(), 8);
    assert!(pyr.vertices[..8].iter().all(|v| v.w == -0.5));
}

#[test]
fn every_shape_stays_in_front_of_the_4d_camera() {
    for p in Catalog::global().iter() {
        for v in &p.vertices {
            assert!(v.w < crate::cfg::DISTANCE_4D, "{}: {v:?}", p.kind);
        }
    }
}

#[test]
fn shape_ids_round_trip_and_aliases_parse() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.id().parse::<ShapeKind>().unwrap(), kind);
    }
    assert_eq!("hexadecachoron".parse::<ShapeKind>().unwrap(), ShapeKind::SixteenCell);
    assert_eq!("icositetrachoron".parse::<ShapeKind>().unwrap(), ShapeKind::TwentyFourCell);
    assert_eq!("tetraPrism".parse::<ShapeKind>().unwrap(), ShapeKind::TetrahedralPrism);
    assert_eq!(" CubicPyramid ".parse::<ShapeKind>().unwrap(), ShapeKind::CubicPyramid);
    assert!(matches!(
        "dodecaplex".parse::<ShapeKind>(),
        Err(ConfigError::UnknownShape(s)) if s == "dodecaplex"
    ));
}

#[test]
fn global_catalog_is_shared_and_complete() {
    let a = Catalog::global() as *const Catalog;
    let b = Catalog::global() as *const Catalog;
    assert_eq!(a, b);
    assert_eq!(Catalog::global().iter().count(), ShapeKind::ALL.len());
    assert_eq!(Catalog::global().max_vertex_count(), 24);
}
