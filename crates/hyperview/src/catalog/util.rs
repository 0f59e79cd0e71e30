//! Small utilities: pairwise edge rules over vertex lists.

use crate::catalog::Edge;
use crate::Point4;

/// Unordered index pairs `(i, j)` with `i < j < n`, in lexicographic order.
pub(crate) fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Edges between every pair of vertices accepted by `rule`.
pub(crate) fn edges_where<F>(vertices: &[Point4], mut rule: F) -> Vec<Edge>
where
    F: FnMut(&Point4, &Point4) -> bool,
{
    pairs(vertices.len())
        .filter(|&(i, j)| rule(&vertices[i], &vertices[j]))
        .map(|(i, j)| Edge::new(i, j))
        .collect()
}

/// Complete graph on the index range `offset..offset + n`.
pub(crate) fn complete_graph(offset: usize, n: usize) -> impl Iterator<Item = Edge> {
    pairs(n).map(move |(i, j)| Edge::new(offset + i, offset + j))
}

/// Number of coordinates (among the first `dims`) in which `a` and `b` differ.
///
/// Catalog coordinates are exact ±1 values, so exact comparison is intended.
#[allow(clippy::float_cmp)]
pub(crate) fn hamming(a: &Point4, b: &Point4, dims: usize) -> usize {
    (0..dims).filter(|&k| a[k] != b[k]).count()
}

/// Sign-pattern point: bit `k` of `bits` selects `+1` (set) or `-1` on axis `k`.
pub(crate) fn sign_point(bits: usize, w: Option<f64>) -> Point4 {
    let s = |k: usize| if bits & (1 << k) != 0 { 1.0 } else { -1.0 };
    Point4::new(s(0), s(1), s(2), w.unwrap_or_else(|| s(3)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_lexicographic_and_complete() {
        let all: Vec<_> = pairs(4).collect();
        assert_eq!(all, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(pairs(0).count(), 0);
        assert_eq!(pairs(1).count(), 0);
    }

    #[test]
    fn sign_point_uses_binary_encoding() {
        assert_eq!(sign_point(0, None), Point4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(sign_point(0b1001, None), Point4::new(1.0, -1.0, -1.0, 1.0));
        assert_eq!(sign_point(0b111, Some(-0.5)), Point4::new(1.0, 1.0, 1.0, -0.5));
    }

    #[test]
    fn hamming_respects_dims() {
        let a = Point4::new(1.0, 1.0, 1.0, 0.0);
        let b = Point4::new(1.0, -1.0, 1.0, 5.0);
        assert_eq!(hamming(&a, &b, 3), 1);
        assert_eq!(hamming(&a, &b, 4), 2);
    }
}
