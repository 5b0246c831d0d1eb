//! Rectangle predicates used by the block allocator.

use super::types::Bounds;

/// Whether two axis-aligned rectangles intersect.
///
/// Touching edges count as overlap: two rectangles are disjoint only when one
/// lies strictly to the left, right, above, or below the other. Symmetric in
/// its arguments, no failure modes.
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    !((a.x_min > b.x_max) || (b.x_min > a.x_max) || (a.y_min > b.y_max) || (b.y_min > a.y_max))
}

/// Whether `inner` lies entirely inside `outer` (shared edges allowed).
pub fn contains(outer: &Bounds, inner: &Bounds) -> bool {
    inner.x_min >= outer.x_min
        && inner.x_max <= outer.x_max
        && inner.y_min >= outer.y_min
        && inner.y_max <= outer.y_max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Bounds {
        Bounds::new(x_min, x_max, y_min, y_max)
    }

    #[test]
    fn overlaps_basic_cases() {
        let a = b(0.0, 10.0, 0.0, 10.0);
        // Proper intersection
        assert!(overlaps(&a, &b(5.0, 15.0, 5.0, 15.0)));
        // One inside the other
        assert!(overlaps(&a, &b(2.0, 8.0, 2.0, 8.0)));
        // Disjoint on X
        assert!(!overlaps(&a, &b(10.1, 20.0, 0.0, 10.0)));
        // Disjoint on Y
        assert!(!overlaps(&a, &b(0.0, 10.0, -20.0, -0.1)));
    }

    #[test]
    fn overlaps_counts_touching_edges() {
        let a = b(0.0, 10.0, 0.0, 10.0);
        // Shared vertical edge
        assert!(overlaps(&a, &b(10.0, 20.0, 0.0, 10.0)));
        // Shared horizontal edge
        assert!(overlaps(&a, &b(0.0, 10.0, 10.0, 20.0)));
        // Shared corner point only
        assert!(overlaps(&a, &b(10.0, 20.0, 10.0, 20.0)));
    }

    #[test]
    fn overlaps_handles_degenerate_rectangles() {
        // Zero-area rectangle on an edge of the other
        let point = b(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&point, &b(0.0, 10.0, 0.0, 10.0)));
        // Zero-area rectangle outside
        assert!(!overlaps(&point, &b(20.0, 30.0, 20.0, 30.0)));
        // Two coincident degenerate rectangles
        assert!(overlaps(&point, &point));
    }

    #[test]
    fn overlaps_is_symmetric() {
        let cases = [
            (b(0.0, 10.0, 0.0, 10.0), b(5.0, 15.0, 5.0, 15.0)),
            (b(0.0, 10.0, 0.0, 10.0), b(10.0, 20.0, 10.0, 20.0)),
            (b(0.0, 10.0, 0.0, 10.0), b(11.0, 20.0, 0.0, 10.0)),
            (b(5.0, 5.0, 5.0, 5.0), b(5.0, 5.0, 5.0, 5.0)),
        ];
        for (a, c) in cases {
            assert_eq!(overlaps(&a, &c), overlaps(&c, &a));
        }
    }

    #[test]
    fn contains_requires_full_inclusion() {
        let outer = b(0.0, 100.0, 0.0, 100.0);
        assert!(contains(&outer, &b(10.0, 90.0, 10.0, 90.0)));
        assert!(contains(&outer, &outer));
        assert!(!contains(&outer, &b(-1.0, 90.0, 10.0, 90.0)));
        assert!(!contains(&outer, &b(10.0, 90.0, 10.0, 100.1)));
    }
}
