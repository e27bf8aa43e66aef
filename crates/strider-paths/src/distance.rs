use strider_core::{Point, Pos};

/// Straight-line (L2) distance between two positions.
///
/// Never exceeds the number of unit orthogonal steps between them, which
/// makes it an admissible A* estimate.
#[inline]
pub fn euclidean(a: Pos, b: Pos) -> f64 {
    a.distance(b)
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        let goal = Point::new(3, -2);
        for p in strider_core::Range::new(-4, -4, 6, 6) {
            let h = euclidean(p.into(), goal.into());
            assert!(h <= f64::from(manhattan(p, goal)) + 1e-9, "at {p}");
        }
    }

    #[test]
    fn lattice_distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(euclidean(a.into(), b.into()), 5.0);
    }
}
