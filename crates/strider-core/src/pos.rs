//! Continuous positions.
//!
//! Entities are placed with real-valued coordinates. Movement happens in unit
//! steps, so a position reached from an integral start stays integral, but
//! nothing here assumes it.

use std::fmt;

use crate::geom::Point;

/// A real-valued position in level space.
///
/// `PartialEq` is plain `f64` comparison: `NaN` never equals anything.
/// Use [`Pos::key`] when a position has to live in a hashed set.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return the position moved by a lattice offset.
    #[inline]
    pub fn step(self, d: Point) -> Self {
        Self::new(self.x + f64::from(d.x), self.y + f64::from(d.y))
    }

    /// The lattice cell holding this position.
    ///
    /// Each coordinate is truncated toward zero; out-of-range values saturate
    /// and `NaN` maps to 0.
    #[inline]
    pub fn cell(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Pos) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Hashable identity of this position.
    #[inline]
    pub fn key(self) -> PosKey {
        PosKey(canonical_bits(self.x), canonical_bits(self.y))
    }
}

impl From<Point> for Pos {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<(f64, f64)> for Pos {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Pos> for (f64, f64) {
    fn from(p: Pos) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bit-level identity of a [`Pos`], usable as a hash key.
///
/// Both zeros map to the same key and every `NaN` maps to one key, so equal
/// positions always share a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PosKey(u64, u64);

fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cell_truncates_toward_zero() {
        assert_eq!(Pos::new(2.9, 3.1).cell(), Point::new(2, 3));
        assert_eq!(Pos::new(-0.5, -1.7).cell(), Point::new(0, -1));
        assert_eq!(Pos::new(f64::NAN, 1e20).cell(), Point::new(0, i32::MAX));
    }

    #[test]
    fn step_moves_by_lattice_offset() {
        let p = Pos::new(1.5, 2.0).step(Point::new(-1, 0));
        assert_eq!(p, Pos::new(0.5, 2.0));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Pos::new(0.0, 0.0).distance(Pos::new(3.0, 4.0)), 5.0);
        assert_eq!(Pos::new(1.0, 1.0).distance(Pos::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn signed_zeros_share_a_key() {
        let a = Pos::new(0.0, -0.0);
        let b = Pos::new(-0.0, 0.0);
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn nan_positions_share_a_key_but_never_compare_equal() {
        let a = Pos::new(f64::NAN, 0.0);
        assert_ne!(a, a);
        let mut set = HashSet::new();
        set.insert(a.key());
        assert!(set.contains(&Pos::new(-f64::NAN, 0.0).key()));
    }

    #[test]
    fn distinct_positions_have_distinct_keys() {
        assert_ne!(Pos::new(1.0, 2.0).key(), Pos::new(2.0, 1.0).key());
        assert_ne!(Pos::new(1.0, 2.0).key(), Pos::new(1.0, 2.5).key());
    }
}
