//! Entity footprints and how they collide with a [`Level`].

use strider_core::{Point, Range};
use strider_paths::{CollisionOracle, Duplicate, Traversable};

use crate::level::Level;

/// Axis-aligned footprint of an entity, anchored at its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    pub cell: Point,
    pub size: Point,
}

impl Body {
    /// A `width` × `height` body at `cell`. Sizes below 1 are raised to 1.
    pub fn new(cell: Point, width: i32, height: i32) -> Self {
        Self {
            cell,
            size: Point::new(width.max(1), height.max(1)),
        }
    }

    /// A single-cell body.
    pub fn unit(cell: Point) -> Self {
        Self::new(cell, 1, 1)
    }

    /// Cells covered by the body, or `None` if it reaches past the edge of
    /// the integer lattice.
    #[inline]
    pub fn footprint(&self) -> Option<Range> {
        footprint_at(self.cell, self.size)
    }
}

#[inline]
fn footprint_at(cell: Point, size: Point) -> Option<Range> {
    let x1 = cell.x.checked_add(size.x)?;
    let y1 = cell.y.checked_add(size.y)?;
    Some(Range::new(cell.x, cell.y, x1, y1))
}

/// First solid cell of a footprint anchored at `cell`. A footprint off the
/// lattice collides at `cell`.
fn collision_in(level: &Level, cell: Point, footprint: Option<Range>) -> Option<Point> {
    match footprint {
        Some(r) => level.solid_in(r),
        None => Some(cell),
    }
}

impl Duplicate for Body {
    fn duplicate(&self) -> Self {
        *self
    }

    fn place_at(&mut self, cell: Point) {
        self.cell = cell;
    }
}

impl CollisionOracle<Body> for Level {
    /// First solid cell under the body.
    type Collision = Point;

    fn level_collision(&self, body: &Body) -> Option<Point> {
        collision_in(self, body.cell, body.footprint())
    }
}

/// Traversability of a body's shape in a level, without placing the body
/// anywhere.
#[derive(Debug, Clone, Copy)]
pub struct BodyProbe<'a> {
    level: &'a Level,
    size: Point,
}

impl<'a> BodyProbe<'a> {
    /// Probe for bodies shaped like `body`.
    pub fn new(level: &'a Level, body: &Body) -> Self {
        Self {
            level,
            size: body.size,
        }
    }
}

impl Traversable for BodyProbe<'_> {
    #[inline]
    fn is_traversable(&self, cell: Point) -> bool {
        collision_in(self.level, cell, footprint_at(cell, self.size)).is_none()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn body_json() {
        let b = Body::new(Point::new(3, 4), 2, 1);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"cell":{"x":3,"y":4},"size":{"x":2,"y":1}}"#);
        let back: Body = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
