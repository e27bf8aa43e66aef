use strider_core::Point;

/// Whether the searching entity fits at a lattice cell.
///
/// Implementations close over the entity's shape and the level geometry and
/// must not have observable side effects.
pub trait Traversable {
    /// `true` if the entity placed at `cell` collides with nothing.
    fn is_traversable(&self, cell: Point) -> bool;
}

impl<F> Traversable for F
where
    F: Fn(Point) -> bool,
{
    #[inline]
    fn is_traversable(&self, cell: Point) -> bool {
        self(cell)
    }
}

/// An entity that can be copied and repositioned without touching the
/// original.
pub trait Duplicate {
    /// An independent copy of `self`.
    fn duplicate(&self) -> Self;

    /// Move this entity so that it occupies `cell`.
    fn place_at(&mut self, cell: Point);
}

/// Collision test of a placed entity against static level geometry.
pub trait CollisionOracle<E: ?Sized> {
    /// What the oracle reports on a hit.
    type Collision;

    /// `None` if `entity` collides with nothing at its current placement.
    fn level_collision(&self, entity: &E) -> Option<Self::Collision>;
}
