use strider_core::Point;

use crate::traits::{CollisionOracle, Duplicate, Traversable};

/// [`Traversable`] built from an entity and a world that collides entities.
///
/// Every query duplicates the entity, places the copy at the candidate cell
/// and asks the world for a level collision. The borrowed entity is never
/// moved.
pub struct CloneProbe<'a, E, W> {
    entity: &'a E,
    world: &'a W,
}

impl<'a, E, W> CloneProbe<'a, E, W>
where
    E: Duplicate,
    W: CollisionOracle<E>,
{
    /// Probe placements of `entity` inside `world`.
    pub fn new(entity: &'a E, world: &'a W) -> Self {
        Self { entity, world }
    }
}

impl<E, W> Traversable for CloneProbe<'_, E, W>
where
    E: Duplicate,
    W: CollisionOracle<E>,
{
    fn is_traversable(&self, cell: Point) -> bool {
        let mut ghost = self.entity.duplicate();
        ghost.place_at(cell);
        self.world.level_collision(&ghost).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct Crate {
        at: Point,
    }

    impl Duplicate for Crate {
        fn duplicate(&self) -> Self {
            Crate { at: self.at }
        }

        fn place_at(&mut self, cell: Point) {
            self.at = cell;
        }
    }

    /// Everything with x >= 3 is solid. Counts queries.
    struct Ledge {
        queries: Cell<usize>,
    }

    impl CollisionOracle<Crate> for Ledge {
        type Collision = Point;

        fn level_collision(&self, entity: &Crate) -> Option<Point> {
            self.queries.set(self.queries.get() + 1);
            (entity.at.x >= 3).then_some(entity.at)
        }
    }

    #[test]
    fn probes_a_copy_and_leaves_the_entity_alone() {
        let entity = Crate { at: Point::new(0, 0) };
        let world = Ledge {
            queries: Cell::new(0),
        };
        let probe = CloneProbe::new(&entity, &world);

        assert!(probe.is_traversable(Point::new(2, 7)));
        assert!(!probe.is_traversable(Point::new(3, 0)));
        assert_eq!(world.queries.get(), 2);
        assert_eq!(entity, Crate { at: Point::new(0, 0) });
    }
}
