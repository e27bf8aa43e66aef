use log::{debug, trace};
use strider_core::Pos;

use crate::NO_PATH;
use crate::config::SearchConfig;
use crate::distance::euclidean;
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::node::{NodeId, SearchNode, reconstruct};
use crate::probe::CloneProbe;
use crate::traits::{CollisionOracle, Duplicate, Traversable};
use crate::visited::Visited;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal position was dequeued.
    Found,
    /// Every reachable position was expanded without meeting the goal.
    Exhausted,
    /// [`SearchConfig::max_expansions`] was reached first.
    ExpansionLimit,
}

/// Result of one search, with the statistics gathered along the way.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Waypoints from start to goal inclusive, if the goal was reached.
    pub path: Option<Vec<Pos>>,
    pub outcome: Outcome,
    /// Positions expanded (moved to the closed set and probed around).
    pub expanded: usize,
    /// Superseded frontier entries discarded.
    pub stale_skipped: usize,
    /// Peak number of open positions.
    pub frontier_peak: usize,
}

impl SearchReport {
    /// Number of steps along the path.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// A* search for one entity between two positions.
///
/// The entity steps one unit along ±x or ±y at a time and every step costs
/// 1. A candidate position is accepted when the probe reports its truncated
/// cell as traversable. The start position itself is never probed.
///
/// The goal is met only by exact coordinate equality, so a goal that is not
/// on the start's unit lattice (say, half a cell off) is never reached; the
/// search reports it as unreachable once the reachable region is used up.
/// A start or goal with a non-finite coordinate is unreachable outright.
pub struct AStar<'a, T: ?Sized> {
    start: Pos,
    goal: Pos,
    probe: &'a T,
    config: SearchConfig,
}

impl<'a, T: Traversable + ?Sized> AStar<'a, T> {
    /// Prepare a search from `start` to `goal`, probing with `probe`.
    pub fn new(start: impl Into<Pos>, goal: impl Into<Pos>, probe: &'a T) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            probe,
            config: SearchConfig::default(),
        }
    }

    /// Replace the search limits.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Straight-line estimate of the steps left from `p` to the goal.
    #[inline]
    pub fn heuristic(&self, p: Pos) -> f64 {
        euclidean(p, self.goal)
    }

    /// Shortest path from start to goal, both included, or `None` if the
    /// goal cannot be reached.
    pub fn compute_path(&self) -> Option<Vec<Pos>> {
        self.search().path
    }

    /// Run the search and report how it went.
    pub fn search(&self) -> SearchReport {
        self.search_with(|_| {})
    }

    /// Like [`search`](Self::search), calling `on_expand` for every node as
    /// it is expanded.
    pub fn search_with(&self, mut on_expand: impl FnMut(&SearchNode)) -> SearchReport {
        if !self.start.is_finite() || !self.goal.is_finite() {
            return self.report(Outcome::Exhausted, None, 0, &Frontier::new());
        }

        let mut nodes = vec![SearchNode::new(
            self.start,
            0.0,
            self.heuristic(self.start),
            None,
        )];
        let mut frontier = Frontier::new();
        let mut visited = Visited::new();
        let mut neighbors = Neighbors::new();
        let mut expanded = 0;

        frontier.insert(NodeId(0), &nodes[0]);

        let outcome = loop {
            let Some(id) = frontier.pop_min() else {
                break Outcome::Exhausted;
            };
            let current = nodes[id.0].clone();

            if current.pos() == self.goal {
                let path = reconstruct(&nodes, id);
                return self.report(Outcome::Found, Some(path), expanded, &frontier);
            }
            if visited.contains(current.pos()) {
                continue;
            }
            if self.config.exhausted(expanded) {
                break Outcome::ExpansionLimit;
            }
            visited.add(current.pos());
            expanded += 1;
            on_expand(&current);
            trace!(
                "expand {} g={} h={:.3}",
                current.pos(),
                current.g(),
                current.h()
            );

            let g = current.g() + 1.0;
            let probe = self.probe;
            let config = &self.config;
            let candidates = neighbors.orthogonal(current.pos(), |n| {
                !visited.contains(n) && config.admits(n.cell()) && probe.is_traversable(n.cell())
            });
            for &n in candidates {
                if frontier.best_g(n).is_some_and(|best| g >= best) {
                    continue;
                }
                let next = NodeId(nodes.len());
                nodes.push(SearchNode::new(n, g, self.heuristic(n), Some(id)));
                frontier.insert(next, &nodes[next.0]);
            }
        };

        self.report(outcome, None, expanded, &frontier)
    }

    fn report(
        &self,
        outcome: Outcome,
        path: Option<Vec<Pos>>,
        expanded: usize,
        frontier: &Frontier,
    ) -> SearchReport {
        debug!(
            "astar {} -> {}: {:?} after {} expansions ({} stale, peak frontier {})",
            self.start,
            self.goal,
            outcome,
            expanded,
            frontier.stale_skipped(),
            frontier.high_water()
        );
        SearchReport {
            path,
            outcome,
            expanded,
            stale_skipped: frontier.stale_skipped(),
            frontier_peak: frontier.high_water(),
        }
    }
}

/// Waypoint count of the shortest path from `start` to `goal`, or
/// [`NO_PATH`] (`-1`) if there is none.
pub fn path_distance<T: Traversable + ?Sized>(
    start: impl Into<Pos>,
    goal: impl Into<Pos>,
    probe: &T,
) -> i32 {
    path_distance_with(start, goal, probe, SearchConfig::default())
}

/// [`path_distance`] under explicit search limits. A search cut short by
/// the limits counts as unreachable.
pub fn path_distance_with<T: Traversable + ?Sized>(
    start: impl Into<Pos>,
    goal: impl Into<Pos>,
    probe: &T,
    config: SearchConfig,
) -> i32 {
    match AStar::new(start, goal, probe)
        .with_config(config)
        .compute_path()
    {
        Some(path) => i32::try_from(path.len()).unwrap_or(i32::MAX),
        None => NO_PATH,
    }
}

/// [`path_distance`] for an entity in a world, probing with a
/// [`CloneProbe`].
pub fn path_distance_for<E, W>(
    start: impl Into<Pos>,
    goal: impl Into<Pos>,
    entity: &E,
    world: &W,
) -> i32
where
    E: Duplicate,
    W: CollisionOracle<E>,
{
    path_distance(start, goal, &CloneProbe::new(entity, world))
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use strider_core::{Point, Range};

    #[test]
    fn report_serializes() {
        let probe = |c: Point| Range::new(0, 0, 2, 1).contains(c);
        let report = AStar::new(Point::new(0, 0), Point::new(1, 0), &probe).search();
        let json = serde_json::to_string(&report).unwrap();
        let back: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert!(json.contains(r#""outcome":"Found""#));
    }
}
