//! Collision-aware shortest paths for a single entity.
//!
//! An entity moves through continuous space in unit steps along the four
//! orthogonal directions. [`AStar`] finds the shortest such walk from a start
//! position to a goal position, asking a [`Traversable`] capability whether
//! the entity fits at each candidate cell.
//!
//! - [`AStar::compute_path`] returns the waypoints, start and goal included,
//!   or `None` when the goal cannot be reached.
//! - [`AStar::search`] returns a [`SearchReport`] with expansion statistics.
//! - [`path_distance`] returns the waypoint count, or `-1`.
//!
//! # Capabilities
//!
//! | Trait | Role |
//! |---|---|
//! | [`Traversable`] | Stateless "does the entity fit at this cell" query |
//! | [`Duplicate`] | Clone an entity and move the clone |
//! | [`CollisionOracle`] | Test a placed entity against level geometry |
//!
//! [`CloneProbe`] adapts the last two into a [`Traversable`] for callers
//! whose world only knows how to collide concrete entities.
//!
//! Searches are unbounded by default. On open terrain a search for an
//! unreachable goal never ends; set [`SearchConfig::max_expansions`] or
//! [`SearchConfig::bounds`] when that can happen.

mod astar;
mod config;
mod distance;
mod frontier;
mod neighbors;
mod node;
mod probe;
mod traits;
mod visited;

pub use astar::{AStar, Outcome, SearchReport, path_distance, path_distance_for, path_distance_with};
pub use config::SearchConfig;
pub use distance::{euclidean, manhattan};
pub use frontier::Frontier;
pub use neighbors::Neighbors;
pub use node::{NodeId, SearchNode};
pub use probe::CloneProbe;
pub use traits::{CollisionOracle, Duplicate, Traversable};
pub use visited::Visited;

/// Sentinel returned by [`path_distance`] when no path exists.
pub const NO_PATH: i32 = -1;
