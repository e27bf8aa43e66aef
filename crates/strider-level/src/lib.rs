//! Level geometry for strider: a tile grid that entities collide against.
//!
//! [`Level`] is a rectangle of [`Tile`]s, usually read from ASCII art with
//! [`Level::parse`]. A [`Body`] is an entity footprint that the level can
//! collide ([`CollisionOracle`](strider_paths::CollisionOracle)). A
//! [`BodyProbe`] answers traversability for a body without moving it, ready
//! to hand to [`strider_paths::AStar`].

pub mod body;
pub mod error;
pub mod level;

pub use body::{Body, BodyProbe};
pub use error::LevelError;
pub use level::{Level, Tile};
