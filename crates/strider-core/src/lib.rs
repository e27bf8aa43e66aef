//! Geometry shared by the strider crates.
//!
//! Level geometry lives on an integer lattice of [`Point`] cells, bounded by
//! half-open [`Range`] rectangles. Entities move through continuous space,
//! described by real-valued [`Pos`] coordinates that truncate onto the
//! lattice when collision has to be checked.

pub mod geom;
pub mod pos;

pub use geom::{Point, Range, RangeIter};
pub use pos::{Pos, PosKey};
