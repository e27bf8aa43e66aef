use std::collections::HashSet;

use strider_core::{Pos, PosKey};

/// Closed set: positions that have already been expanded.
#[derive(Debug, Default)]
pub struct Visited {
    set: HashSet<PosKey>,
}

impl Visited {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `pos` as expanded. Returns `false` if it already was.
    #[inline]
    pub fn add(&mut self, pos: Pos) -> bool {
        self.set.insert(pos.key())
    }

    /// Whether `pos` has been expanded.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.set.contains(&pos.key())
    }

    /// Number of expanded positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether nothing has been expanded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
