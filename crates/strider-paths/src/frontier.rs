//! Open set of an A* search.
//!
//! A `BinaryHeap` orders entries by total cost while a position-keyed map
//! records the best node known for each open position. Lowering the cost of
//! an open position pushes a fresh entry and repoints the map; the old entry
//! stays in the heap and is dropped when it surfaces.

use std::cmp::Ordering;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap};

use strider_core::{Pos, PosKey};

use crate::node::{NodeId, SearchNode};

/// Heap entry, ordered so that `BinaryHeap` pops the smallest `f` first.
#[derive(Clone, Copy, Debug)]
struct Entry {
    f: f64,
    id: NodeId,
    key: PosKey,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: lowest f, then oldest node.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Discovered but not yet expanded search states.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    best: HashMap<PosKey, (NodeId, f64)>,
    stale_skipped: usize,
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `node` as the best known state for its position.
    ///
    /// If the position is already open, `node` replaces the earlier one
    /// only when it is cheaper to reach; returns whether it was accepted.
    pub fn insert(&mut self, id: NodeId, node: &SearchNode) -> bool {
        let key = node.pos().key();
        match self.best.entry(key) {
            MapEntry::Occupied(mut e) => {
                if node.g() >= e.get().1 {
                    return false;
                }
                e.insert((id, node.g()));
            }
            MapEntry::Vacant(v) => {
                v.insert((id, node.g()));
            }
        }
        self.heap.push(Entry {
            f: node.f(),
            id,
            key,
        });
        self.high_water = self.high_water.max(self.best.len());
        true
    }

    /// Remove and return the open node with the smallest total cost.
    ///
    /// Entries superseded by a cheaper insert, or whose position has
    /// already been popped, are discarded on the way.
    pub fn pop_min(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            match self.best.get(&entry.key) {
                Some(&(id, _)) if id == entry.id => {
                    self.best.remove(&entry.key);
                    return Some(entry.id);
                }
                _ => self.stale_skipped += 1,
            }
        }
        None
    }

    /// Whether `pos` is open.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.best.contains_key(&pos.key())
    }

    /// Best recorded cost-so-far for an open position.
    #[inline]
    pub fn best_g(&self, pos: Pos) -> Option<f64> {
        self.best.get(&pos.key()).map(|&(_, g)| g)
    }

    /// Number of open positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether no position is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Superseded entries dropped by [`pop_min`](Self::pop_min) so far.
    #[inline]
    pub fn stale_skipped(&self) -> usize {
        self.stale_skipped
    }

    /// Largest number of simultaneously open positions.
    #[inline]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: f64, y: f64, g: f64, h: f64) -> SearchNode {
        SearchNode::new(Pos::new(x, y), g, h, None)
    }

    #[test]
    fn pops_lowest_total_cost_first() {
        let mut fr = Frontier::new();
        fr.insert(NodeId(0), &node(0.0, 0.0, 4.0, 6.0));
        fr.insert(NodeId(1), &node(1.0, 0.0, 1.0, 2.0));
        fr.insert(NodeId(2), &node(2.0, 0.0, 3.0, 4.0));

        assert_eq!(fr.pop_min(), Some(NodeId(1)));
        assert_eq!(fr.pop_min(), Some(NodeId(2)));
        assert_eq!(fr.pop_min(), Some(NodeId(0)));
        assert_eq!(fr.pop_min(), None);
    }

    #[test]
    fn membership_is_by_position() {
        let mut fr = Frontier::new();
        fr.insert(NodeId(0), &node(3.0, 4.0, 2.0, 5.0));
        assert!(fr.contains(Pos::new(3.0, 4.0)));
        assert!(fr.contains(Pos::new(3.0, 4.0 + 0.0)));
        assert!(!fr.contains(Pos::new(4.0, 3.0)));
        assert_eq!(fr.best_g(Pos::new(3.0, 4.0)), Some(2.0));
        assert_eq!(fr.len(), 1);
    }

    #[test]
    fn decrease_key_reorders_and_skips_the_stale_entry() {
        let mut fr = Frontier::new();
        fr.insert(NodeId(0), &node(0.0, 0.0, 6.0, 1.0)); // f = 7
        fr.insert(NodeId(1), &node(5.0, 5.0, 3.0, 1.0)); // f = 4

        // A cheaper route to (0, 0) shows up.
        assert!(fr.insert(NodeId(2), &node(0.0, 0.0, 2.0, 1.0))); // f = 3
        assert_eq!(fr.len(), 2);
        assert_eq!(fr.best_g(Pos::new(0.0, 0.0)), Some(2.0));

        assert_eq!(fr.pop_min(), Some(NodeId(2)));
        assert_eq!(fr.pop_min(), Some(NodeId(1)));
        // The f = 7 entry for (0, 0) must not come back out.
        assert_eq!(fr.pop_min(), None);
        assert_eq!(fr.stale_skipped(), 1);
        assert!(fr.is_empty());
    }

    #[test]
    fn costlier_duplicate_is_rejected() {
        let mut fr = Frontier::new();
        assert!(fr.insert(NodeId(0), &node(1.0, 1.0, 2.0, 1.0)));
        assert!(!fr.insert(NodeId(1), &node(1.0, 1.0, 2.0, 1.0)));
        assert!(!fr.insert(NodeId(2), &node(1.0, 1.0, 5.0, 1.0)));
        assert_eq!(fr.pop_min(), Some(NodeId(0)));
        assert_eq!(fr.pop_min(), None);
        assert_eq!(fr.stale_skipped(), 0);
    }

    #[test]
    fn high_water_tracks_peak_open_count() {
        let mut fr = Frontier::new();
        for i in 0..5 {
            fr.insert(NodeId(i), &node(i as f64, 0.0, 0.0, i as f64));
        }
        fr.pop_min();
        fr.pop_min();
        fr.insert(NodeId(5), &node(9.0, 9.0, 0.0, 0.0));
        assert_eq!(fr.len(), 4);
        assert_eq!(fr.high_water(), 5);
    }
}
