use std::hash::{Hash, Hasher};

use strider_core::Pos;

/// Index of a [`SearchNode`] in the arena owned by one search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One search state: a position together with what the search knows about
/// reaching it.
///
/// Equality and hashing look at the position only. Two nodes for the same
/// position with different costs are the same search state.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pos: Pos,
    g: f64,
    h: f64,
    parent: Option<NodeId>,
}

impl SearchNode {
    pub(crate) fn new(pos: Pos, g: f64, h: f64, parent: Option<NodeId>) -> Self {
        Self { pos, g, h, parent }
    }

    /// Where this node sits.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Steps taken from the start.
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Estimated steps remaining to the goal.
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Estimated total cost of a path through this node.
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    /// The node this one was reached from; `None` for the start.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos.key() == other.pos.key()
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.key().hash(state);
    }
}

/// Walk parent links from `end` back to the root and return the positions
/// root first.
pub(crate) fn reconstruct(nodes: &[SearchNode], end: NodeId) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(id) = cur {
        let node = &nodes[id.0];
        path.push(node.pos);
        cur = node.parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_ignores_costs() {
        let a = SearchNode::new(Pos::new(1.0, 2.0), 3.0, 4.0, None);
        let b = SearchNode::new(Pos::new(1.0, 2.0), 9.0, 0.5, Some(NodeId(0)));
        let c = SearchNode::new(Pos::new(2.0, 1.0), 3.0, 4.0, None);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
        assert!(set.insert(c));
    }

    #[test]
    fn total_cost() {
        let n = SearchNode::new(Pos::new(0.0, 0.0), 2.0, 1.5, None);
        assert_eq!(n.f(), 3.5);
    }

    #[test]
    fn reconstruct_runs_root_to_end() {
        let nodes = vec![
            SearchNode::new(Pos::new(0.0, 0.0), 0.0, 2.0, None),
            SearchNode::new(Pos::new(1.0, 0.0), 1.0, 1.0, Some(NodeId(0))),
            SearchNode::new(Pos::new(5.0, 5.0), 1.0, 9.0, Some(NodeId(0))),
            SearchNode::new(Pos::new(1.0, 1.0), 2.0, 0.0, Some(NodeId(1))),
        ];
        assert_eq!(
            reconstruct(&nodes, NodeId(3)),
            vec![Pos::new(0.0, 0.0), Pos::new(1.0, 0.0), Pos::new(1.0, 1.0)]
        );
        assert_eq!(reconstruct(&nodes, NodeId(0)), vec![Pos::new(0.0, 0.0)]);
    }
}
