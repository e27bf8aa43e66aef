use strider_core::{Point, Pos};

/// Reusable buffer for orthogonal neighbour enumeration.
pub struct Neighbors {
    buf: Vec<Pos>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Positions one unit step from `p` along +x, -x, +y, -y, keeping only
    /// those for which `keep` returns `true`.
    pub fn orthogonal(&mut self, p: Pos, mut keep: impl FnMut(Pos) -> bool) -> &[Pos] {
        self.buf.clear();
        for d in Point::ORTHOGONAL {
            let n = p.step(d);
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
