use strider_core::{Point, Range};

/// Limits applied to a search.
///
/// The default is unlimited: the search runs until it reaches the goal or
/// has expanded every reachable position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Stop after expanding this many positions.
    pub max_expansions: Option<usize>,
    /// Never step onto cells outside this range.
    pub bounds: Option<Range>,
}

impl SearchConfig {
    /// No limits.
    pub const UNLIMITED: Self = Self {
        max_expansions: None,
        bounds: None,
    };

    /// Cap the number of expanded positions.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Confine the search to `bounds`.
    pub fn with_bounds(mut self, bounds: Range) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Whether `cell` may be stepped onto.
    #[inline]
    pub fn admits(&self, cell: Point) -> bool {
        self.bounds.is_none_or(|b| b.contains(cell))
    }

    /// Whether `expanded` positions already use up the expansion budget.
    #[inline]
    pub fn exhausted(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let c: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, SearchConfig::UNLIMITED);

        let c: SearchConfig = serde_json::from_str(r#"{"max_expansions":500}"#).unwrap();
        assert_eq!(c.max_expansions, Some(500));
        assert_eq!(c.bounds, None);
    }

    #[test]
    fn round_trip() {
        let c = SearchConfig::default()
            .with_max_expansions(64)
            .with_bounds(Range::new(-2, -2, 8, 8));
        let json = serde_json::to_string(&c).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
