use strider_core::Point;
use thiserror::Error;

/// Errors that can occur when reading a level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// The text has no tiles.
    #[error("level is empty")]
    Empty,

    /// A line is not as wide as the first one.
    #[error("line {line} is {found} tiles wide, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A character that is not a tile or marker.
    #[error("invalid tile \u{201c}{ch}\u{201d} at {pos}")]
    InvalidTile { ch: char, pos: Point },

    /// A start or goal marker that appears more than once.
    #[error("marker \u{201c}{marker}\u{201d} appears again at {pos}")]
    DuplicateMarker { marker: char, pos: Point },

    /// Stored tiles that do not fill the stated size.
    #[error("a {width}x{height} level cannot hold {tiles} tiles")]
    Dimensions { width: i32, height: i32, tiles: usize },
}
