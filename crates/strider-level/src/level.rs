//! Tile grid with an ASCII representation.
//!
//! ```text
//! #########
//! #S..#...#
//! #.#...#G#
//! #########
//! ```
//!
//! `#` is a wall and `.` is floor. `S` and `G` mark the start and goal and
//! are floor underneath. Everything outside the rectangle counts as wall.

use std::fmt;
use std::str::FromStr;

use log::debug;
use strider_core::{Point, Range};

use crate::error::LevelError;

/// One cell of level geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Floor,
    Wall,
}

impl Tile {
    /// Whether entities collide with this tile.
    #[inline]
    pub const fn is_solid(self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// The tile drawn by `ch`, if any. Markers are not tiles.
    pub const fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '.' => Some(Tile::Floor),
            '#' => Some(Tile::Wall),
            _ => None,
        }
    }

    /// ASCII form of the tile.
    pub const fn to_char(self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
        }
    }
}

/// A rectangular level with optional start and goal markers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LevelData"))]
pub struct Level {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
    start: Option<Point>,
    goal: Option<Point>,
}

/// Unchecked serialized form of a [`Level`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LevelData {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
    start: Option<Point>,
    goal: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<LevelData> for Level {
    type Error = LevelError;

    fn try_from(data: LevelData) -> Result<Self, LevelError> {
        let area = usize::try_from(data.width)
            .ok()
            .zip(usize::try_from(data.height).ok())
            .and_then(|(w, h)| w.checked_mul(h));
        if area != Some(data.tiles.len()) {
            return Err(LevelError::Dimensions {
                width: data.width,
                height: data.height,
                tiles: data.tiles.len(),
            });
        }
        Ok(Self {
            tiles: data.tiles,
            width: data.width,
            height: data.height,
            start: data.start,
            goal: data.goal,
        })
    }
}

impl Level {
    /// An all-floor level of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            tiles: vec![Tile::Floor; (width * height) as usize],
            width,
            height,
            start: None,
            goal: None,
        }
    }

    /// Read a level from ASCII art.
    ///
    /// Leading and trailing whitespace of the whole text is ignored; every
    /// line must then have the same width.
    pub fn parse(s: &str) -> Result<Self, LevelError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LevelError::Empty);
        }

        let mut tiles = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut height = 0;
        let mut start = None;
        let mut goal = None;

        for (y, line) in s.lines().enumerate() {
            let mut x = 0;
            for ch in line.chars() {
                let pos = Point::new(x as i32, y as i32);
                let tile = match ch {
                    'S' => mark(&mut start, 'S', pos)?,
                    'G' => mark(&mut goal, 'G', pos)?,
                    _ => Tile::from_char(ch).ok_or(LevelError::InvalidTile { ch, pos })?,
                };
                tiles.push(tile);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(LevelError::InconsistentWidth {
                        line: y + 1,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0) as i32;
        debug!("parsed {width}x{height} level, start {start:?}, goal {goal:?}");
        Ok(Self {
            tiles,
            width,
            height,
            start,
            goal,
        })
    }

    /// The rectangle covered by the level.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Position of the `S` marker.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `G` marker.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Whether `p` blocks movement. Points off the level do.
    #[inline]
    pub fn is_solid(&self, p: Point) -> bool {
        self.at(p).is_none_or(Tile::is_solid)
    }

    /// First solid point of `r` in row-major order.
    pub fn solid_in(&self, r: Range) -> Option<Point> {
        r.iter().find(|&p| self.is_solid(p))
    }

    /// ASCII art of the level with `path` drawn as `*`.
    ///
    /// Markers are drawn over the path.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut out = String::with_capacity(self.tiles.len() + self.height as usize);
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width {
                let p = Point::new(x, y);
                let ch = if Some(p) == self.start {
                    'S'
                } else if Some(p) == self.goal {
                    'G'
                } else if path.contains(&p) {
                    '*'
                } else {
                    self.tiles[self.index_unchecked(p)].to_char()
                };
                out.push(ch);
            }
        }
        out
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.bounds()
            .contains(p)
            .then(|| self.index_unchecked(p))
    }

    #[inline]
    fn index_unchecked(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

fn mark(slot: &mut Option<Point>, marker: char, pos: Point) -> Result<Tile, LevelError> {
    if slot.is_some() {
        return Err(LevelError::DuplicateMarker { marker, pos });
    }
    *slot = Some(pos);
    Ok(Tile::Floor)
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let level = Level::parse("S.#\n.#G").unwrap();
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);
    }

    #[test]
    fn json_with_wrong_tile_count_is_rejected() {
        let short = r#"{"tiles":[],"width":2,"height":2,"start":null,"goal":null}"#;
        let err = serde_json::from_str::<Level>(short).unwrap_err();
        assert!(err.to_string().contains("a 2x2 level cannot hold 0 tiles"), "{err}");

        let negative = r#"{"tiles":[],"width":-1,"height":0,"start":null,"goal":null}"#;
        assert!(serde_json::from_str::<Level>(negative).is_err());
    }
}
