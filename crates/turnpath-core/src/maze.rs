//! Maze maps decoded from text.
//!
//! A [`Maze`] parses rows of `#` (wall), `.` (open), `S` (start) and `E`
//! (goal) into a flat tile buffer. The start and goal markers are recorded
//! and replaced by open tiles, so the tile map itself only knows walls and
//! floor.

use std::fmt;
use std::str::FromStr;

use crate::direction::Direction;
use crate::geom::{Point, Range};

/// A single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Whether an agent may stand on this tile.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }
}

/// The two markers a maze must contain exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Start,
    Goal,
}

impl Marker {
    /// The character used for this marker in maze text.
    pub const fn symbol(self) -> char {
        match self {
            Marker::Start => 'S',
            Marker::Goal => 'E',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Start => write!(f, "start marker 'S'"),
            Marker::Goal => write!(f, "goal marker 'E'"),
        }
    }
}

/// A rectangular maze with a unique start and goal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    tiles: Vec<Tile>,
    bounds: Range,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Facing of the agent on the start cell. Fixed by the puzzle, not read
    /// from the map.
    pub const START_FACING: Direction = Direction::East;

    /// Parse a maze from text.
    ///
    /// Empty lines are skipped, so trailing blank lines never become part of
    /// the grid. A trailing `'\r'` on each line is ignored.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        Self::from_rows(s.lines())
    }

    /// Build a maze from already split rows.
    ///
    /// All non-empty rows must have the same width (in characters). Each of
    /// `S` and `E` must occur exactly once.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut width: Option<usize> = None;
        let mut height: i32 = 0;
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;

        for row in rows {
            let row = row.as_ref();
            let row = row.strip_suffix('\r').unwrap_or(row);
            if row.is_empty() {
                continue;
            }
            let y = height;
            let mut x: i32 = 0;
            for ch in row.chars() {
                let pos = Point::new(x, y);
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Open,
                    'S' => {
                        mark(&mut start, Marker::Start, pos)?;
                        Tile::Open
                    }
                    'E' => {
                        mark(&mut goal, Marker::Goal, pos)?;
                        Tile::Open
                    }
                    _ => return Err(MazeError::InvalidTile { ch, pos }),
                };
                tiles.push(tile);
                x += 1;
            }
            let found = x as usize;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(MazeError::InconsistentWidth {
                        row: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let Some(width) = width else {
            return Err(MazeError::Empty);
        };
        let start = start.ok_or(MazeError::MissingMarker(Marker::Start))?;
        let goal = goal.ok_or(MazeError::MissingMarker(Marker::Goal))?;

        let bounds = Range::new(0, 0, width as i32, height);
        log::debug!(
            "parsed {}x{} maze, start {start}, goal {goal}",
            bounds.width(),
            bounds.height()
        );
        Ok(Self {
            tiles,
            bounds,
            start,
            goal,
        })
    }

    /// The (width, height) of the maze in cells.
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in cells.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The rectangle covered by the maze, anchored at the origin.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Position of the start marker.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the goal marker.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds.index_of(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_open)
    }

    /// Row-major iterator over every open cell.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds
            .iter()
            .zip(self.tiles.iter())
            .filter(|(_, t)| t.is_open())
            .map(|(p, _)| p)
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_open()).count()
    }
}

fn mark(slot: &mut Option<Point>, marker: Marker, pos: Point) -> Result<(), MazeError> {
    if let Some(first) = *slot {
        return Err(MazeError::DuplicateMarker {
            marker,
            first,
            second: pos,
        });
    }
    *slot = Some(pos);
    Ok(())
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Maze {
    /// Renders the maze back into the text format accepted by
    /// [`Maze::parse`], markers included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let p = Point::new(x, y);
                let ch = if p == self.start {
                    Marker::Start.symbol()
                } else if p == self.goal {
                    Marker::Goal.symbol()
                } else {
                    match self.at(p) {
                        Some(Tile::Wall) => '#',
                        _ => '.',
                    }
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when decoding a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No non-empty rows were supplied.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A character outside `#.SE` was found.
    InvalidTile { ch: char, pos: Point },
    /// A required marker does not occur.
    MissingMarker(Marker),
    /// A marker occurs more than once.
    DuplicateMarker {
        marker: Marker,
        first: Point,
        second: Point,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidTile { ch, pos } => {
                write!(f, "maze contains invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker(marker) => write!(f, "maze: missing {marker}"),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(f, "maze: {marker} found at both {first} and {second}"),
        }
    }
}

impl std::error::Error for MazeError {}
