//! Grid positions, compass directions, and move instructions.

use crate::error::CoverageError;
use std::fmt;
use std::str::FromStr;

/// A cell on the unbounded integer grid.
///
/// `x` grows to the east, `y` grows to the north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column coordinate.
    pub x: i64,
    /// Row coordinate.
    pub y: i64,
}

impl Position {
    /// The grid origin `(0, 0)`.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position from its two coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The position reached after walking `steps` cells in `direction`.
    ///
    /// Returns `None` if either coordinate would leave the `i64` range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sweep_core::{Direction, Position};
    ///
    /// let p = Position::new(2, 3).checked_step(Direction::West, 5).unwrap();
    /// assert_eq!(p, Position::new(-3, 3));
    /// assert!(Position::new(i64::MAX, 0).checked_step(Direction::East, 1).is_none());
    /// ```
    pub fn checked_step(self, direction: Direction, steps: u64) -> Option<Self> {
        let steps = i128::from(steps);
        let (dx, dy) = direction.delta();
        Some(Self {
            x: i64::try_from(i128::from(self.x) + i128::from(dx) * steps).ok()?,
            y: i64::try_from(i128::from(self.y) + i128::from(dy) * steps).ok()?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Compass direction of a move. Each one changes exactly one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `+y`.
    North,
    /// `+x`.
    East,
    /// `-y`.
    South,
    /// `-x`.
    West,
}

impl Direction {
    /// All four directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit `(dx, dy)` offset for one step in this direction.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Lowercase name, as used by request payloads.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = CoverageError;

    /// Parse a direction name, ignoring ASCII case.
    ///
    /// The move index in a resulting [`CoverageError::InvalidMove`] is
    /// always 0; callers parsing a list should use
    /// [`CoverageError::at_move`] to attach the real index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoverageError::InvalidMove {
                index: 0,
                reason: format!("unrecognised direction '{s}'"),
            })
    }
}

/// A single straight-line instruction: walk `steps` cells in `direction`.
///
/// # Examples
///
/// ```
/// use sweep_core::{Direction, Move};
///
/// let m = Move::new(Direction::North, 4);
/// assert_eq!(m.steps, 4);
/// assert_eq!("north".parse::<Direction>().unwrap(), m.direction);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// Direction of travel.
    pub direction: Direction,
    /// Number of cells advanced. Zero is handled by the simulator's policy.
    pub steps: u64,
}

impl Move {
    /// Create a move.
    pub const fn new(direction: Direction, steps: u64) -> Self {
        Self { direction, steps }
    }

    /// Shorthand for a northward move.
    pub const fn north(steps: u64) -> Self {
        Self::new(Direction::North, steps)
    }

    /// Shorthand for an eastward move.
    pub const fn east(steps: u64) -> Self {
        Self::new(Direction::East, steps)
    }

    /// Shorthand for a southward move.
    pub const fn south(steps: u64) -> Self {
        Self::new(Direction::South, steps)
    }

    /// Shorthand for a westward move.
    pub const fn west(steps: u64) -> Self {
        Self::new(Direction::West, steps)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.steps)
    }
}
