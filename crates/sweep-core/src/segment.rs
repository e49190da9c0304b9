//! Closed integer intervals and the axis-aligned segments a move sweeps.

use crate::error::CoverageError;
use crate::geometry::{Direction, Move, Position};
use std::fmt;

/// A closed range `[lo, hi]` of integer coordinates on one axis.
///
/// Construction guarantees `lo <= hi`, so an interval always holds at
/// least one cell.
///
/// # Examples
///
/// ```
/// use sweep_core::Interval;
///
/// let a = Interval::new(2, 4).unwrap();
/// let b = Interval::new(5, 9).unwrap();
/// assert_eq!(a.len(), 3);
/// assert!(a.touches(&b)); // adjacent cells merge
/// assert_eq!(a.merge(&b), Interval::new(2, 9).unwrap());
/// assert!(Interval::new(3, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    lo: i64,
    hi: i64,
}

impl Interval {
    /// Create `[lo, hi]`, rejecting `lo > hi`.
    pub fn new(lo: i64, hi: i64) -> Result<Self, CoverageError> {
        if lo > hi {
            return Err(CoverageError::InvalidInterval { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// The single-cell interval `[v, v]`.
    pub const fn point(v: i64) -> Self {
        Self { lo: v, hi: v }
    }

    /// The interval between two coordinates in either order.
    pub fn spanning(a: i64, b: i64) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    /// Lower bound (inclusive).
    pub fn lo(&self) -> i64 {
        self.lo
    }

    /// Upper bound (inclusive).
    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// Number of cells in the interval.
    ///
    /// Saturates at `u64::MAX` for the one interval that does not fit,
    /// `[i64::MIN, i64::MAX]`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        let cells = i128::from(self.hi) - i128::from(self.lo) + 1;
        u64::try_from(cells).unwrap_or(u64::MAX)
    }

    /// Whether `v` lies inside the interval.
    pub fn contains(&self, v: i64) -> bool {
        self.lo <= v && v <= self.hi
    }

    /// Whether the two intervals share at least one cell.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }

    /// Whether the two intervals overlap or sit directly next to each other.
    ///
    /// Touching intervals are mergeable: `[1, 2]` and `[3, 4]` represent the
    /// same cells as `[1, 4]`.
    pub fn touches(&self, other: &Interval) -> bool {
        i128::from(self.lo) <= i128::from(other.hi) + 1
            && i128::from(other.lo) <= i128::from(self.hi) + 1
    }

    /// The smallest interval covering both.
    ///
    /// Only meaningful as a set union when [`touches`](Self::touches) holds.
    pub fn merge(&self, other: &Interval) -> Interval {
        Interval {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    /// Iterate every coordinate in the interval.
    pub fn iter(&self) -> std::ops::RangeInclusive<i64> {
        self.lo..=self.hi
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Which coordinate varies along a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Fixed `y`, varying `x` (east/west moves).
    Horizontal,
    /// Fixed `x`, varying `y` (north/south moves).
    Vertical,
}

impl Axis {
    /// The axis a move in `direction` travels along.
    pub fn of(direction: Direction) -> Self {
        match direction {
            Direction::East | Direction::West => Axis::Horizontal,
            Direction::North | Direction::South => Axis::Vertical,
        }
    }
}

/// The unit-width strip of cells swept by one move.
///
/// A horizontal segment is "at `y = fixed`, `x` ranges over `span`"; a
/// vertical one is "at `x = fixed`, `y` ranges over `span`".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Orientation of the strip.
    pub axis: Axis,
    /// The coordinate held constant along the strip.
    pub fixed: i64,
    /// Cells covered on the varying axis.
    pub span: Interval,
}

impl Segment {
    /// Create a segment.
    pub const fn new(axis: Axis, fixed: i64, span: Interval) -> Self {
        Self { axis, fixed, span }
    }

    /// A horizontal segment at row `y`.
    pub const fn horizontal(y: i64, span: Interval) -> Self {
        Self::new(Axis::Horizontal, y, span)
    }

    /// A vertical segment at column `x`.
    pub const fn vertical(x: i64, span: Interval) -> Self {
        Self::new(Axis::Vertical, x, span)
    }

    /// The degenerate one-cell segment at `p`.
    pub const fn cell(p: Position) -> Self {
        Self::horizontal(p.y, Interval::point(p.x))
    }

    /// The segment swept by executing `mv` from `from`, and the end position.
    ///
    /// A zero-step move yields the one-cell segment at `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sweep_core::{Interval, Move, Position, Segment};
    ///
    /// let (seg, end) = Segment::swept(Position::new(3, 9), Move::south(4)).unwrap();
    /// assert_eq!(seg, Segment::vertical(3, Interval::new(5, 9).unwrap()));
    /// assert_eq!(end, Position::new(3, 5));
    /// ```
    pub fn swept(from: Position, mv: Move) -> Result<(Self, Position), CoverageError> {
        let to = from
            .checked_step(mv.direction, mv.steps)
            .ok_or(CoverageError::CoordinateOverflow {
                position: from,
                direction: mv.direction,
                steps: mv.steps,
            })?;
        let segment = match Axis::of(mv.direction) {
            Axis::Horizontal => Self::horizontal(from.y, Interval::spanning(from.x, to.x)),
            Axis::Vertical => Self::vertical(from.x, Interval::spanning(from.y, to.y)),
        };
        Ok((segment, to))
    }

    /// Number of cells in the strip.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.span.len()
    }

    /// Whether the strip covers `p`.
    pub fn contains(&self, p: Position) -> bool {
        match self.axis {
            Axis::Horizontal => p.y == self.fixed && self.span.contains(p.x),
            Axis::Vertical => p.x == self.fixed && self.span.contains(p.y),
        }
    }

    /// Every cell of the strip, in increasing order of the varying axis.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let fixed = self.fixed;
        let axis = self.axis;
        self.span.iter().map(move |v| match axis {
            Axis::Horizontal => Position::new(v, fixed),
            Axis::Vertical => Position::new(fixed, v),
        })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.axis {
            Axis::Horizontal => write!(f, "y={} x={}", self.fixed, self.span),
            Axis::Vertical => write!(f, "x={} y={}", self.fixed, self.span),
        }
    }
}
