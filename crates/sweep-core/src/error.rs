//! Error types for coverage computation.
//!
//! Every failure here is structural (bad input or an exceeded guard), so
//! nothing in the core retries.

use crate::geometry::{Direction, Position};
use std::error::Error;
use std::fmt;

/// Errors raised while turning moves into coverage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoverageError {
    /// A move cannot be executed: zero steps under a rejecting policy, or
    /// an unrecognised direction name.
    InvalidMove {
        /// Position of the offending move in the input sequence.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// The reference engine would hold more cells than its configured limit.
    ///
    /// Recoverable by retrying on the range engine.
    ResourceExhausted {
        /// Cells the run needed (or had reached when it stopped).
        cells: u64,
        /// The configured limit.
        limit: u64,
    },
    /// The move would take the robot off the `i64` grid.
    CoordinateOverflow {
        /// Position before the move.
        position: Position,
        /// Direction of the move.
        direction: Direction,
        /// Requested step count.
        steps: u64,
    },
    /// An interval was constructed with `lo > hi`.
    InvalidInterval {
        /// Requested lower bound.
        lo: i64,
        /// Requested upper bound.
        hi: i64,
    },
}

impl CoverageError {
    /// Attach the index of the move that caused an [`InvalidMove`](Self::InvalidMove).
    ///
    /// Other variants are returned unchanged.
    pub fn at_move(self, index: usize) -> Self {
        match self {
            Self::InvalidMove { reason, .. } => Self::InvalidMove { index, reason },
            other => other,
        }
    }
}

impl fmt::Display for CoverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMove { index, reason } => {
                write!(f, "invalid move #{index}: {reason}")
            }
            Self::ResourceExhausted { cells, limit } => {
                write!(f, "reference engine needs {cells} cells, limit is {limit}")
            }
            Self::CoordinateOverflow {
                position,
                direction,
                steps,
            } => {
                write!(
                    f,
                    "moving {direction} {steps} from {position} leaves the grid"
                )
            }
            Self::InvalidInterval { lo, hi } => {
                write!(f, "invalid interval: lo {lo} > hi {hi}")
            }
        }
    }
}

impl Error for CoverageError {}
