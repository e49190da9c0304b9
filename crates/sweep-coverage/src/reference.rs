//! Cell-by-cell coverage engine used as the correctness oracle.

use indexmap::IndexSet;
use sweep_core::{CoverageEngine, CoverageError, Position, Segment};

/// Stores every visited cell explicitly.
///
/// Correct by construction: the total is simply the size of the set. Time
/// and memory grow with the summed length of all segments, so this engine
/// is meant for small inputs and for cross-checking [`RangeEngine`](crate::RangeEngine).
///
/// An optional cell limit turns unbounded growth into
/// [`CoverageError::ResourceExhausted`].
///
/// # Examples
///
/// ```
/// use sweep_core::{CoverageEngine, Interval, Segment};
/// use sweep_coverage::ReferenceEngine;
///
/// let mut engine = ReferenceEngine::new();
/// engine.ingest(&Segment::horizontal(0, Interval::new(0, 4).unwrap())).unwrap();
/// engine.ingest(&Segment::vertical(4, Interval::new(0, 4).unwrap())).unwrap();
/// assert_eq!(engine.total(), 9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReferenceEngine {
    visited: IndexSet<Position>,
    limit: Option<u64>,
}

impl ReferenceEngine {
    /// Create an engine with no cell limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that refuses to hold more than `limit` cells.
    pub fn with_limit(limit: u64) -> Self {
        Self {
            visited: IndexSet::new(),
            limit: Some(limit),
        }
    }

    /// The configured cell limit, if any.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Whether `p` has been visited.
    pub fn contains(&self, p: Position) -> bool {
        self.visited.contains(&p)
    }

    /// Visited cells in first-visit order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.visited.iter().copied()
    }
}

impl CoverageEngine for ReferenceEngine {
    fn ingest(&mut self, segment: &Segment) -> Result<(), CoverageError> {
        let held = self.visited.len() as u64;
        let Some(limit) = self.limit else {
            self.visited.extend(segment.cells());
            return Ok(());
        };

        // Fast path: even if every cell is new the limit holds.
        if held.saturating_add(segment.len()) <= limit {
            self.visited.extend(segment.cells());
            return Ok(());
        }

        // Never grows past the limit; cells before the refused one stay.
        for cell in segment.cells() {
            if self.visited.contains(&cell) {
                continue;
            }
            let cells = self.visited.len() as u64 + 1;
            if cells > limit {
                return Err(CoverageError::ResourceExhausted { cells, limit });
            }
            self.visited.insert(cell);
        }
        Ok(())
    }

    fn total(&self) -> u64 {
        self.visited.len() as u64
    }
}
