//! Interval-based coverage engine for long paths.
//!
//! Coverage is kept as two families of [`IntervalSet`]s: rows (keyed by
//! `y`, fed by horizontal segments) and columns (keyed by `x`, fed by
//! vertical segments). Within one family a cell is counted at most once,
//! but a cell where a row run crosses a column run lives in both. The
//! distinct total is therefore the union area of the unit-width
//! rectangles every stored run describes, computed by a sweep line rather
//! than by summing the families.

use crate::interval_set::IntervalSet;
use crate::tree::{union_area, Rect};
use std::cell::Cell;
use std::collections::BTreeMap;
use sweep_core::{Axis, CoverageEngine, CoverageError, Position, Segment};

/// Coverage engine whose cost depends on the number of moves, not on how
/// far the robot travels.
///
/// `ingest` merges the segment into its row or column in `O(log k)` for a
/// line with `k` runs. `total` reconciles both families in
/// `O(n log n)` for `n` stored runs and caches the answer until coverage
/// changes again.
///
/// # Examples
///
/// ```
/// use sweep_core::{CoverageEngine, Interval, Segment};
/// use sweep_coverage::RangeEngine;
///
/// let mut engine = RangeEngine::new();
/// // Start (0,0), east 4, then north 4: (4,0) is shared.
/// engine.ingest(&Segment::horizontal(0, Interval::new(0, 4).unwrap())).unwrap();
/// engine.ingest(&Segment::vertical(4, Interval::new(0, 4).unwrap())).unwrap();
/// assert_eq!(engine.total(), 9);
/// assert_eq!(engine.row_cells() + engine.column_cells(), 10);
///
/// // One billion cells, no per-cell storage.
/// engine.ingest(&Segment::horizontal(7, Interval::new(0, 999_999_999).unwrap())).unwrap();
/// assert_eq!(engine.total(), 1_000_000_009);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RangeEngine {
    rows: BTreeMap<i64, IntervalSet>,
    columns: BTreeMap<i64, IntervalSet>,
    row_cells: u64,
    column_cells: u64,
    cached_total: Cell<Option<u64>>,
}

impl RangeEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `segment` into its family and return the cells new to that family.
    ///
    /// The returned count ignores the other family, so it over-reports
    /// cells where the segment crosses perpendicular coverage.
    pub fn insert(&mut self, segment: &Segment) -> u64 {
        let (lines, counter) = match segment.axis {
            Axis::Horizontal => (&mut self.rows, &mut self.row_cells),
            Axis::Vertical => (&mut self.columns, &mut self.column_cells),
        };
        let added = lines.entry(segment.fixed).or_default().insert(segment.span);
        if added > 0 {
            *counter = counter.saturating_add(added);
            self.cached_total.set(None);
        }
        added
    }

    /// Cells covered by horizontal segments.
    pub fn row_cells(&self) -> u64 {
        self.row_cells
    }

    /// Cells covered by vertical segments.
    pub fn column_cells(&self) -> u64 {
        self.column_cells
    }

    /// Number of runs stored across both families.
    pub fn interval_count(&self) -> usize {
        self.rows
            .values()
            .chain(self.columns.values())
            .map(IntervalSet::len)
            .sum()
    }

    /// The row at `y`, if anything was swept horizontally there.
    pub fn row(&self, y: i64) -> Option<&IntervalSet> {
        self.rows.get(&y)
    }

    /// The column at `x`, if anything was swept vertically there.
    pub fn column(&self, x: i64) -> Option<&IntervalSet> {
        self.columns.get(&x)
    }

    /// Whether `p` is covered by either family.
    pub fn contains(&self, p: Position) -> bool {
        self.rows.get(&p.y).is_some_and(|r| r.contains(p.x))
            || self.columns.get(&p.x).is_some_and(|c| c.contains(p.y))
    }

    fn rects(&self) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(self.interval_count());
        for (&y, row) in &self.rows {
            let y = i128::from(y);
            rects.extend(row.iter().map(|run| Rect {
                x0: i128::from(run.lo()),
                x1: i128::from(run.hi()) + 1,
                y0: y,
                y1: y + 1,
            }));
        }
        for (&x, column) in &self.columns {
            let x = i128::from(x);
            rects.extend(column.iter().map(|run| Rect {
                x0: x,
                x1: x + 1,
                y0: i128::from(run.lo()),
                y1: i128::from(run.hi()) + 1,
            }));
        }
        rects
    }

    fn reconcile(&self) -> u64 {
        // A single family never double counts.
        if self.columns.is_empty() {
            return self.row_cells;
        }
        if self.rows.is_empty() {
            return self.column_cells;
        }
        u64::try_from(union_area(&self.rects())).unwrap_or(u64::MAX)
    }
}

impl CoverageEngine for RangeEngine {
    fn ingest(&mut self, segment: &Segment) -> Result<(), CoverageError> {
        self.insert(segment);
        Ok(())
    }

    fn total(&self) -> u64 {
        if let Some(total) = self.cached_total.get() {
            return total;
        }
        let total = self.reconcile();
        self.cached_total.set(Some(total));
        total
    }
}
