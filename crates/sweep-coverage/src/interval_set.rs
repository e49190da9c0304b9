//! Sorted set of disjoint, non-adjacent intervals on one line.

use smallvec::SmallVec;
use sweep_core::Interval;

/// The covered cells of one row or column, stored as maximal runs.
///
/// Intervals are sorted by `lo` and separated by at least one uncovered
/// cell: for consecutive `a`, `b` we have `a.hi() + 1 < b.lo()`. Insertion
/// merges eagerly, so the set never holds two intervals that could be
/// combined.
///
/// Most lines a robot sweeps hold one or two runs, so storage is inline
/// for small sets.
///
/// # Examples
///
/// ```
/// use sweep_core::Interval;
/// use sweep_coverage::IntervalSet;
///
/// let mut set = IntervalSet::new();
/// assert_eq!(set.insert(Interval::new(0, 4).unwrap()), 5);
/// assert_eq!(set.insert(Interval::new(8, 9).unwrap()), 2);
/// // Bridges the gap: only cells 5..=7 are new.
/// assert_eq!(set.insert(Interval::new(3, 8).unwrap()), 3);
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.cells(), 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntervalSet {
    runs: SmallVec<[Interval; 2]>,
    cells: u64,
}

impl IntervalSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `new` to the set and return how many cells were not covered before.
    ///
    /// Every stored run that overlaps or touches `new` is replaced by a
    /// single merged run.
    pub fn insert(&mut self, new: Interval) -> u64 {
        let lo_bound = i128::from(new.lo()) - 1;
        let hi_bound = i128::from(new.hi()) + 1;

        // First run that could merge: ends at or after new.lo - 1.
        let first = self
            .runs
            .partition_point(|r| i128::from(r.hi()) < lo_bound);
        // One past the last run that could merge: starts at or before new.hi + 1.
        let last = self
            .runs
            .partition_point(|r| i128::from(r.lo()) <= hi_bound);

        if first == last {
            self.runs.insert(first, new);
            self.cells = self.cells.saturating_add(new.len());
            return new.len();
        }

        let mut merged = new;
        let mut absorbed: u64 = 0;
        for run in &self.runs[first..last] {
            merged = merged.merge(run);
            absorbed = absorbed.saturating_add(run.len());
        }
        let added = merged.len().saturating_sub(absorbed);

        self.runs[first] = merged;
        self.runs.drain(first + 1..last);
        self.cells = self.cells.saturating_add(added);
        added
    }

    /// Whether coordinate `v` is covered.
    pub fn contains(&self, v: i64) -> bool {
        let idx = self.runs.partition_point(|r| r.hi() < v);
        self.runs.get(idx).is_some_and(|r| r.contains(v))
    }

    /// Number of covered cells.
    pub fn cells(&self) -> u64 {
        self.cells
    }

    /// Number of stored runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Iterate the runs in increasing order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.runs.iter()
    }

    /// Check the storage invariant: sorted, disjoint, non-adjacent, and
    /// the cached cell count matches the runs.
    pub fn is_normalized(&self) -> bool {
        let separated = self
            .runs
            .windows(2)
            .all(|w| i128::from(w[0].hi()) + 1 < i128::from(w[1].lo()));
        let sum = self
            .runs
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.len()));
        separated && sum == self.cells
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Interval> for IntervalSet {
    fn extend<T: IntoIterator<Item = Interval>>(&mut self, iter: T) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
