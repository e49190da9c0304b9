//! Per-run metrics and the run report.
//!
//! [`RunMetrics`] captures the size and wall-clock cost of one simulation
//! run; [`RunReport`] pairs it with the result. Together they carry what a
//! caller needs to record an execution (move count, result, duration).

use sweep_coverage::EngineKind;

/// Size and timing data collected during a single run.
///
/// Durations are in microseconds. The simulator fills these after
/// [`run_with_report()`](crate::MoveSimulator::run_with_report).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Number of moves in the input sequence.
    pub moves: usize,
    /// Number of segments handed to the engine, including the start cell.
    pub segments: usize,
    /// Cells swept counting repetition: the sum of all segment lengths.
    pub path_cells: u64,
    /// Wall-clock time for the whole run, in microseconds.
    pub duration_us: u64,
}

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Number of distinct cells cleaned.
    pub distinct_cells: u64,
    /// The engine that produced the count.
    pub engine: EngineKind,
    /// Size and timing of the run.
    pub metrics: RunMetrics,
}

impl RunReport {
    /// Cells swept more than once, counted once per extra visit.
    ///
    /// Segments that chain end to start share a cell, so a straight walk
    /// split into `k` moves reports `k` revisits.
    pub fn revisits(&self) -> u64 {
        self.metrics.path_cells.saturating_sub(self.distinct_cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.moves, 0);
        assert_eq!(m.segments, 0);
        assert_eq!(m.path_cells, 0);
        assert_eq!(m.duration_us, 0);
    }

    #[test]
    fn revisits_is_path_minus_distinct() {
        let report = RunReport {
            distinct_cells: 6,
            engine: EngineKind::Range,
            metrics: RunMetrics {
                moves: 2,
                segments: 3,
                path_cells: 13,
                duration_us: 5,
            },
        };
        assert_eq!(report.revisits(), 7);
    }
}
