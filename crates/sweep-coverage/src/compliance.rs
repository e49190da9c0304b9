//! Coverage engine compliance test helpers.
//!
//! These functions verify that a [`CoverageEngine`] satisfies the trait
//! contract. Reused across all engine test modules (ReferenceEngine,
//! RangeEngine, Engine). Each check builds fresh engines from `make`.

use sweep_core::{CoverageEngine, Interval, Segment};

fn iv(lo: i64, hi: i64) -> Interval {
    Interval::new(lo, hi).expect("test interval must be ordered")
}

fn total_of<E: CoverageEngine>(make: &impl Fn() -> E, segments: &[Segment]) -> u64 {
    let mut engine = make();
    engine
        .ingest_all(segments)
        .expect("ingest should succeed in compliance checks");
    engine.total()
}

/// Assert that a fresh engine reports zero cells.
pub fn assert_empty_is_zero<E: CoverageEngine>(make: &impl Fn() -> E) {
    assert_eq!(make().total(), 0, "fresh engine must report 0 cells");
}

/// Assert that a one-cell segment counts exactly one cell.
pub fn assert_single_cell<E: CoverageEngine>(make: &impl Fn() -> E) {
    let horizontal = total_of(make, &[Segment::horizontal(3, Interval::point(-2))]);
    let vertical = total_of(make, &[Segment::vertical(-2, Interval::point(3))]);
    assert_eq!(horizontal, 1, "one-cell horizontal segment");
    assert_eq!(vertical, 1, "one-cell vertical segment");
    let both = total_of(
        make,
        &[
            Segment::horizontal(3, Interval::point(-2)),
            Segment::vertical(-2, Interval::point(3)),
        ],
    );
    assert_eq!(both, 1, "the same cell from both orientations");
}

/// Assert that `total()` is stable without further ingestion.
pub fn assert_total_idempotent<E: CoverageEngine>(make: &impl Fn() -> E) {
    let mut engine = make();
    engine.ingest(&Segment::horizontal(0, iv(0, 4))).unwrap();
    engine.ingest(&Segment::vertical(2, iv(-3, 3))).unwrap();
    let first = engine.total();
    assert_eq!(engine.total(), first, "second total() differs");
    assert_eq!(engine.total(), first, "third total() differs");
}

/// Assert that re-sweeping covered cells adds nothing (east 5 then west 5).
pub fn assert_revisit_adds_nothing<E: CoverageEngine>(make: &impl Fn() -> E) {
    let total = total_of(
        make,
        &[
            Segment::horizontal(0, iv(0, 5)),
            Segment::horizontal(0, iv(0, 5)),
        ],
    );
    assert_eq!(total, 6, "revisited row counted twice");
}

/// Assert the crossing case: east 4 then north 4 from the origin covers 9.
pub fn assert_crossing_counts_shared_cell_once<E: CoverageEngine>(make: &impl Fn() -> E) {
    let total = total_of(
        make,
        &[
            Segment::horizontal(0, iv(0, 4)),
            Segment::vertical(4, iv(0, 4)),
        ],
    );
    assert_eq!(total, 9, "shared corner counted twice");

    let plus = total_of(
        make,
        &[
            Segment::horizontal(0, iv(-3, 3)),
            Segment::vertical(0, iv(-3, 3)),
        ],
    );
    assert_eq!(plus, 13, "plus sign centre counted twice");
}

/// Assert that one long segment equals the same cells split into touching pieces.
pub fn assert_chunking_invariant<E: CoverageEngine>(make: &impl Fn() -> E) {
    let whole = total_of(make, &[Segment::vertical(1, iv(0, 10))]);
    let split = total_of(
        make,
        &[
            Segment::vertical(1, iv(0, 5)),
            Segment::vertical(1, iv(5, 10)),
        ],
    );
    let adjacent = total_of(
        make,
        &[
            Segment::vertical(1, iv(0, 4)),
            Segment::vertical(1, iv(5, 10)),
        ],
    );
    assert_eq!(whole, 11);
    assert_eq!(split, whole, "overlapping chunks differ from the whole");
    assert_eq!(adjacent, whole, "adjacent chunks differ from the whole");
}

/// Assert that insertion order does not change the total.
pub fn assert_order_independent<E: CoverageEngine>(make: &impl Fn() -> E) {
    let segments = [
        Segment::horizontal(0, iv(0, 6)),
        Segment::vertical(6, iv(-2, 4)),
        Segment::horizontal(4, iv(2, 8)),
        Segment::vertical(3, iv(0, 4)),
        Segment::horizontal(0, iv(-1, 1)),
        Segment::vertical(6, iv(4, 5)),
    ];
    let expected = total_of(make, &segments);

    let reversed: Vec<Segment> = segments.iter().rev().copied().collect();
    assert_eq!(total_of(make, &reversed), expected, "reverse order differs");

    for shift in 1..segments.len() {
        let mut rotated = segments.to_vec();
        rotated.rotate_left(shift);
        assert_eq!(
            total_of(make, &rotated),
            expected,
            "rotation by {shift} differs"
        );
    }
}

/// Run all 7 compliance checks on an engine type.
pub fn run_full_compliance<E: CoverageEngine>(make: impl Fn() -> E) {
    assert_empty_is_zero(&make);
    assert_single_cell(&make);
    assert_total_idempotent(&make);
    assert_revisit_adds_nothing(&make);
    assert_crossing_counts_shared_cell_once(&make);
    assert_chunking_invariant(&make);
    assert_order_independent(&make);
}
