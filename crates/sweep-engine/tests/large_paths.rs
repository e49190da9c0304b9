//! Integration test: long paths stay exact and cheap on the range engine.
//!
//! Path lengths here are far beyond what the reference engine could
//! materialise; the expected counts are derived by hand.

use sweep_core::{CoverageError, Move, Position};
use sweep_coverage::EngineKind;
use sweep_engine::{EngineChoice, MoveSimulator, SimConfig, SimError};

const BILLION: u64 = 1_000_000_000;

fn range_sim() -> MoveSimulator {
    MoveSimulator::new(SimConfig::with_engine(EngineChoice::Range)).unwrap()
}

#[test]
fn single_billion_step_move() {
    let n = range_sim().run(Position::ORIGIN, &[Move::east(BILLION)]).unwrap();
    assert_eq!(n, BILLION + 1);
}

#[test]
fn billion_square_loop() {
    let moves = [
        Move::north(BILLION),
        Move::east(BILLION),
        Move::south(BILLION),
        Move::west(BILLION),
    ];
    let n = range_sim().run(Position::new(-5, -5), &moves).unwrap();
    assert_eq!(n, 4 * BILLION);
}

#[test]
fn comb_of_long_teeth_crossing_a_spine() {
    // Spine along row 0, then ten teeth that cross it going north-south.
    let mut moves = vec![Move::east(9 * BILLION / 10)];
    moves.push(Move::west(9 * BILLION / 10));
    for _ in 0..10 {
        moves.push(Move::north(BILLION));
        moves.push(Move::south(2 * BILLION));
        moves.push(Move::north(BILLION));
        moves.push(Move::east(BILLION / 10));
    }
    let n = range_sim().run(Position::ORIGIN, &moves).unwrap();
    // Spine covers x in [0, 10^9]; teeth at x = 0, 10^8, ..., 9*10^8 each
    // cover 2*10^9 + 1 cells, one of which lies on the spine.
    assert_eq!(n, (BILLION + 1) + 10 * (2 * BILLION));
}

#[test]
fn auto_chooses_range_and_reports_it() {
    let report = MoveSimulator::default()
        .run_with_report(Position::ORIGIN, &[Move::south(BILLION), Move::north(BILLION)])
        .unwrap();
    assert_eq!(report.engine, EngineKind::Range);
    assert_eq!(report.distinct_cells, BILLION + 1);
    assert_eq!(report.metrics.path_cells, 1 + 2 * (BILLION + 1));
}

#[test]
fn explicit_reference_is_refused_before_materialising() {
    let sim = MoveSimulator::new(SimConfig::with_engine(EngineChoice::Reference)).unwrap();
    let err = sim.run(Position::ORIGIN, &[Move::east(BILLION)]).unwrap_err();
    assert!(matches!(
        err,
        SimError::Coverage(CoverageError::ResourceExhausted { limit: 10_000_000, .. })
    ));
}

#[test]
fn leaving_the_grid_is_an_error() {
    let err = range_sim()
        .run(Position::new(0, i64::MAX - 10), &[Move::north(11)])
        .unwrap_err();
    assert!(matches!(
        err,
        SimError::Coverage(CoverageError::CoordinateOverflow { steps: 11, .. })
    ));
}
