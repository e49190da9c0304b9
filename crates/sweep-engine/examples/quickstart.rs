//! Sweep Quickstart: count the cells a cleaning robot covers.
//!
//! Demonstrates:
//!   1. Parsing direction names into moves
//!   2. Running the simulator with the default (auto) engine
//!   3. Forcing each engine and comparing results
//!   4. Reading the run report
//!
//! Run with:
//!   cargo run --example quickstart

use sweep_core::{Direction, Move, Position};
use sweep_engine::{EngineChoice, MoveSimulator, SimConfig, SimError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ─── 1. Moves ───────────────────────────────────────────────
    let commands = [("north", 3), ("east", 4), ("south", 6), ("west", 4), ("north", 3)];
    let moves = commands
        .iter()
        .enumerate()
        .map(|(i, &(name, steps))| {
            name.parse::<Direction>()
                .map(|d| Move::new(d, steps))
                .map_err(|e| e.at_move(i))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let start = Position::new(10, 22);

    // ─── 2. Default run ─────────────────────────────────────────
    let sim = MoveSimulator::default();
    let report = sim.run_with_report(start, &moves)?;
    println!(
        "{} moves from {start}: {} distinct cells ({} engine, {} revisits, {}us)",
        report.metrics.moves,
        report.distinct_cells,
        report.engine,
        report.revisits(),
        report.metrics.duration_us,
    );

    // ─── 3. Both engines agree ──────────────────────────────────
    for choice in [EngineChoice::Reference, EngineChoice::Range] {
        let sim = MoveSimulator::new(SimConfig::with_engine(choice))?;
        println!("{choice:?}: {}", sim.run(start, &moves)?);
    }

    // ─── 4. Long paths ──────────────────────────────────────────
    let long = [Move::east(2_000_000_000), Move::north(5), Move::west(2_000_000_000)];
    let count = sim.run(start, &long)?;
    println!("long path: {count} distinct cells");

    let strict = MoveSimulator::new(SimConfig::with_engine(EngineChoice::Reference))?;
    match strict.run(start, &long) {
        Err(SimError::Coverage(e)) => println!("reference engine refused: {e}"),
        other => println!("unexpected: {other:?}"),
    }
    Ok(())
}
