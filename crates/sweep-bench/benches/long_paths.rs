//! Criterion benchmarks for paths only the range engine can handle.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use sweep_bench::{crosshatch, long_walk_profile};
use sweep_core::{CoverageEngine, Position, Segment};
use sweep_coverage::RangeEngine;
use sweep_engine::{EngineChoice, MoveSimulator, SimConfig};

/// Benchmark: 1K random moves of up to 10^8 steps each.
fn bench_long_walk(c: &mut Criterion) {
    let moves = long_walk_profile(42);
    let sim = MoveSimulator::new(SimConfig::with_engine(EngineChoice::Range)).unwrap();

    c.bench_function("long_walk_1k", |b| {
        b.iter(|| black_box(sim.run(Position::ORIGIN, &moves).unwrap()));
    });
}

/// Benchmark: 500 rows crossed by 500 columns over a 10^9 box.
fn bench_crosshatch_billion(c: &mut Criterion) {
    let moves = crosshatch(500, 1_000_000_000);
    let sim = MoveSimulator::new(SimConfig::with_engine(EngineChoice::Range)).unwrap();

    c.bench_function("crosshatch_500_billion", |b| {
        b.iter(|| black_box(sim.run(Position::ORIGIN, &moves).unwrap()));
    });
}

/// Benchmark: ingest only, no reconciliation, for the long walk.
fn bench_ingest_only(c: &mut Criterion) {
    let moves = long_walk_profile(7);
    let mut position = Position::ORIGIN;
    let segments: Vec<Segment> = moves
        .iter()
        .map(|mv| {
            let (segment, end) = Segment::swept(position, *mv).unwrap();
            position = end;
            segment
        })
        .collect();

    c.bench_function("range_ingest_1k", |b| {
        b.iter(|| {
            let mut engine = RangeEngine::new();
            engine.ingest_all(&segments).unwrap();
            black_box(engine.interval_count())
        });
    });
}

criterion_group!(
    benches,
    bench_long_walk,
    bench_crosshatch_billion,
    bench_ingest_only
);
criterion_main!(benches);
