//! Sweep: count the distinct grid cells a cleaning robot visits.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Sweep sub-crates. For most users, adding `sweep` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sweep::prelude::*;
//!
//! // North one, west one, then south twice: five distinct cells.
//! let moves = vec![Move::north(1), Move::west(1), Move::south(1), Move::south(1)];
//! let sim = MoveSimulator::new(SimConfig::default()).unwrap();
//! assert_eq!(sim.run(Position::ORIGIN, &moves).unwrap(), 5);
//!
//! // Paths of billions of cells go through the range engine.
//! let long = vec![Move::east(1_000_000_000), Move::north(1_000_000_000)];
//! let report = sim.run_with_report(Position::ORIGIN, &long).unwrap();
//! assert_eq!(report.distinct_cells, 2_000_000_001);
//! assert_eq!(report.engine, EngineKind::Range);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sweep-core` | Positions, moves, segments, errors, the engine trait |
//! | [`coverage`] | `sweep-coverage` | Reference and range engines, interval sets |
//! | [`engine`] | `sweep-engine` | Move simulator, configuration, run reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core grid types and the engine trait (`sweep-core`).
///
/// Contains [`types::Position`], [`types::Move`], [`types::Segment`], the
/// [`types::CoverageError`] taxonomy, and the [`types::CoverageEngine`] trait.
pub use sweep_core as types;

/// Coverage engines (`sweep-coverage`).
///
/// [`coverage::ReferenceEngine`] stores every cell, [`coverage::RangeEngine`]
/// stores merged row and column intervals.
pub use sweep_coverage as coverage;

/// The move simulator (`sweep-engine`).
///
/// [`engine::MoveSimulator`] walks a move list from a start position and
/// feeds the swept segments to the configured engine.
pub use sweep_engine as engine;

/// Common imports for typical Sweep usage.
///
/// ```rust
/// use sweep::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sweep_core::{CoverageEngine, CoverageError, Direction, Move, Position, Segment};

    // Engines
    pub use sweep_coverage::{Engine, EngineKind, RangeEngine, ReferenceEngine};

    // Simulator
    pub use sweep_engine::{
        count_distinct, EngineChoice, MoveSimulator, RunReport, SimConfig, SimError,
        ZeroStepPolicy,
    };
}
