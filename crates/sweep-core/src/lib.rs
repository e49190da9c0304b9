//! Core types and traits for the Sweep coverage counter.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid primitives every other crate speaks: positions, directions,
//! moves, intervals, segments, the [`CoverageEngine`] capability, and
//! the [`CoverageError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod segment;
pub mod traits;

pub use error::CoverageError;
pub use geometry::{Direction, Move, Position};
pub use segment::{Axis, Interval, Segment};
pub use traits::CoverageEngine;
