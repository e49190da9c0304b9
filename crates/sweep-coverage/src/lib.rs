//! Coverage engines for the Sweep distinct-cell counter.
//!
//! This crate implements the [`CoverageEngine`](sweep_core::CoverageEngine)
//! capability twice:
//!
//! - [`ReferenceEngine`]: stores every visited cell; the correctness oracle
//! - [`RangeEngine`]: stores row and column runs in [`IntervalSet`]s and
//!   reconciles crossings with a sweep line, so cost follows the number of
//!   moves rather than the distance travelled
//!
//! [`Engine`] wraps either one behind a construction-time [`EngineKind`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod interval_set;
pub mod range;
pub mod reference;
mod tree;

#[cfg(test)]
pub(crate) mod compliance;

pub use engine::{Engine, EngineKind};
pub use interval_set::IntervalSet;
pub use range::RangeEngine;
pub use reference::ReferenceEngine;
