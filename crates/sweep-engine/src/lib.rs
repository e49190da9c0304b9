//! Move simulation for the Sweep distinct-cell counter.
//!
//! Provides [`MoveSimulator`], which turns a start position and an ordered
//! move list into segments, feeds them to the configured engine, and
//! returns the number of distinct cells cleaned. Engine choice, zero-step
//! handling and the reference engine's cell limit live in [`SimConfig`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod simulator;

pub use config::{ConfigError, EngineChoice, SimConfig, SimError, ZeroStepPolicy};
pub use metrics::{RunMetrics, RunReport};
pub use simulator::{count_distinct, MoveSimulator, Walk};
