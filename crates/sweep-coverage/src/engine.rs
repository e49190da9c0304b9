//! Construction-time choice between the two engines.

use crate::range::RangeEngine;
use crate::reference::ReferenceEngine;
use std::fmt;
use sweep_core::{CoverageEngine, CoverageError, Segment};

/// Which engine implementation backs a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// [`ReferenceEngine`]: one set entry per cell.
    Reference,
    /// [`RangeEngine`]: interval runs plus sweep-line reconciliation.
    Range,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            Self::Range => f.write_str("range"),
        }
    }
}

/// One of the two engines, picked once when a run starts.
///
/// Dispatch is a `match` on the variant; callers that know their engine
/// statically can use [`ReferenceEngine`] or [`RangeEngine`] directly.
#[derive(Clone, Debug)]
pub enum Engine {
    /// Cell-by-cell oracle.
    Reference(ReferenceEngine),
    /// Interval-based engine.
    Range(RangeEngine),
}

impl Engine {
    /// A fresh engine of the given kind, without a cell limit.
    pub fn new(kind: EngineKind) -> Self {
        match kind {
            EngineKind::Reference => Self::Reference(ReferenceEngine::new()),
            EngineKind::Range => Self::Range(RangeEngine::new()),
        }
    }

    /// Which implementation is active.
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::Reference(_) => EngineKind::Reference,
            Self::Range(_) => EngineKind::Range,
        }
    }
}

impl From<ReferenceEngine> for Engine {
    fn from(e: ReferenceEngine) -> Self {
        Self::Reference(e)
    }
}

impl From<RangeEngine> for Engine {
    fn from(e: RangeEngine) -> Self {
        Self::Range(e)
    }
}

impl CoverageEngine for Engine {
    fn ingest(&mut self, segment: &Segment) -> Result<(), CoverageError> {
        match self {
            Self::Reference(e) => e.ingest(segment),
            Self::Range(e) => e.ingest(segment),
        }
    }

    fn total(&self) -> u64 {
        match self {
            Self::Reference(e) => e.total(),
            Self::Range(e) => e.total(),
        }
    }
}
