//! Simulator configuration, validation, and error types.
//!
//! [`SimConfig`] is the builder-input for a [`MoveSimulator`](crate::MoveSimulator).
//! [`validate()`](SimConfig::validate) checks structural invariants before
//! any move is executed.

use std::error::Error;
use std::fmt;

use sweep_core::CoverageError;
use sweep_coverage::EngineKind;

// ── EngineChoice ───────────────────────────────────────────────────

/// Which engine a run should use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EngineChoice {
    /// Reference engine when the whole path fits under
    /// [`SimConfig::auto_reference_threshold`], range engine otherwise.
    #[default]
    Auto,
    /// Always the reference engine. Runs whose path is longer than the
    /// cell limit fail with [`CoverageError::ResourceExhausted`].
    Reference,
    /// Always the range engine.
    Range,
}

impl From<EngineKind> for EngineChoice {
    fn from(kind: EngineKind) -> Self {
        match kind {
            EngineKind::Reference => Self::Reference,
            EngineKind::Range => Self::Range,
        }
    }
}

// ── ZeroStepPolicy ─────────────────────────────────────────────────

/// How a move with a step count of zero is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZeroStepPolicy {
    /// The robot stays put and cleans the cell it is standing on.
    #[default]
    NoOp,
    /// The move is rejected with [`CoverageError::InvalidMove`].
    Reject,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `reference_cell_limit` is zero, which would refuse even the start cell.
    ZeroReferenceLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroReferenceLimit => write!(f, "reference_cell_limit must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── SimError ───────────────────────────────────────────────────────

/// Errors returned by a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A move or engine guard failed.
    Coverage(CoverageError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Coverage(e) => write!(f, "coverage: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Coverage(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<CoverageError> for SimError {
    fn from(e: CoverageError) -> Self {
        Self::Coverage(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Configuration for a [`MoveSimulator`](crate::MoveSimulator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Engine selection. Default: [`EngineChoice::Auto`].
    pub engine: EngineChoice,
    /// Zero-step handling. Default: [`ZeroStepPolicy::NoOp`].
    pub zero_steps: ZeroStepPolicy,
    /// Longest path (in cells, counting repetition) that
    /// [`EngineChoice::Auto`] hands to the reference engine. Capped by
    /// `reference_cell_limit`. Default: 10_000.
    pub auto_reference_threshold: u64,
    /// Most cells the reference engine may materialise in one run.
    /// Default: 10_000_000. Minimum: 1.
    pub reference_cell_limit: u64,
}

impl SimConfig {
    /// Default path length up to which Auto picks the reference engine.
    pub const DEFAULT_AUTO_REFERENCE_THRESHOLD: u64 = 10_000;

    /// Default reference engine cell limit.
    pub const DEFAULT_REFERENCE_CELL_LIMIT: u64 = 10_000_000;

    /// Default configuration with a fixed engine.
    pub fn with_engine(engine: impl Into<EngineChoice>) -> Self {
        Self {
            engine: engine.into(),
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_cell_limit == 0 {
            return Err(ConfigError::ZeroReferenceLimit);
        }
        Ok(())
    }

    /// Pick the concrete engine for a run sweeping `path_cells` cells
    /// (counted with repetition).
    pub fn resolve_engine(&self, path_cells: u64) -> EngineKind {
        match self.engine {
            EngineChoice::Reference => EngineKind::Reference,
            EngineChoice::Range => EngineKind::Range,
            EngineChoice::Auto
                if path_cells <= self.auto_reference_threshold.min(self.reference_cell_limit) =>
            {
                EngineKind::Reference
            }
            EngineChoice::Auto => EngineKind::Range,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            engine: EngineChoice::Auto,
            zero_steps: ZeroStepPolicy::NoOp,
            auto_reference_threshold: Self::DEFAULT_AUTO_REFERENCE_THRESHOLD,
            reference_cell_limit: Self::DEFAULT_REFERENCE_CELL_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = SimConfig::default();
        assert_eq!(config.engine, EngineChoice::Auto);
        assert_eq!(config.zero_steps, ZeroStepPolicy::NoOp);
        assert_eq!(config.auto_reference_threshold, 10_000);
        assert_eq!(config.reference_cell_limit, 10_000_000);
        config.validate().unwrap();
    }

    #[test]
    fn zero_limit_is_rejected() {
        let config = SimConfig {
            reference_cell_limit: 0,
            ..SimConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroReferenceLimit));
    }

    #[test]
    fn auto_switches_at_the_threshold() {
        let config = SimConfig {
            auto_reference_threshold: 100,
            ..SimConfig::default()
        };
        assert_eq!(config.resolve_engine(1), EngineKind::Reference);
        assert_eq!(config.resolve_engine(100), EngineKind::Reference);
        assert_eq!(config.resolve_engine(101), EngineKind::Range);
    }

    #[test]
    fn auto_threshold_is_capped_by_the_cell_limit() {
        let config = SimConfig {
            auto_reference_threshold: 1_000,
            reference_cell_limit: 100,
            ..SimConfig::default()
        };
        assert_eq!(config.resolve_engine(100), EngineKind::Reference);
        assert_eq!(config.resolve_engine(101), EngineKind::Range);
    }

    #[test]
    fn default_sends_large_paths_to_range() {
        let config = SimConfig::default();
        assert_eq!(config.resolve_engine(10_000), EngineKind::Reference);
        assert_eq!(config.resolve_engine(10_001), EngineKind::Range);
        assert_eq!(config.resolve_engine(1_000_000), EngineKind::Range);
    }

    #[test]
    fn fixed_choices_ignore_path_length() {
        let reference = SimConfig::with_engine(EngineKind::Reference);
        let range = SimConfig::with_engine(EngineChoice::Range);
        assert_eq!(reference.resolve_engine(u64::MAX), EngineKind::Reference);
        assert_eq!(range.resolve_engine(1), EngineKind::Range);
    }

    #[test]
    fn sim_error_chains_source() {
        let e: SimError = ConfigError::ZeroReferenceLimit.into();
        assert!(e.source().is_some());
        assert_eq!(
            e.to_string(),
            "config: reference_cell_limit must be at least 1"
        );
    }
}
