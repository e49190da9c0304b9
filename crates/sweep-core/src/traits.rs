//! The capability shared by every coverage engine.

use crate::error::CoverageError;
use crate::segment::Segment;

/// Consumes swept segments and reports how many distinct cells they cover.
///
/// Implementations own all coverage state for one run. Ingesting the same
/// cells twice never changes the total, and the total never depends on
/// the order segments arrive in.
pub trait CoverageEngine {
    /// Record the cells of `segment` as covered.
    ///
    /// Fails only when the engine enforces a resource guard.
    fn ingest(&mut self, segment: &Segment) -> Result<(), CoverageError>;

    /// Number of distinct cells covered by every segment ingested so far.
    ///
    /// Calling this repeatedly without further ingestion returns the same
    /// value.
    fn total(&self) -> u64;

    /// Ingest a batch of segments in order, stopping at the first failure.
    fn ingest_all<'a, I>(&mut self, segments: I) -> Result<(), CoverageError>
    where
        I: IntoIterator<Item = &'a Segment>,
        Self: Sized,
    {
        for segment in segments {
            self.ingest(segment)?;
        }
        Ok(())
    }
}
