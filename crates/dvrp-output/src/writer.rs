//! The `OutputWriter` trait implemented by backend writers.

use crate::{EpisodeSummaryRow, OutputResult, StepRecordRow};

/// Sink for episode output.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`EpisodeOutputObserver::take_error`][crate::EpisodeOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of per-step scenario records.
    fn write_steps(&mut self, rows: &[StepRecordRow]) -> OutputResult<()>;

    /// Write the end-of-episode rows, one per scenario.
    fn write_summaries(&mut self, rows: &[EpisodeSummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
