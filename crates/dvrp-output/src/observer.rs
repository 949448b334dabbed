//! `EpisodeOutputObserver<W>` — bridges `EpisodeObserver` to an `OutputWriter`.

use dvrp_env::ScenarioState;
use dvrp_runner::{EpisodeObserver, EpisodeSummary};

use crate::row::{EpisodeSummaryRow, StepRecordRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`EpisodeObserver`] that writes step records and episode summaries to
/// any [`OutputWriter`] backend.
///
/// A scenario produces a step row for the reset and for every step it
/// actually takes; once finished it stops producing rows.  With
/// [`interval`][Self::interval] > 1 only every n-th step is recorded.
///
/// Errors from the writer are stored internally because `EpisodeObserver`
/// methods have no return value.  After `episode.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct EpisodeOutputObserver<W: OutputWriter> {
    writer:     W,
    interval:   u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EpisodeOutputObserver<W> {
    /// Create an observer that records every step.
    pub fn new(writer: W) -> Self {
        Self { writer, interval: 1, last_error: None }
    }

    /// Record only steps that are a multiple of `n` (`0` is treated as `1`).
    pub fn interval(mut self, n: u32) -> Self {
        self.interval = n.max(1);
        self
    }

    /// Take the stored write error (if any) after `episode.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the episode).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_states(&mut self, step: u32, states: &[ScenarioState]) {
        let rows: Vec<StepRecordRow> = states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.steps == step)
            .map(|(i, s)| StepRecordRow::capture(i as u32, step, s))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_steps(&rows);
            self.store_err(result);
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EpisodeObserver for EpisodeOutputObserver<W> {
    fn on_reset(&mut self, states: &[ScenarioState]) {
        self.write_states(0, states);
    }

    fn on_step_end(&mut self, step: u32, states: &[ScenarioState]) {
        if step.is_multiple_of(self.interval) {
            self.write_states(step, states);
        }
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) {
        let rows: Vec<EpisodeSummaryRow> = summary.scenarios.iter().map(Into::into).collect();
        let result = self.writer.write_summaries(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
