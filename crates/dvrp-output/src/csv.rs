//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_records.csv`
//! - `episode_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EpisodeSummaryRow, OutputResult, StepRecordRow};
use crate::writer::OutputWriter;

pub const STEP_RECORDS_FILE: &str = "step_records.csv";
pub const EPISODE_SUMMARIES_FILE: &str = "episode_summaries.csv";

/// Writes episode output to two CSV files.
///
/// Booleans are written as `0`/`1`; floats in shortest round-trip form.
pub struct CsvWriter {
    steps:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut steps = Writer::from_path(dir.join(STEP_RECORDS_FILE))?;
        steps.write_record([
            "scenario",
            "step",
            "location",
            "load",
            "elapsed_time",
            "reward",
            "outstanding_demand",
            "pending_events",
            "finished",
        ])?;

        let mut summaries = Writer::from_path(dir.join(EPISODE_SUMMARIES_FILE))?;
        summaries.write_record([
            "scenario",
            "steps",
            "reward",
            "elapsed_time",
            "expired",
            "forced_events",
            "finished",
        ])?;

        Ok(Self { steps, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_steps(&mut self, rows: &[StepRecordRow]) -> OutputResult<()> {
        for row in rows {
            self.steps.write_record(&[
                row.scenario.to_string(),
                row.step.to_string(),
                row.location.to_string(),
                row.load.to_string(),
                row.elapsed_time.to_string(),
                row.reward.to_string(),
                row.outstanding_demand.to_string(),
                row.pending_events.to_string(),
                (row.finished as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summaries(&mut self, rows: &[EpisodeSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summaries.write_record(&[
                row.scenario.to_string(),
                row.steps.to_string(),
                row.reward.to_string(),
                row.elapsed_time.to_string(),
                row.expired.to_string(),
                row.forced_events.to_string(),
                (row.finished as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
