//! `dvrp-output` — episode output writers for the dvrp routing simulator.
//!
//! The CSV backend creates two files in the output directory:
//!
//! | File                     | One row per                                   |
//! |--------------------------|-----------------------------------------------|
//! | `step_records.csv`       | scenario and step it took (step 0 = reset)    |
//! | `episode_summaries.csv`  | scenario, after the episode ends              |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`EpisodeOutputObserver`], which implements
//! `dvrp_runner::EpisodeObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dvrp_output::{CsvWriter, EpisodeOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = EpisodeOutputObserver::new(writer);
//! episode.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EpisodeOutputObserver;
pub use row::{EpisodeSummaryRow, StepRecordRow};
pub use writer::OutputWriter;
