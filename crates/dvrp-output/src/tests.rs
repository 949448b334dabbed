//! Integration tests for dvrp-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, EPISODE_SUMMARIES_FILE, STEP_RECORDS_FILE};
    use crate::row::{EpisodeSummaryRow, StepRecordRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn step_row(scenario: u32, step: u32) -> StepRecordRow {
        StepRecordRow {
            scenario,
            step,
            location:           scenario + 1,
            load:               4,
            elapsed_time:       0.1 + step as f64,
            reward:             step,
            outstanding_demand: 7,
            pending_events:     2,
            finished:           false,
        }
    }

    fn summary_row(scenario: u32) -> EpisodeSummaryRow {
        EpisodeSummaryRow {
            scenario,
            steps:         12,
            reward:        5,
            elapsed_time:  3.25,
            expired:       1,
            forced_events: 2,
            finished:      true,
        }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(STEP_RECORDS_FILE).exists());
        assert!(dir.path().join(EPISODE_SUMMARIES_FILE).exists());
    }

    #[test]
    fn missing_dir_is_created() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(STEP_RECORDS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join(STEP_RECORDS_FILE)),
            [
                "scenario",
                "step",
                "location",
                "load",
                "elapsed_time",
                "reward",
                "outstanding_demand",
                "pending_events",
                "finished",
            ]
        );
        assert_eq!(
            headers(&dir.path().join(EPISODE_SUMMARIES_FILE)),
            ["scenario", "steps", "reward", "elapsed_time", "expired", "forced_events", "finished"]
        );
    }

    #[test]
    fn csv_step_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_steps(&[step_row(0, 3), step_row(1, 3)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(STEP_RECORDS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");   // scenario
        assert_eq!(&rows[0][1], "3");   // step
        assert_eq!(&rows[1][2], "2");   // location
        assert_eq!(&rows[0][4], "3.1"); // elapsed_time
        assert_eq!(&rows[0][8], "0");   // finished
    }

    #[test]
    fn csv_summary_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summaries(&[summary_row(4)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EPISODE_SUMMARIES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][3], "3.25");
        assert_eq!(&rows[0][6], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_steps(&[]).unwrap();
        w.write_summaries(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use dvrp_core::EnvConfig;
    use dvrp_policy::NearestEligible;
    use dvrp_runner::{EpisodeBuilder, EpisodeSummary};
    use dvrp_scenario::ScenarioGenerator;

    use crate::{
        EpisodeOutputObserver, EpisodeSummaryRow, OutputError, OutputResult, OutputWriter,
        StepRecordRow,
    };

    /// In-memory writer; optionally fails every write.
    #[derive(Default)]
    struct MemWriter {
        steps:     Vec<StepRecordRow>,
        summaries: Vec<EpisodeSummaryRow>,
        finishes:  usize,
        fail:      bool,
    }

    impl OutputWriter for MemWriter {
        fn write_steps(&mut self, rows: &[StepRecordRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.steps.extend_from_slice(rows);
            Ok(())
        }

        fn write_summaries(&mut self, rows: &[EpisodeSummaryRow]) -> OutputResult<()> {
            self.summaries.extend_from_slice(rows);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    fn config() -> EnvConfig {
        EnvConfig {
            batch_size:           4,
            n_nodes:              7,
            max_load:             5,
            initial_demand_count: 2,
            seed:                 9,
            ..EnvConfig::default()
        }
    }

    fn run_with<W: OutputWriter>(obs: &mut EpisodeOutputObserver<W>) -> EpisodeSummary {
        let config = config();
        let dataset = ScenarioGenerator::new(config.clone()).unwrap().generate(1);
        EpisodeBuilder::new(config, dataset, NearestEligible)
            .build()
            .unwrap()
            .run(obs)
            .unwrap()
    }

    #[test]
    fn one_row_per_step_taken() {
        let mut obs = EpisodeOutputObserver::new(MemWriter::default());
        let summary = run_with(&mut obs);
        assert!(obs.take_error().is_none());
        let writer = obs.into_writer();

        let taken: u32 = summary.scenarios.iter().map(|s| s.steps).sum();
        assert_eq!(writer.steps.len(), 4 + taken as usize);
        assert!(writer.steps[..4].iter().all(|r| r.step == 0 && r.reward == 0));
        assert_eq!(writer.summaries.len(), 4);
        assert_eq!(writer.finishes, 1);

        // The last row of each scenario is its finishing step.
        for s in &summary.scenarios {
            let last = writer.steps.iter().rev().find(|r| r.scenario == s.scenario.0).unwrap();
            assert!(last.finished);
            assert_eq!(last.step, s.steps);
            assert_eq!(last.reward, s.reward);
        }
    }

    #[test]
    fn interval_skips_steps() {
        let mut obs = EpisodeOutputObserver::new(MemWriter::default()).interval(3);
        run_with(&mut obs);
        let writer = obs.into_writer();
        assert!(writer.steps.iter().all(|r| r.step % 3 == 0));
    }

    #[test]
    fn first_error_kept() {
        let writer = MemWriter { fail: true, ..MemWriter::default() };
        let mut obs = EpisodeOutputObserver::new(writer);
        run_with(&mut obs);

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
        // Summaries are still attempted after a failed step write.
        assert_eq!(obs.into_writer().summaries.len(), 4);
    }

    #[test]
    fn integration_csv() {
        use crate::CsvWriter;
        use crate::csv::{EPISODE_SUMMARIES_FILE, STEP_RECORDS_FILE};

        let dir = tempfile::tempdir().unwrap();
        let mut obs = EpisodeOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let summary = run_with(&mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(EPISODE_SUMMARIES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][2], summary.scenarios[0].reward.to_string());

        let mut rdr = csv::Reader::from_path(dir.path().join(STEP_RECORDS_FILE)).unwrap();
        assert!(rdr.records().count() > 4);
    }
}
