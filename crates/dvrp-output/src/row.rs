//! Plain data row types written by output backends.

use dvrp_env::ScenarioState;
use dvrp_runner::ScenarioSummary;

/// One scenario's vehicle and demand state after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecordRow {
    pub scenario:           u32,
    /// `0` for the state right after reset.
    pub step:               u32,
    pub location:           u32,
    pub load:               u32,
    pub elapsed_time:       f64,
    pub reward:             u32,
    pub outstanding_demand: u64,
    /// Events that have not arrived yet.
    pub pending_events:     u64,
    pub finished:           bool,
}

impl StepRecordRow {
    pub fn capture(scenario: u32, step: u32, state: &ScenarioState) -> Self {
        Self {
            scenario,
            step,
            location:           state.location.0,
            load:               state.load,
            elapsed_time:       state.time,
            reward:             state.reward,
            outstanding_demand: state.outstanding_demand(),
            pending_events:     state.pending.len() as u64,
            finished:           state.is_finished(),
        }
    }
}

/// Final counters of one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummaryRow {
    pub scenario:      u32,
    pub steps:         u32,
    pub reward:        u32,
    pub elapsed_time:  f64,
    pub expired:       u32,
    pub forced_events: u32,
    pub finished:      bool,
}

impl From<&ScenarioSummary> for EpisodeSummaryRow {
    fn from(s: &ScenarioSummary) -> Self {
        Self {
            scenario:      s.scenario.0,
            steps:         s.steps,
            reward:        s.reward,
            elapsed_time:  s.elapsed_time,
            expired:       s.expired,
            forced_events: s.forced_events,
            finished:      s.finished,
        }
    }
}
