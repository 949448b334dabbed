//! Per-episode results.

use dvrp_core::ScenarioId;
use dvrp_env::ScenarioState;

/// Final counters of one scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioSummary {
    pub scenario:      ScenarioId,
    /// Demands served.
    pub reward:        u32,
    pub elapsed_time:  f64,
    pub expired:       u32,
    pub forced_events: u32,
    pub steps:         u32,
    pub finished:      bool,
}

impl ScenarioSummary {
    fn capture(scenario: ScenarioId, state: &ScenarioState) -> Self {
        Self {
            scenario,
            reward:        state.reward,
            elapsed_time:  state.time,
            expired:       state.expired,
            forced_events: state.forced_events,
            steps:         state.steps,
            finished:      state.is_finished(),
        }
    }
}

/// Outcome of [`Episode::run`][crate::Episode::run].
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    /// Lock-step calls made.
    pub steps:        u32,
    /// `false` when the step limit stopped the episode early.
    pub all_finished: bool,
    pub scenarios:    Vec<ScenarioSummary>,
}

impl EpisodeSummary {
    pub(crate) fn capture(steps: u32, states: &[ScenarioState]) -> Self {
        let scenarios: Vec<ScenarioSummary> = states
            .iter()
            .enumerate()
            .map(|(i, s)| ScenarioSummary::capture(ScenarioId(i as u32), s))
            .collect();
        let all_finished = scenarios.iter().all(|s| s.finished);
        Self { steps, all_finished, scenarios }
    }

    pub fn total_reward(&self) -> u64 {
        self.scenarios.iter().map(|s| s.reward as u64).sum()
    }

    pub fn total_expired(&self) -> u64 {
        self.scenarios.iter().map(|s| s.expired as u64).sum()
    }

    /// Mean served demands per scenario; `0.0` for an empty batch.
    pub fn mean_reward(&self) -> f64 {
        self.mean(|s| s.reward as f64)
    }

    pub fn mean_elapsed_time(&self) -> f64 {
        self.mean(|s| s.elapsed_time)
    }

    pub fn unfinished(&self) -> usize {
        self.scenarios.iter().filter(|s| !s.finished).count()
    }

    fn mean(&self, f: impl Fn(&ScenarioSummary) -> f64) -> f64 {
        if self.scenarios.is_empty() {
            return 0.0;
        }
        self.scenarios.iter().map(f).sum::<f64>() / self.scenarios.len() as f64
    }
}
