//! Integration tests for dvrp-runner.

use dvrp_core::{EnvConfig, NodeId, Point, ScenarioId, ScenarioRng};
use dvrp_env::{ScenarioObservation, ScenarioState};
use dvrp_policy::{DepotOnly, NearestEligible, RandomEligible, RoutingPolicy};
use dvrp_scenario::{Dataset, DemandEvent, ScenarioData, ScenarioGenerator};

use crate::{EpisodeBuilder, EpisodeObserver, EpisodeSummary, NoopObserver, RunnerError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> EnvConfig {
    EnvConfig {
        batch_size:           6,
        n_nodes:              9,
        max_load:             6,
        initial_demand_count: 3,
        seed:                 5,
        ..EnvConfig::default()
    }
}

fn generated(config: &EnvConfig) -> Dataset {
    ScenarioGenerator::new(config.clone()).unwrap().generate(11)
}

/// Node 0 has demand 3 at t=0, node 1 gets demand 2 at t=2, node 2 is the
/// depot at (0.5, 0.5).
fn three_node() -> (EnvConfig, Dataset) {
    let config = EnvConfig {
        batch_size:           1,
        n_nodes:              3,
        max_load:             5,
        initial_demand_count: 1,
        ..EnvConfig::default()
    };
    let data = ScenarioData {
        points: vec![Point::new(0.5, 0.1), Point::new(0.8, 0.5), Point::new(0.5, 0.5)],
        events: vec![
            DemandEvent::initial(3),
            DemandEvent { arrival_time: 2.0, inter_arrival_time: 2.0, demand: 2 },
            DemandEvent::NONE,
        ],
    };
    (config, Dataset::new(3, vec![data]).unwrap())
}

/// Parks on node 1 forever, so the scenario can never finish.
struct Stubborn;

impl RoutingPolicy for Stubborn {
    fn choose(&self, _s: ScenarioId, _obs: &ScenarioObservation, _rng: &mut ScenarioRng) -> NodeId {
        NodeId(1)
    }
}

#[derive(Default)]
struct Recorder {
    resets:    usize,
    steps:     Vec<u32>,
    finished:  Vec<usize>,
    summary:   Option<EpisodeSummary>,
}

impl EpisodeObserver for Recorder {
    fn on_reset(&mut self, _states: &[ScenarioState]) {
        self.resets += 1;
    }

    fn on_step_end(&mut self, step: u32, states: &[ScenarioState]) {
        self.steps.push(step);
        self.finished.push(states.iter().filter(|s| s.is_finished()).count());
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) {
        self.summary = Some(summary.clone());
    }
}

// ── EpisodeBuilder validation ─────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let config = test_config();
        let episode = EpisodeBuilder::new(config.clone(), generated(&config), NearestEligible)
            .build()
            .unwrap();
        assert_eq!(episode.max_steps(), 2 * 9 * 6);
        assert_eq!(episode.env().config(), &config);
    }

    #[test]
    fn invalid_config_errors() {
        let config = test_config();
        let dataset = generated(&config);
        let bad = EnvConfig { expiry_steps: 0, ..config };
        let result = EpisodeBuilder::new(bad, dataset, NearestEligible).build();
        assert!(matches!(result, Err(RunnerError::Config(_))));
    }

    #[test]
    fn batch_size_mismatch_errors() {
        let config = test_config();
        let dataset = generated(&config);
        let wider = EnvConfig { batch_size: 7, ..config };
        let result = EpisodeBuilder::new(wider, dataset, NearestEligible).build();
        assert!(matches!(result, Err(RunnerError::Dataset(_))));
    }

    #[test]
    fn node_count_mismatch_errors() {
        let config = test_config();
        let dataset = generated(&config);
        let larger = EnvConfig { n_nodes: 10, ..config };
        let result = EpisodeBuilder::new(larger, dataset, NearestEligible).build();
        assert!(matches!(result, Err(RunnerError::Dataset(_))));
    }
}

// ── Episode::run ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn nearest_finishes_every_scenario() {
        let config = test_config();
        let mut episode = EpisodeBuilder::new(config.clone(), generated(&config), NearestEligible)
            .build()
            .unwrap();
        let summary = episode.run(&mut NoopObserver).unwrap();

        assert!(summary.all_finished);
        assert_eq!(summary.unfinished(), 0);
        assert_eq!(summary.scenarios.len(), 6);
        assert!(summary.total_reward() > 0);
        for s in &summary.scenarios {
            // Every customer carries exactly one demand: served or expired.
            assert_eq!(s.reward + s.expired, 8);
            assert!(s.steps <= summary.steps);
        }
    }

    #[test]
    fn three_node_episode() {
        let (config, dataset) = three_node();
        let mut episode = EpisodeBuilder::new(config, dataset, NearestEligible).build().unwrap();
        let summary = episode.run(&mut NoopObserver).unwrap();

        // node 0, depot (wait for t=2), node 1, depot.
        assert!(summary.all_finished);
        assert_eq!(summary.steps, 4);
        let s = &summary.scenarios[0];
        assert_eq!(s.reward, 2);
        assert_eq!(s.expired, 0);
        assert_eq!(s.forced_events, 1);
        assert!((s.elapsed_time - 2.6).abs() < 1e-12);
    }

    #[test]
    fn depot_only_serves_nothing() {
        let config = test_config();
        let mut episode = EpisodeBuilder::new(config.clone(), generated(&config), DepotOnly)
            .build()
            .unwrap();
        let summary = episode.run(&mut NoopObserver).unwrap();

        assert!(summary.all_finished);
        assert_eq!(summary.total_reward(), 0);
        assert_eq!(summary.total_expired(), 6 * 8);
    }

    #[test]
    fn step_limit_stops_episode() {
        let (config, dataset) = three_node();
        let mut episode = EpisodeBuilder::new(config, dataset, Stubborn)
            .max_steps(20)
            .build()
            .unwrap();
        let summary = episode.run(&mut NoopObserver).unwrap();

        assert_eq!(summary.steps, 20);
        assert!(!summary.all_finished);
        assert_eq!(summary.unfinished(), 1);
        assert_eq!(summary.scenarios[0].expired, 1);
    }

    #[test]
    fn repeated_runs_match_for_deterministic_policy() {
        let config = test_config();
        let mut episode = EpisodeBuilder::new(config.clone(), generated(&config), NearestEligible)
            .build()
            .unwrap();
        let first = episode.run(&mut NoopObserver).unwrap();
        let second = episode.run(&mut NoopObserver).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_policy_deterministic_per_seed() {
        let config = test_config();
        let run = |seed| {
            EpisodeBuilder::new(config.clone(), generated(&config), RandomEligible)
                .policy_seed(seed)
                .build()
                .unwrap()
                .run(&mut NoopObserver)
                .unwrap()
        };
        assert_eq!(run(3), run(3));
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn hooks_called_in_order() {
        let config = test_config();
        let mut episode = EpisodeBuilder::new(config.clone(), generated(&config), NearestEligible)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let summary = episode.run(&mut rec).unwrap();

        assert_eq!(rec.resets, 1);
        let expected: Vec<u32> = (1..=summary.steps).collect();
        assert_eq!(rec.steps, expected);
        assert_eq!(rec.summary.as_ref(), Some(&summary));
    }

    #[test]
    fn finished_count_never_decreases() {
        let config = test_config();
        let mut episode = EpisodeBuilder::new(config.clone(), generated(&config), RandomEligible)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        episode.run(&mut rec).unwrap();

        assert!(rec.finished.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(rec.finished.last().copied(), Some(6));
    }
}
