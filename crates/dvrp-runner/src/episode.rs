//! The `Episode` struct and its loop.

use tracing::{debug, info, warn};

use dvrp_core::{NodeId, ScenarioRng};
use dvrp_env::{Env, Observation};
use dvrp_policy::RoutingPolicy;
use dvrp_scenario::Dataset;

use crate::{EpisodeObserver, EpisodeSummary, RunnerResult};

/// One batch, one policy, one environment.
///
/// `run` may be called more than once; every call resets the environment to
/// the same dataset while the policy RNGs keep advancing.
///
/// Create via [`EpisodeBuilder`][crate::EpisodeBuilder].
pub struct Episode<P: RoutingPolicy> {
    pub(crate) env:       Env,
    pub(crate) dataset:   Dataset,
    pub(crate) policy:    P,
    /// One RNG per scenario, indexed by `ScenarioId`.
    pub(crate) rngs:      Vec<ScenarioRng>,
    pub(crate) max_steps: u32,
}

impl<P: RoutingPolicy> Episode<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Reset and step until every scenario finishes or `max_steps` is hit.
    ///
    /// Calls observer hooks after the reset and after every step.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: EpisodeObserver>(&mut self, observer: &mut O) -> RunnerResult<EpisodeSummary> {
        let mut obs = self.env.reset(&self.dataset)?;
        observer.on_reset(self.env.scenarios()?);

        let mut step = 0;
        while !obs.all_finished() && step < self.max_steps {
            let choices = self.decide(&obs);
            obs = self.env.step(&choices)?;
            step += 1;
            observer.on_step_end(step, self.env.scenarios()?);
        }

        let summary = EpisodeSummary::capture(step, self.env.scenarios()?);
        if summary.all_finished {
            info!(
                steps = summary.steps,
                mean_reward = summary.mean_reward(),
                mean_time = summary.mean_elapsed_time(),
                "episode finished"
            );
        } else {
            warn!(
                max_steps = self.max_steps,
                unfinished = summary.unfinished(),
                "episode stopped at step limit"
            );
        }
        debug!(expired = summary.total_expired(), "episode expiry total");

        observer.on_episode_end(&summary);
        Ok(summary)
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    // ── Decision phase ────────────────────────────────────────────────────

    /// One destination per scenario.  Finished scenarios keep their location.
    fn decide(&mut self, obs: &Observation) -> Vec<NodeId> {
        #[cfg(not(feature = "parallel"))]
        {
            self.policy.choose_batch(obs, &mut self.rngs)
        }

        #[cfg(feature = "parallel")]
        {
            use dvrp_core::ScenarioId;
            use rayon::prelude::*;

            let policy = &self.policy;
            obs.scenarios
                .par_iter()
                .zip(self.rngs.par_iter_mut())
                .enumerate()
                .map(|(i, (s, rng))| {
                    if s.finished {
                        s.location
                    } else {
                        policy.choose(ScenarioId(i as u32), s, rng)
                    }
                })
                .collect()
        }
    }
}
