//! Fluent builder for constructing an [`Episode`].

use dvrp_core::{EnvConfig, ScenarioRng, SimRng};
use dvrp_env::Env;
use dvrp_policy::RoutingPolicy;
use dvrp_scenario::Dataset;

use crate::{Episode, RunnerResult};

/// Offset of the policy stream derived from `config.seed`.
const POLICY_STREAM: u64 = 2;

/// Fluent builder for [`Episode<P>`].
///
/// # Required inputs
///
/// - [`EnvConfig`]: batch shape, capacity, speed, expiry, seed
/// - [`Dataset`]: one batch, usually from [`dvrp_scenario::DataGenerator`]
/// - `P: RoutingPolicy`: the decision-making code
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                        |
/// |---------------------|------------------------------------------------|
/// | `.max_steps(n)`     | `2 × n_nodes × (expiry_steps + 1)`             |
/// | `.policy_seed(s)`   | Drawn from `config.seed`                       |
///
/// # Example
///
/// ```rust,ignore
/// let mut episode = EpisodeBuilder::new(config, dataset, RandomEligible)
///     .max_steps(500)
///     .policy_seed(7)
///     .build()?;
/// episode.run(&mut NoopObserver)?;
/// ```
pub struct EpisodeBuilder<P: RoutingPolicy> {
    config:      EnvConfig,
    dataset:     Dataset,
    policy:      P,
    max_steps:   Option<u32>,
    policy_seed: Option<u64>,
}

impl<P: RoutingPolicy> EpisodeBuilder<P> {
    pub fn new(config: EnvConfig, dataset: Dataset, policy: P) -> Self {
        Self { config, dataset, policy, max_steps: None, policy_seed: None }
    }

    /// Stop after `n` lock-step calls even if some scenarios are still
    /// active.  A policy that never returns to the depot would otherwise
    /// loop forever.
    pub fn max_steps(mut self, n: u32) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Seed for the per-scenario RNGs handed to the policy.
    pub fn policy_seed(mut self, seed: u64) -> Self {
        self.policy_seed = Some(seed);
        self
    }

    /// Validate the config and dataset shape and return a ready-to-run
    /// [`Episode`].
    pub fn build(self) -> RunnerResult<Episode<P>> {
        self.config.validate()?;
        self.dataset.expect_shape(self.config.batch_size, self.config.n_nodes)?;

        let max_steps = self.max_steps.unwrap_or_else(|| default_max_steps(&self.config));
        let seed = self
            .policy_seed
            .unwrap_or_else(|| SimRng::new(self.config.seed).child(POLICY_STREAM).next_seed());
        let rngs = ScenarioRng::for_batch(seed, self.config.batch_size);

        Ok(Episode {
            env:     Env::new(self.config)?,
            dataset: self.dataset,
            policy:  self.policy,
            rngs,
            max_steps,
        })
    }
}

/// Enough steps for a policy that only ever waits at the depot to see every
/// demand arrive and expire.
fn default_max_steps(config: &EnvConfig) -> u32 {
    let per_node = config.expiry_steps.saturating_add(1).saturating_mul(2);
    u32::try_from(config.n_nodes).unwrap_or(u32::MAX).saturating_mul(per_node)
}
