//! Uniform random policy.

use dvrp_core::{NodeId, ScenarioId, ScenarioRng};
use dvrp_env::ScenarioObservation;

use crate::RoutingPolicy;

/// Pick uniformly among eligible nodes using the scenario's own RNG.
pub struct RandomEligible;

impl RoutingPolicy for RandomEligible {
    fn choose(
        &self,
        _scenario: ScenarioId,
        obs:       &ScenarioObservation,
        rng:       &mut ScenarioRng,
    ) -> NodeId {
        let eligible: Vec<NodeId> = obs.eligible_nodes().collect();
        rng.choose(&eligible).copied().unwrap_or(obs.depot())
    }
}
