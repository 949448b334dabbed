//! The `RoutingPolicy` trait, the extension point for decision-making code.

use dvrp_core::{NodeId, ScenarioId, ScenarioRng};
use dvrp_env::{Observation, ScenarioObservation};

/// Pluggable next-destination choice.
///
/// Implement this trait to drive [`dvrp_env::Env`] from a heuristic, a
/// learned model, or a replayed plan.  The engine only checks that the
/// returned node exists and that the vehicle can carry its demand; choosing
/// an eligible node (`obs.eligible[node]`) is the policy's responsibility.
///
/// # Thread safety
///
/// The runner may call `choose` for many scenarios in parallel via Rayon, so
/// implementations must be `Send + Sync`.  Randomness must come from the
/// supplied per-scenario `rng`, never from shared state.
///
/// # Example
///
/// ```rust,ignore
/// struct FirstEligible;
///
/// impl RoutingPolicy for FirstEligible {
///     fn choose(&self, _s: ScenarioId, obs: &ScenarioObservation, _rng: &mut ScenarioRng) -> NodeId {
///         obs.eligible_nodes().next().unwrap_or(obs.depot())
///     }
/// }
/// ```
pub trait RoutingPolicy: Send + Sync + 'static {
    /// Pick the next node for one active scenario.
    fn choose(
        &self,
        scenario: ScenarioId,
        obs:      &ScenarioObservation,
        rng:      &mut ScenarioRng,
    ) -> NodeId;

    /// Pick one node per scenario of the batch.
    ///
    /// Finished scenarios get their current location; the engine ignores it.
    fn choose_batch(&self, obs: &Observation, rngs: &mut [ScenarioRng]) -> Vec<NodeId> {
        obs.scenarios
            .iter()
            .zip(rngs.iter_mut())
            .enumerate()
            .map(|(i, (s, rng))| {
                if s.finished {
                    s.location
                } else {
                    self.choose(ScenarioId(i as u32), s, rng)
                }
            })
            .collect()
    }
}
