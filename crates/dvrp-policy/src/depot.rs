//! A policy that never leaves the depot.

use dvrp_core::{NodeId, ScenarioId, ScenarioRng};
use dvrp_env::ScenarioObservation;

use crate::RoutingPolicy;

/// Always returns the depot.
///
/// Every demand expires unserved, so an episode run with it measures the
/// waiting policy alone.  Useful as a baseline and in tests.
pub struct DepotOnly;

impl RoutingPolicy for DepotOnly {
    fn choose(
        &self,
        _scenario: ScenarioId,
        obs:       &ScenarioObservation,
        _rng:      &mut ScenarioRng,
    ) -> NodeId {
        obs.depot()
    }
}
