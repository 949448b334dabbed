//! Greedy nearest-neighbour policy.

use dvrp_core::{NodeId, ScenarioId, ScenarioRng};
use dvrp_env::ScenarioObservation;

use crate::RoutingPolicy;

/// Travel to the closest eligible node; ties go to the lower index.
///
/// The depot is only eligible when nothing else is, so this never returns
/// home while it can still serve someone.
pub struct NearestEligible;

impl RoutingPolicy for NearestEligible {
    fn choose(
        &self,
        _scenario: ScenarioId,
        obs:       &ScenarioObservation,
        _rng:      &mut ScenarioRng,
    ) -> NodeId {
        let here = obs.points[obs.location.index()];
        obs.eligible_nodes()
            .map(|n| (here.distance(obs.points[n.index()]), n))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, n)| n)
            .unwrap_or(obs.depot())
    }
}
