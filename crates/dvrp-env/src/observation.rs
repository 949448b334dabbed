//! Read-only snapshots handed to the routing agent after `reset` and `step`.

use dvrp_core::{NodeId, Point};

use crate::ScenarioState;

/// What the agent sees of one scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioObservation {
    /// Node coordinates; the last one is the depot.
    pub points:   Vec<Point>,
    /// Outstanding demand per node.
    pub demand:   Vec<u32>,
    /// `true` where the vehicle may go next.  Never all-false.
    pub eligible: Vec<bool>,
    pub load:     u32,
    pub location: NodeId,
    pub time:     f64,
    pub finished: bool,
}

impl ScenarioObservation {
    pub(crate) fn capture(state: &ScenarioState) -> Self {
        Self {
            points:   state.points.clone(),
            demand:   state.demand.clone(),
            eligible: state.eligible.clone(),
            load:     state.load,
            location: state.location,
            time:     state.time,
            finished: state.is_finished(),
        }
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn depot(&self) -> NodeId {
        NodeId::depot(self.points.len())
    }

    /// Eligible nodes in ascending index order.
    pub fn eligible_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.eligible
            .iter()
            .enumerate()
            .filter(|(_, e)| **e)
            .map(|(i, _)| NodeId(i as u32))
    }

    /// Mask in the "0 = may visit, 1 = masked out" encoding.
    pub fn mask_bits(&self) -> Vec<u8> {
        self.eligible.iter().map(|&e| u8::from(!e)).collect()
    }

    /// Per-node `[x, y, demand]` rows.
    pub fn features(&self) -> Vec<[f64; 3]> {
        self.points
            .iter()
            .zip(&self.demand)
            .map(|(p, &d)| [p.x, p.y, d as f64])
            .collect()
    }
}

/// Snapshot of the whole batch, indexed by `ScenarioId`.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub scenarios: Vec<ScenarioObservation>,
}

impl Observation {
    pub(crate) fn capture(states: &[ScenarioState]) -> Self {
        Self { scenarios: states.iter().map(ScenarioObservation::capture).collect() }
    }

    #[inline]
    pub fn batch_size(&self) -> usize {
        self.scenarios.len()
    }

    pub fn locations(&self) -> Vec<NodeId> {
        self.scenarios.iter().map(|s| s.location).collect()
    }

    pub fn loads(&self) -> Vec<u32> {
        self.scenarios.iter().map(|s| s.load).collect()
    }

    pub fn finished(&self) -> Vec<bool> {
        self.scenarios.iter().map(|s| s.finished).collect()
    }

    /// `true` once every scenario of the batch is finished.
    pub fn all_finished(&self) -> bool {
        self.scenarios.iter().all(|s| s.finished)
    }
}
