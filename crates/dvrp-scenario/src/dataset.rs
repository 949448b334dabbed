//! Immutable scenario data: node coordinates plus one demand event per node.

use dvrp_core::{NodeId, Point, ScenarioId};

use crate::{ScenarioError, ScenarioResult};

// ── DemandEvent ───────────────────────────────────────────────────────────────

/// A scheduled demand arrival at one node.
///
/// `demand == 0` means the node has no pending event.  An event whose
/// `arrival_time` is not positive is demand already known when the scenario
/// starts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DemandEvent {
    /// Absolute simulated time at which the demand appears.
    pub arrival_time:       f64,
    /// Gap to the previously assigned event of the same scenario.
    pub inter_arrival_time: f64,
    /// Quantity requested.
    pub demand:             u32,
}

impl DemandEvent {
    /// The "no event" value carried by the depot and by drained nodes.
    pub const NONE: DemandEvent = DemandEvent {
        arrival_time:       0.0,
        inter_arrival_time: 0.0,
        demand:             0,
    };

    /// Demand known at time 0.
    #[inline]
    pub fn initial(demand: u32) -> Self {
        Self { arrival_time: 0.0, inter_arrival_time: 0.0, demand }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.demand > 0
    }

    /// `true` for pending demand that exists from the very start.
    #[inline]
    pub fn is_initial(&self) -> bool {
        self.is_pending() && self.arrival_time <= 0.0
    }
}

// ── ScenarioData ──────────────────────────────────────────────────────────────

/// One routing problem: `points[i]` and `events[i]` describe node `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioData {
    pub points: Vec<Point>,
    pub events: Vec<DemandEvent>,
}

impl ScenarioData {
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn depot(&self) -> NodeId {
        NodeId::depot(self.points.len())
    }

    /// Number of events still to arrive after time 0.
    pub fn future_event_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_pending() && !e.is_initial()).count()
    }
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// A batch of scenarios sharing one node count.
///
/// Immutable after construction; every simulation run copies what it needs
/// out of it, so one dataset can initialise any number of runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    n_nodes:   usize,
    scenarios: Vec<ScenarioData>,
}

impl Dataset {
    /// Wrap `scenarios`, checking that every one has exactly `n_nodes` points
    /// and events.
    pub fn new(n_nodes: usize, scenarios: Vec<ScenarioData>) -> ScenarioResult<Self> {
        for s in &scenarios {
            if s.points.len() != n_nodes {
                return Err(ScenarioError::ShapeMismatch {
                    expected: n_nodes,
                    got:      s.points.len(),
                    what:     "scenario point count",
                });
            }
            if s.events.len() != n_nodes {
                return Err(ScenarioError::ShapeMismatch {
                    expected: n_nodes,
                    got:      s.events.len(),
                    what:     "scenario event count",
                });
            }
        }
        Ok(Self { n_nodes, scenarios })
    }

    /// Generator output is well-shaped by construction.
    pub(crate) fn from_generated(n_nodes: usize, scenarios: Vec<ScenarioData>) -> Self {
        debug_assert!(scenarios.iter().all(|s| s.n_nodes() == n_nodes));
        Self { n_nodes, scenarios }
    }

    #[inline]
    pub fn batch_size(&self) -> usize {
        self.scenarios.len()
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    #[inline]
    pub fn scenarios(&self) -> &[ScenarioData] {
        &self.scenarios
    }

    /// The scenario at `id`, or `None` past the end of the batch.
    #[inline]
    pub fn scenario(&self, id: ScenarioId) -> Option<&ScenarioData> {
        self.scenarios.get(id.index())
    }

    /// Check this dataset against an expected `(batch_size, n_nodes)` shape.
    pub fn expect_shape(&self, batch_size: usize, n_nodes: usize) -> ScenarioResult<()> {
        if self.batch_size() != batch_size {
            return Err(ScenarioError::ShapeMismatch {
                expected: batch_size,
                got:      self.batch_size(),
                what:     "dataset batch size",
            });
        }
        if self.n_nodes != n_nodes {
            return Err(ScenarioError::ShapeMismatch {
                expected: n_nodes,
                got:      self.n_nodes,
                what:     "dataset node count",
            });
        }
        Ok(())
    }
}
