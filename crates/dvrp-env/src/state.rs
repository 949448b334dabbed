//! `ScenarioState` — the mutable state of one scenario and its transition.
//!
//! Every `Vec` field has exactly `n_nodes` elements and is indexed by
//! `NodeId` (the distance matrix is `n_nodes²`, row-major).  Scenarios never
//! look at each other, so a batch is just a `Vec<ScenarioState>`.

use tracing::trace;

use dvrp_core::{EnvConfig, NodeId, Point, ScenarioId};
use dvrp_scenario::ScenarioData;

use crate::{EnvError, EnvResult, PendingEvent, PendingEvents};

/// Lifecycle of a scenario.  `Finished` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ScenarioStatus {
    #[default]
    Active,
    Finished,
}

/// Structure-of-Arrays state for one scenario.
#[derive(Clone, Debug)]
pub struct ScenarioState {
    pub status: ScenarioStatus,

    // ── Per-node arrays ───────────────────────────────────────────────────
    /// Node coordinates, immutable after reset.
    pub points: Vec<Point>,

    /// Outstanding demand, `0..=max_load`.
    pub demand: Vec<u32>,

    /// Steps since the node was last served or received new demand.
    pub waiting: Vec<u32>,

    /// Whether the vehicle may travel to the node next.
    pub eligible: Vec<bool>,

    /// Row-major `n_nodes × n_nodes` Euclidean distances.
    distances: Vec<f64>,

    /// Demand events that have not arrived yet.
    pub pending: PendingEvents,

    // ── Vehicle ───────────────────────────────────────────────────────────
    pub load:     u32,
    pub location: NodeId,
    /// Elapsed simulated time.
    pub time:     f64,

    // ── Counters ──────────────────────────────────────────────────────────
    /// Visits that served a still-pending demand.
    pub reward:        u32,
    /// Steps taken (finished scenarios stop counting).
    pub steps:         u32,
    /// Demands abandoned after waiting `expiry_steps` steps.
    pub expired:       u32,
    /// Events pulled forward by the waiting policy.
    pub forced_events: u32,
}

impl ScenarioState {
    /// Build the initial state for `data`.
    ///
    /// The vehicle starts full at the depot.  Events with a non-positive
    /// arrival time become outstanding demand immediately; all others are
    /// queued.  Fails if any demand exceeds `max_load`.
    pub fn new(scenario: ScenarioId, data: &ScenarioData, config: &EnvConfig) -> EnvResult<Self> {
        let n = data.n_nodes();
        let depot = NodeId::depot(n);

        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = data.points[i].distance(data.points[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        let mut state = Self {
            status:        ScenarioStatus::Active,
            points:        data.points.clone(),
            demand:        vec![0; n],
            waiting:       vec![0; n],
            eligible:      vec![false; n],
            distances,
            pending:       PendingEvents::new(),
            load:          config.max_load,
            location:      depot,
            time:          0.0,
            reward:        0,
            steps:         0,
            expired:       0,
            forced_events: 0,
        };

        for (i, event) in data.events.iter().enumerate() {
            if !event.is_pending() {
                continue;
            }
            let node = NodeId(i as u32);
            if event.demand > config.max_load {
                return Err(EnvError::DemandExceedsCapacity {
                    scenario,
                    node,
                    demand:   event.demand,
                    max_load: config.max_load,
                });
            }
            let pending = PendingEvent { arrival_time: event.arrival_time, node, demand: event.demand };
            if event.is_initial() {
                state.materialize(pending);
            } else {
                state.pending.push(pending);
            }
        }

        state.open_depot_if_stuck();
        Ok(state)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn depot(&self) -> NodeId {
        NodeId::depot(self.points.len())
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status == ScenarioStatus::Finished
    }

    /// Distance between two nodes.
    #[inline]
    pub fn distance(&self, from: NodeId, to: NodeId) -> f64 {
        self.distances[from.index() * self.n_nodes() + to.index()]
    }

    /// Sum of outstanding demand over all nodes.
    pub fn outstanding_demand(&self) -> u64 {
        self.demand.iter().map(|&d| d as u64).sum()
    }

    pub fn any_eligible(&self) -> bool {
        self.eligible.iter().any(|&e| e)
    }

    /// Terminal condition: nothing outstanding, nothing to come, back home.
    pub fn is_terminal(&self) -> bool {
        self.location == self.depot()
            && self.pending.is_empty()
            && self.demand.iter().all(|&d| d == 0)
    }

    // ── Transition ────────────────────────────────────────────────────────

    /// Apply one step towards `dest`.
    ///
    /// The caller has already checked that `dest` is in range and that
    /// `demand[dest] <= load`.  Finished scenarios are left untouched.
    pub(crate) fn advance(&mut self, dest: NodeId, config: &EnvConfig) {
        if self.is_finished() {
            return;
        }
        let depot = self.depot();
        let d = dest.index();

        // ① Travel
        self.time += self.distance(self.location, dest) / config.speed;
        self.location = dest;

        // ② Serve
        let served = self.demand[d];
        self.load -= served;
        if served > 0 {
            self.reward += 1;
        }

        // ③ Clear
        self.demand[d] = 0;
        self.waiting[d] = 0;

        // ④ Expire
        for (i, (wait, demand)) in self.waiting.iter_mut().zip(self.demand.iter_mut()).enumerate() {
            *wait = wait.saturating_add(1);
            if *wait >= config.expiry_steps && *demand > 0 {
                trace!(node = i, demand = *demand, "demand expired");
                *demand = 0;
                self.expired += 1;
            }
        }

        // ⑤ Refill
        if dest == depot {
            self.load = config.max_load;
        }

        // ⑥ Mask
        for (eligible, &demand) in self.eligible.iter_mut().zip(&self.demand) {
            *eligible = demand > 0 && self.load >= demand;
        }

        // ⑦ Arrivals
        while let Some(event) = self.pending.pop_due(self.time) {
            self.waiting[event.node.index()] = 0;
            self.materialize(event);
        }

        // ⑧ Wait
        //
        // A forced event keeps the node's wait counter, so a node that has
        // waited long enough expires on the next step unless it is served.
        if self.location == depot && !self.any_eligible() {
            if let Some(event) = self.pending.pop_next() {
                trace!(node = %event.node, at = event.arrival_time, "waiting at depot for next event");
                self.time = event.arrival_time;
                self.materialize(event);
                self.forced_events += 1;
            }
        }

        // ⑨ Fallback
        self.open_depot_if_stuck();

        // ⑩ Finish
        self.steps += 1;
        if self.is_terminal() {
            self.status = ScenarioStatus::Finished;
        }
    }

    /// Turn an arrived event into outstanding demand.  The wait counter is
    /// left to the caller.
    fn materialize(&mut self, event: PendingEvent) {
        let i = event.node.index();
        self.demand[i] = event.demand;
        self.eligible[i] = self.load >= event.demand;
    }

    fn open_depot_if_stuck(&mut self) {
        if !self.any_eligible() {
            let depot = self.depot().index();
            self.eligible[depot] = true;
        }
    }
}
