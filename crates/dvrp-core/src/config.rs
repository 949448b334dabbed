//! Simulation configuration.
//!
//! One `EnvConfig` drives the scenario generator, the engine, and the episode
//! runner, so the batch shape they agree on is written down exactly once.
//! Applications typically load it from JSON (with the `serde` feature) and
//! call [`EnvConfig::validate`] before building anything.

use std::path::PathBuf;

use crate::{DvrpError, DvrpResult, NodeId, Point};

/// Steps a pending demand may stay unserved before it is abandoned.
pub const DEFAULT_EXPIRY_STEPS: u32 = 5;

/// Fixed depot coordinate shared by every generated scenario.
pub const DEPOT_POINT: Point = Point { x: 0.5, y: 0.5 };

#[cfg(feature = "serde")]
fn default_expiry_steps() -> u32 {
    DEFAULT_EXPIRY_STEPS
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvConfig {
    /// Scenarios per batch, advanced in lock-step.
    pub batch_size: usize,

    /// Nodes per scenario, depot included.  The depot is node `n_nodes - 1`.
    pub n_nodes: usize,

    /// Vehicle capacity.  Also the upper bound on any node's demand.
    pub max_load: u32,

    /// Distance units travelled per unit of simulated time.
    pub speed: f64,

    /// Poisson arrival rate (λ) of future demand events.
    pub arrival_rate: f64,

    /// Customer nodes whose demand is already known at time 0.
    pub initial_demand_count: usize,

    /// Unserved steps after which a node's demand expires.  Default: 5.
    #[cfg_attr(feature = "serde", serde(default = "default_expiry_steps"))]
    pub expiry_steps: u32,

    /// Master RNG seed.  The same seed always produces identical datasets.
    pub seed: u64,

    /// Directory holding cached datasets.  `None` disables caching.
    #[cfg_attr(feature = "serde", serde(default))]
    pub data_dir: Option<PathBuf>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            batch_size:           128,
            n_nodes:              11,
            max_load:             10,
            speed:                1.0,
            arrival_rate:         1.0,
            initial_demand_count: 3,
            expiry_steps:         DEFAULT_EXPIRY_STEPS,
            seed:                 0,
            data_dir:             None,
        }
    }
}

impl EnvConfig {
    /// The depot node for this configuration.
    #[inline]
    pub fn depot(&self) -> NodeId {
        NodeId::depot(self.n_nodes)
    }

    /// Number of non-depot nodes.
    #[inline]
    pub fn customer_count(&self) -> usize {
        self.n_nodes.saturating_sub(1)
    }

    /// Reject configurations no simulation state can be built from.
    ///
    /// `max_load` must be at least 2 because future event demand is drawn
    /// from `[1, max_load)`.
    pub fn validate(&self) -> DvrpResult<()> {
        if self.batch_size == 0 {
            return Err(DvrpError::Config("batch_size must be at least 1".into()));
        }
        if self.n_nodes < 2 {
            return Err(DvrpError::Config(format!(
                "n_nodes must be at least 2 (one customer plus the depot), got {}",
                self.n_nodes
            )));
        }
        if u32::try_from(self.n_nodes).is_err() {
            return Err(DvrpError::Config(format!("n_nodes {} does not fit a NodeId", self.n_nodes)));
        }
        if self.max_load < 2 {
            return Err(DvrpError::Config(format!(
                "max_load must be at least 2, got {}",
                self.max_load
            )));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(DvrpError::Config(format!("speed must be positive, got {}", self.speed)));
        }
        if !(self.arrival_rate.is_finite() && self.arrival_rate > 0.0) {
            return Err(DvrpError::Config(format!(
                "arrival_rate must be positive, got {}",
                self.arrival_rate
            )));
        }
        if self.initial_demand_count > self.customer_count() {
            return Err(DvrpError::Config(format!(
                "initial_demand_count {} exceeds the {} customer nodes",
                self.initial_demand_count,
                self.customer_count()
            )));
        }
        if self.expiry_steps == 0 {
            return Err(DvrpError::Config("expiry_steps must be at least 1".into()));
        }
        Ok(())
    }
}
