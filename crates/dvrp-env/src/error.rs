use dvrp_core::{DvrpError, NodeId, ScenarioId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error(transparent)]
    Config(#[from] DvrpError),

    #[error("step called before reset")]
    NotReset,

    #[error("{what} is {got}, expected {expected}")]
    ShapeMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{scenario}: destination {node} outside [0, {n_nodes})")]
    InvalidDestination {
        scenario: ScenarioId,
        node:     NodeId,
        n_nodes:  usize,
    },

    #[error("{scenario}: demand {demand} at {node} exceeds vehicle load {load}")]
    InsufficientLoad {
        scenario: ScenarioId,
        node:     NodeId,
        demand:   u32,
        load:     u32,
    },

    #[error("{scenario}: demand {demand} at {node} exceeds capacity {max_load}")]
    DemandExceedsCapacity {
        scenario: ScenarioId,
        node:     NodeId,
        demand:   u32,
        max_load: u32,
    },
}

pub type EnvResult<T> = Result<T, EnvError>;
