//! The `Env` struct: batch reset and lock-step stepping.

use tracing::debug;

use dvrp_core::{EnvConfig, NodeId, ScenarioId};
use dvrp_scenario::Dataset;

use crate::{EnvError, EnvResult, Observation, ScenarioState};

/// Batched routing environment.
///
/// `Env` owns one [`ScenarioState`] per scenario and advances all of them
/// together.  Every public operation validates its input before touching any
/// state, so a rejected `reset` or `step` leaves the batch exactly as it was.
///
/// # Example
///
/// ```rust,ignore
/// let mut env = Env::new(config)?;
/// let mut obs = env.reset(&dataset)?;
/// while !obs.all_finished() {
///     let choice = policy.choose_batch(&obs, &mut rngs);
///     obs = env.step(&choice)?;
/// }
/// ```
pub struct Env {
    config:    EnvConfig,
    /// `None` until the first successful `reset`.
    scenarios: Option<Vec<ScenarioState>>,
}

impl Env {
    /// Validate `config` and create an environment with no batch loaded.
    pub fn new(config: EnvConfig) -> EnvResult<Self> {
        config.validate()?;
        Ok(Self { config, scenarios: None })
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Load a fresh batch from `dataset`, discarding any previous one.
    ///
    /// The dataset must have exactly `batch_size` scenarios of `n_nodes`
    /// nodes, and no demand above `max_load`.
    pub fn reset(&mut self, dataset: &Dataset) -> EnvResult<Observation> {
        if dataset.batch_size() != self.config.batch_size {
            return Err(EnvError::ShapeMismatch {
                expected: self.config.batch_size,
                got:      dataset.batch_size(),
                what:     "dataset batch size",
            });
        }
        if dataset.n_nodes() != self.config.n_nodes {
            return Err(EnvError::ShapeMismatch {
                expected: self.config.n_nodes,
                got:      dataset.n_nodes(),
                what:     "dataset node count",
            });
        }

        let states = dataset
            .scenarios()
            .iter()
            .enumerate()
            .map(|(i, data)| ScenarioState::new(ScenarioId(i as u32), data, &self.config))
            .collect::<EnvResult<Vec<_>>>()?;

        debug!(
            batch_size = self.config.batch_size,
            n_nodes = self.config.n_nodes,
            "environment reset"
        );
        let observation = Observation::capture(&states);
        self.scenarios = Some(states);
        Ok(observation)
    }

    /// Move every active scenario's vehicle to its entry in `destinations`.
    ///
    /// `destinations[i]` is ignored for scenarios that are already finished.
    /// Choosing a node that is not eligible is allowed as long as the load
    /// covers its demand; the outcome is then whatever the rules produce.
    pub fn step(&mut self, destinations: &[NodeId]) -> EnvResult<Observation> {
        let config = &self.config;
        let states = self.scenarios.as_mut().ok_or(EnvError::NotReset)?;
        validate_destinations(states, destinations, config.n_nodes)?;

        #[cfg(not(feature = "parallel"))]
        for (state, &dest) in states.iter_mut().zip(destinations) {
            state.advance(dest, config);
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            states
                .par_iter_mut()
                .zip(destinations.par_iter())
                .for_each(|(state, &dest)| state.advance(dest, config));
        }

        Ok(Observation::capture(states))
    }

    /// Snapshot of the current batch.
    pub fn observation(&self) -> EnvResult<Observation> {
        Ok(Observation::capture(self.scenarios()?))
    }

    /// Read-only access to every scenario's state.
    pub fn scenarios(&self) -> EnvResult<&[ScenarioState]> {
        self.scenarios.as_deref().ok_or(EnvError::NotReset)
    }

    pub fn scenario(&self, id: ScenarioId) -> EnvResult<&ScenarioState> {
        let states = self.scenarios()?;
        states.get(id.index()).ok_or(EnvError::ShapeMismatch {
            expected: states.len(),
            got:      id.index(),
            what:     "scenario index",
        })
    }

    /// `true` once a batch is loaded and every scenario has finished.
    pub fn all_finished(&self) -> bool {
        self.scenarios
            .as_deref()
            .is_some_and(|s| s.iter().all(ScenarioState::is_finished))
    }
}

/// Reject the whole step if any scenario's choice is unusable.
fn validate_destinations(
    states:       &[ScenarioState],
    destinations: &[NodeId],
    n_nodes:      usize,
) -> EnvResult<()> {
    if destinations.len() != states.len() {
        return Err(EnvError::ShapeMismatch {
            expected: states.len(),
            got:      destinations.len(),
            what:     "destination count",
        });
    }
    for (i, (state, &dest)) in states.iter().zip(destinations).enumerate() {
        let scenario = ScenarioId(i as u32);
        if dest.index() >= n_nodes {
            return Err(EnvError::InvalidDestination { scenario, node: dest, n_nodes });
        }
        if state.is_finished() {
            continue;
        }
        let demand = state.demand[dest.index()];
        if demand > state.load {
            return Err(EnvError::InsufficientLoad { scenario, node: dest, demand, load: state.load });
        }
    }
    Ok(())
}
