//! Random scenario generation.
//!
//! [`ScenarioGenerator`] turns one batch seed into one [`Dataset`].
//! [`DataGenerator`] wraps it with the cached evaluation dataset and an
//! endless stream of fresh training batches.

use dvrp_core::{DEPOT_POINT, EnvConfig, Point, ScenarioId, ScenarioRng, SimRng};

use crate::{Dataset, DemandEvent, ScenarioData, ScenarioResult};

/// Offset used to split the training stream from the evaluation seed.
const TRAIN_STREAM: u64 = 1;

// ── ScenarioGenerator ─────────────────────────────────────────────────────────

/// Builds batches of independent scenarios from a validated [`EnvConfig`].
#[derive(Clone, Debug)]
pub struct ScenarioGenerator {
    config: EnvConfig,
}

impl ScenarioGenerator {
    /// Validate `config` and wrap it.
    pub fn new(config: EnvConfig) -> ScenarioResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Generate `config.batch_size` scenarios.
    ///
    /// Scenario `i` draws from `ScenarioRng::new(batch_seed, ScenarioId(i))`,
    /// so the result depends only on `batch_seed` and the configuration.
    pub fn generate(&self, batch_seed: u64) -> Dataset {
        let ids = 0..self.config.batch_size as u32;

        #[cfg(not(feature = "parallel"))]
        let scenarios: Vec<ScenarioData> = ids
            .map(|i| self.generate_scenario(&mut ScenarioRng::new(batch_seed, ScenarioId(i))))
            .collect();

        #[cfg(feature = "parallel")]
        let scenarios: Vec<ScenarioData> = {
            use rayon::prelude::*;
            ids.into_par_iter()
                .map(|i| self.generate_scenario(&mut ScenarioRng::new(batch_seed, ScenarioId(i))))
                .collect()
        };

        Dataset::from_generated(self.config.n_nodes, scenarios)
    }

    /// Generate a single scenario from `rng`.
    pub fn generate_scenario(&self, rng: &mut ScenarioRng) -> ScenarioData {
        let cfg = &self.config;
        let customers = cfg.customer_count();

        let mut points: Vec<Point> = (0..customers)
            .map(|_| Point::new(rng.random(), rng.random()))
            .collect();
        points.push(DEPOT_POINT);

        let mut events = vec![DemandEvent::NONE; cfg.n_nodes];

        let mut order: Vec<usize> = (0..customers).collect();
        rng.shuffle(&mut order);
        let (initial, future) = order.split_at(cfg.initial_demand_count);

        for &node in initial {
            events[node] = DemandEvent::initial(rng.gen_range(1..=cfg.max_load));
        }

        let mut arrival_time = 0.0;
        for &node in future {
            let inter_arrival_time = exponential(rng.random(), cfg.arrival_rate);
            arrival_time += inter_arrival_time;
            events[node] = DemandEvent {
                arrival_time,
                inter_arrival_time,
                demand: rng.gen_range(1..cfg.max_load),
            };
        }

        ScenarioData { points, events }
    }
}

/// Inverse CDF of `Exponential(rate)` evaluated at `p ∈ [0, 1)`.
#[inline]
pub fn exponential(p: f64, rate: f64) -> f64 {
    -(1.0 - p).ln() / rate
}

// ── DataGenerator ─────────────────────────────────────────────────────────────

/// Evaluation dataset plus a stream of fresh training batches.
///
/// The evaluation batch is loaded from `config.data_dir` when a cached copy
/// exists (and saved there otherwise).  Training batches are never cached:
/// each call draws a new batch seed from the training stream.
pub struct DataGenerator {
    generator: ScenarioGenerator,
    test_data: Dataset,
    train_rng: SimRng,
}

impl DataGenerator {
    pub fn new(config: EnvConfig) -> ScenarioResult<Self> {
        let generator = ScenarioGenerator::new(config)?;
        let seed = generator.config().seed;

        let test_data = match &generator.config().data_dir {
            Some(dir) => crate::load_or_generate(dir, &generator, seed)?,
            None      => generator.generate(seed),
        };
        let train_rng = SimRng::new(seed).child(TRAIN_STREAM);

        Ok(Self { generator, test_data, train_rng })
    }

    /// The full evaluation dataset.
    pub fn test_all(&self) -> &Dataset {
        &self.test_data
    }

    /// One fresh training batch.
    pub fn next_train_batch(&mut self) -> Dataset {
        let seed = self.train_rng.next_seed();
        self.generator.generate(seed)
    }

    /// `n_batches` fresh training batches.
    pub fn train_batches(&mut self, n_batches: usize) -> Vec<Dataset> {
        (0..n_batches).map(|_| self.next_train_batch()).collect()
    }

    pub fn generator(&self) -> &ScenarioGenerator {
        &self.generator
    }
}
