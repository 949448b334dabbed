//! Deterministic per-scenario and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each scenario gets its own independent `SmallRng` seeded by:
//!
//!   seed = batch_seed XOR (scenario_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive scenario ids uniformly across the seed space.
//! This means:
//!
//! - Scenarios never share RNG state, so they can be generated or stepped on
//!   any thread in any order and still produce identical results.
//! - Growing the batch does not disturb the seeds of existing scenarios.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ScenarioId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ScenarioRng ───────────────────────────────────────────────────────────────

/// Per-scenario deterministic RNG.
///
/// Used by the scenario generator and by stochastic routing policies.  The
/// type is `!Sync` so a scenario's stream cannot be shared across threads.
pub struct ScenarioRng(SmallRng);

impl ScenarioRng {
    /// Seed deterministically from a batch seed and a scenario id.
    pub fn new(batch_seed: u64, scenario: ScenarioId) -> Self {
        let seed = batch_seed ^ (scenario.0 as u64).wrapping_mul(MIXING_CONSTANT);
        ScenarioRng(SmallRng::seed_from_u64(seed))
    }

    /// One RNG per scenario of a batch, indexed by `ScenarioId`.
    pub fn for_batch(batch_seed: u64, batch_size: usize) -> Vec<ScenarioRng> {
        (0..batch_size as u32)
            .map(|i| ScenarioRng::new(batch_seed, ScenarioId(i)))
            .collect()
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    /// For `f64` the value lies in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Root RNG for batch-level decisions (per-batch seeds for the generator,
/// per-episode seeds for policy RNGs).
///
/// Used only in single-threaded contexts.  Parallel work derives
/// [`ScenarioRng`]s from a seed drawn here.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Draw a fresh 64-bit seed, e.g. for [`ScenarioRng::for_batch`].
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.0.r#gen()
    }
}
