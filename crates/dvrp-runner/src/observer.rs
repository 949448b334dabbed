//! Episode observer trait for progress reporting and data collection.

use dvrp_env::ScenarioState;

use crate::EpisodeSummary;

/// Callbacks invoked by [`Episode::run`][crate::Episode::run] at key points
/// in the episode loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u32 }
///
/// impl EpisodeObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: u32, states: &[ScenarioState]) {
///         if step % self.interval == 0 {
///             let done = states.iter().filter(|s| s.is_finished()).count();
///             println!("step {step}: {done}/{} finished", states.len());
///         }
///     }
/// }
/// ```
pub trait EpisodeObserver {
    /// Called once after the environment has been reset, before the first
    /// decision.
    fn on_reset(&mut self, _states: &[ScenarioState]) {}

    /// Called after every lock-step `Env::step`.
    ///
    /// `step` counts from 1.  Provides read-only access to every scenario's
    /// state so that output writers can record per-step rows without the
    /// runner knowing about any specific format.
    fn on_step_end(&mut self, _step: u32, _states: &[ScenarioState]) {}

    /// Called once after the loop ends, whether or not every scenario
    /// finished.
    fn on_episode_end(&mut self, _summary: &EpisodeSummary) {}
}

/// An [`EpisodeObserver`] that does nothing.
pub struct NoopObserver;

impl EpisodeObserver for NoopObserver {}
