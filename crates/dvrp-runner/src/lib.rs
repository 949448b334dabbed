//! `dvrp-runner` — episode loop for the dvrp routing simulator.
//!
//! # Episode loop
//!
//! ```text
//! env.reset(dataset)
//! while !all_finished && step < max_steps:
//!   ① Decide   — RoutingPolicy::choose for every active scenario
//!                (parallel with the `parallel` feature).
//!   ② Step     — Env::step applies all choices in lock-step.
//!   ③ Observe  — EpisodeObserver::on_step_end sees the new states.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Runs the decision phase and the engine step on Rayon.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dvrp_policy::NearestEligible;
//! use dvrp_runner::{EpisodeBuilder, NoopObserver};
//!
//! let mut episode = EpisodeBuilder::new(config, dataset, NearestEligible).build()?;
//! let summary = episode.run(&mut NoopObserver)?;
//! println!("mean reward {:.2}", summary.mean_reward());
//! ```

pub mod builder;
pub mod episode;
pub mod error;
pub mod observer;
pub mod summary;

#[cfg(test)]
mod tests;

pub use builder::EpisodeBuilder;
pub use episode::Episode;
pub use error::{RunnerError, RunnerResult};
pub use observer::{EpisodeObserver, NoopObserver};
pub use summary::{EpisodeSummary, ScenarioSummary};
