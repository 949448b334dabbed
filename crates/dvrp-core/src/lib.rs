//! `dvrp-core` — foundational types for the `dvrp` dynamic routing simulator.
//!
//! This crate is a dependency of every other `dvrp-*` crate.  It has no
//! `dvrp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ScenarioId`, `NodeId`                                |
//! | [`geo`]         | `Point` (unit-square coordinate), Euclidean distance  |
//! | [`config`]      | `EnvConfig` and its validation                        |
//! | [`rng`]         | `ScenarioRng` (per-scenario), `SimRng` (global)       |
//! | [`error`]       | `DvrpError`, `DvrpResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_EXPIRY_STEPS, DEPOT_POINT, EnvConfig};
pub use error::{DvrpError, DvrpResult};
pub use geo::Point;
pub use ids::{NodeId, ScenarioId};
pub use rng::{ScenarioRng, SimRng};
