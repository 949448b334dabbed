//! `dvrp-policy` — the routing agent contract and reference policies.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`model`]   | `RoutingPolicy` trait                                         |
//! | [`nearest`] | `NearestEligible`: greedy closest eligible node              |
//! | [`random`]  | `RandomEligible`: uniform over eligible nodes                |
//! | [`depot`]   | `DepotOnly`: never leaves the depot                          |
//!
//! # Design notes
//!
//! Policies are pure functions of one scenario's observation plus that
//! scenario's RNG.  They hold no mutable state, so the episode runner may
//! evaluate a batch in parallel and still get deterministic choices.

pub mod depot;
pub mod model;
pub mod nearest;
pub mod random;


pub use depot::DepotOnly;
pub use model::RoutingPolicy;
pub use nearest::NearestEligible;
pub use random::RandomEligible;
