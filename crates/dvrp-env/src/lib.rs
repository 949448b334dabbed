//! `dvrp-env` — the batched dynamic routing environment.
//!
//! # Step pipeline
//!
//! ```text
//! for each active scenario, given destination d:
//!   ① Travel   — time += dist(loc, d) / speed; loc = d
//!   ② Serve    — load -= demand[d]; reward += 1 if demand[d] > 0
//!   ③ Clear    — demand[d] = 0; wait[d] = 0
//!   ④ Expire   — wait += 1 everywhere; demand dropped once wait ≥ expiry_steps
//!   ⑤ Refill   — load = max_load at the depot
//!   ⑥ Mask     — eligible[i] = demand[i] > 0 && load ≥ demand[i]
//!   ⑦ Arrivals — fire every pending event with arrival_time ≤ time
//!   ⑧ Wait     — idle at the depot with nothing eligible: fire the soonest
//!                event early and jump the clock to it (at most one per step)
//!   ⑨ Fallback — nothing eligible: open the depot
//!   ⑩ Finish   — no demand, no pending events, at the depot
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Steps scenarios on Rayon's thread pool.                |

pub mod env;
pub mod error;
pub mod events;
pub mod observation;
pub mod state;


pub use env::Env;
pub use error::{EnvError, EnvResult};
pub use events::{PendingEvent, PendingEvents};
pub use observation::{Observation, ScenarioObservation};
pub use state::{ScenarioState, ScenarioStatus};
