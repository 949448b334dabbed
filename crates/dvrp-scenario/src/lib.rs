//! `dvrp-scenario` — demand scenarios, their generator, and the dataset cache.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`dataset`]    | `DemandEvent`, `ScenarioData`, `Dataset`                   |
//! | [`generator`]  | `ScenarioGenerator` (one batch), `DataGenerator` (streams) |
//! | [`cache`]      | `load_dataset`, `save_dataset`, `load_or_generate`         |
//! | [`error`]      | `ScenarioError`, `ScenarioResult<T>`                       |
//!
//! # Demand model (summary)
//!
//! ```text
//! customers        = shuffle(0 .. n_nodes-1)
//! initial demand   = customers[..k]      arrival 0,  demand ~ U[1, max_load]
//! future events    = customers[k..]      inter ~ Exp(λ), arrival = Σ inter,
//!                                        demand ~ U[1, max_load)
//! depot            = node n_nodes-1 at (0.5, 0.5), never carries demand
//! ```
//!
//! Arrival times grow in shuffled-assignment order, not node order.

pub mod cache;
pub mod dataset;
pub mod error;
pub mod generator;


pub use cache::{dataset_path, load_dataset, load_dataset_reader, load_or_generate, save_dataset, save_dataset_writer};
pub use dataset::{Dataset, DemandEvent, ScenarioData};
pub use error::{ScenarioError, ScenarioResult};
pub use generator::{DataGenerator, ScenarioGenerator};
