//! CSV dataset cache.
//!
//! # File format
//!
//! One file per `(batch_size, n_nodes)` shape, named
//! `VRP-size-<batch_size>-len-<n_nodes>.csv`, with one row per
//! (scenario, node):
//!
//! ```csv
//! scenario,node,x,y,arrival_time,inter_arrival_time,demand
//! 0,0,0.1372,0.9021,1.8342,0.4410,3
//! 0,1,0.6120,0.0485,0,0,7
//! 0,2,0.5,0.5,0,0,0
//! ```
//!
//! Floats are written in shortest round-trip form, so a saved dataset loads
//! back bit-identical.  Rows may appear in any order, but every
//! (scenario, node) pair must appear exactly once.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use dvrp_core::Point;

use crate::{Dataset, DemandEvent, ScenarioData, ScenarioError, ScenarioGenerator, ScenarioResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct DatasetRecord {
    scenario:           u32,
    node:               u32,
    x:                  f64,
    y:                  f64,
    arrival_time:       f64,
    inter_arrival_time: f64,
    demand:             u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Cache file for a `(batch_size, n_nodes)` shape inside `dir`.
pub fn dataset_path(dir: &Path, batch_size: usize, n_nodes: usize) -> PathBuf {
    dir.join(format!("VRP-size-{batch_size}-len-{n_nodes}.csv"))
}

/// Write `dataset` to `path`, replacing any existing file.
pub fn save_dataset(path: &Path, dataset: &Dataset) -> ScenarioResult<()> {
    let file = std::fs::File::create(path)?;
    save_dataset_writer(file, dataset)
}

/// Like [`save_dataset`] but accepts any `Write` sink.
pub fn save_dataset_writer<W: Write>(writer: W, dataset: &Dataset) -> ScenarioResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (s, scenario) in dataset.scenarios().iter().enumerate() {
        for (n, (point, event)) in scenario.points.iter().zip(&scenario.events).enumerate() {
            csv_writer.serialize(DatasetRecord {
                scenario:           s as u32,
                node:               n as u32,
                x:                  point.x,
                y:                  point.y,
                arrival_time:       event.arrival_time,
                inter_arrival_time: event.inter_arrival_time,
                demand:             event.demand,
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Load a dataset of shape `(batch_size, n_nodes)` from `path`.
///
/// Any missing, duplicated, or out-of-range row is a fatal
/// [`ScenarioError::Corrupt`].
pub fn load_dataset(path: &Path, batch_size: usize, n_nodes: usize) -> ScenarioResult<Dataset> {
    let file = std::fs::File::open(path)?;
    load_dataset_reader(file, batch_size, n_nodes)
}

/// Like [`load_dataset`] but accepts any `Read` source.
pub fn load_dataset_reader<R: Read>(
    reader: R,
    batch_size: usize,
    n_nodes: usize,
) -> ScenarioResult<Dataset> {
    let total = batch_size.checked_mul(n_nodes).ok_or_else(|| {
        ScenarioError::Corrupt(format!("shape [{batch_size}, {n_nodes}] overflows usize"))
    })?;
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut cells: Vec<Option<(Point, DemandEvent)>> = vec![None; total];

    for result in csv_reader.deserialize::<DatasetRecord>() {
        let row = result?;
        let (s, n) = (row.scenario as usize, row.node as usize);
        if s >= batch_size || n >= n_nodes {
            return Err(ScenarioError::Corrupt(format!(
                "row (scenario {s}, node {n}) outside shape [{batch_size}, {n_nodes}]"
            )));
        }
        if !(row.x.is_finite() && row.y.is_finite()
            && row.arrival_time.is_finite() && row.inter_arrival_time.is_finite())
        {
            return Err(ScenarioError::Corrupt(format!(
                "non-finite value in row (scenario {s}, node {n})"
            )));
        }
        let cell = &mut cells[s * n_nodes + n];
        if cell.is_some() {
            return Err(ScenarioError::Corrupt(format!("duplicate row (scenario {s}, node {n})")));
        }
        *cell = Some((
            Point::new(row.x, row.y),
            DemandEvent {
                arrival_time:       row.arrival_time,
                inter_arrival_time: row.inter_arrival_time,
                demand:             row.demand,
            },
        ));
    }

    let mut scenarios = Vec::with_capacity(batch_size);
    for (s, chunk) in cells.chunks(n_nodes.max(1)).take(batch_size).enumerate() {
        let mut points = Vec::with_capacity(n_nodes);
        let mut events = Vec::with_capacity(n_nodes);
        for (n, cell) in chunk.iter().enumerate() {
            let Some((point, event)) = cell else {
                return Err(ScenarioError::Corrupt(format!("missing row (scenario {s}, node {n})")));
            };
            points.push(*point);
            events.push(*event);
        }
        scenarios.push(ScenarioData { points, events });
    }

    Dataset::new(n_nodes, scenarios)
}

/// Load the cached dataset for the generator's shape from `dir`, or generate
/// one from `batch_seed` and save it there.
///
/// A cache file that exists but cannot be read is an error, never a silent
/// regeneration.
pub fn load_or_generate(
    dir: &Path,
    generator: &ScenarioGenerator,
    batch_seed: u64,
) -> ScenarioResult<Dataset> {
    let cfg = generator.config();
    let path = dataset_path(dir, cfg.batch_size, cfg.n_nodes);

    if path.exists() {
        info!(path = %path.display(), "loading cached dataset");
        return load_dataset(&path, cfg.batch_size, cfg.n_nodes);
    }

    info!(path = %path.display(), "creating dataset");
    let dataset = generator.generate(batch_seed);
    std::fs::create_dir_all(dir)?;
    save_dataset(&path, &dataset)?;
    Ok(dataset)
}
