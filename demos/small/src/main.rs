//! small — end-to-end run of the dvrp routing simulator.
//!
//! Generates (or loads from the dataset cache) one evaluation batch, runs a
//! greedy and a random policy over it, and writes per-step CSV output for the
//! greedy run to `output/small`.
//!
//! ```text
//! cargo run -p small                      # built-in constants
//! cargo run -p small -- demos/small/config.json
//! RUST_LOG=debug cargo run -p small       # engine and cache logging
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dvrp_core::EnvConfig;
use dvrp_env::ScenarioState;
use dvrp_output::{CsvWriter, EpisodeOutputObserver, OutputWriter};
use dvrp_policy::{NearestEligible, RandomEligible, RoutingPolicy};
use dvrp_runner::{EpisodeBuilder, EpisodeObserver, EpisodeSummary, NoopObserver};
use dvrp_scenario::{DataGenerator, Dataset};

// ── Constants ─────────────────────────────────────────────────────────────────

const BATCH_SIZE:    usize = 16;
const N_NODES:       usize = 11;
const MAX_LOAD:      u32   = 10;
const ARRIVAL_RATE:  f64   = 1.5;
const INITIAL_COUNT: usize = 3;
const SEED:          u64   = 42;
const OUTPUT_DIR:    &str  = "output/small";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:      EpisodeOutputObserver<W>,
    step_rows:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: EpisodeOutputObserver<W>) -> Self {
        Self { inner, step_rows: 0 }
    }
}

impl<W: OutputWriter> EpisodeObserver for CountingObserver<W> {
    fn on_reset(&mut self, states: &[ScenarioState]) {
        self.step_rows += states.len();
        self.inner.on_reset(states);
    }

    fn on_step_end(&mut self, step: u32, states: &[ScenarioState]) {
        self.step_rows += states.iter().filter(|s| s.steps == step).count();
        self.inner.on_step_end(step, states);
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) {
        self.inner.on_episode_end(summary);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<PathBuf>) -> Result<EnvConfig> {
    let Some(path) = path else {
        return Ok(EnvConfig {
            batch_size:           BATCH_SIZE,
            n_nodes:              N_NODES,
            max_load:             MAX_LOAD,
            arrival_rate:         ARRIVAL_RATE,
            initial_demand_count: INITIAL_COUNT,
            seed:                 SEED,
            ..EnvConfig::default()
        });
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: EnvConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn print_summary(name: &str, summary: &EpisodeSummary) {
    println!(
        "{:<10} {:>6} {:>10.3} {:>10.3} {:>8} {:>10}",
        name,
        summary.steps,
        summary.mean_reward(),
        summary.mean_elapsed_time(),
        summary.total_expired(),
        summary.unfinished(),
    );
}

fn run_quiet<P: RoutingPolicy>(config: &EnvConfig, dataset: &Dataset, policy: P) -> Result<EpisodeSummary> {
    let mut episode = EpisodeBuilder::new(config.clone(), dataset.clone(), policy).build()?;
    Ok(episode.run(&mut NoopObserver)?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Configuration.
    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;
    println!("=== small — dvrp routing simulator ===");
    println!(
        "Batch: {}  |  Nodes: {}  |  Capacity: {}  |  λ: {}  |  Seed: {}",
        config.batch_size, config.n_nodes, config.max_load, config.arrival_rate, config.seed
    );
    println!();

    // 2. Evaluation batch (cached when data_dir is set).
    let t0 = Instant::now();
    let mut data = DataGenerator::new(config.clone())?;
    let dataset = data.test_all().clone();
    info!(
        scenarios = dataset.batch_size(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "evaluation batch ready"
    );

    // 3. Greedy run with CSV output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(EpisodeOutputObserver::new(writer));
    let t0 = Instant::now();
    let greedy = EpisodeBuilder::new(config.clone(), dataset.clone(), NearestEligible)
        .build()?
        .run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Baselines on the same batch and on one fresh training batch.
    let random = run_quiet(&config, &dataset, RandomEligible)?;
    let fresh = run_quiet(&config, &data.next_train_batch(), NearestEligible)?;

    // 5. Summary.
    println!("Greedy episode complete in {:.3} s", elapsed.as_secs_f64());
    println!("  step_records.csv      : {} rows", obs.step_rows);
    println!("  episode_summaries.csv : {} rows", greedy.scenarios.len());
    println!();

    println!(
        "{:<10} {:>6} {:>10} {:>10} {:>8} {:>10}",
        "Policy", "Steps", "Reward", "Time", "Expired", "Unfinished"
    );
    println!("{}", "-".repeat(59));
    print_summary("greedy", &greedy);
    print_summary("random", &random);
    print_summary("greedy*", &fresh);
    println!("(* on a fresh training batch)");

    Ok(())
}
