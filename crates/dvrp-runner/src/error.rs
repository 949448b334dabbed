use dvrp_core::DvrpError;
use dvrp_env::EnvError;
use dvrp_scenario::ScenarioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("episode configuration error: {0}")]
    Config(#[from] DvrpError),

    #[error("episode dataset error: {0}")]
    Dataset(#[from] ScenarioError),

    #[error("environment error: {0}")]
    Env(#[from] EnvError),
}

pub type RunnerResult<T> = Result<T, RunnerError>;
