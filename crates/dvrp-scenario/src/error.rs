use dvrp_core::DvrpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] DvrpError),

    #[error("{what} is {got}, expected {expected}")]
    ShapeMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("corrupt dataset: {0}")]
    Corrupt(String),

    #[error("dataset CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
