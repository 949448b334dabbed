//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `DvrpError` as one
//! variant via `#[from]`, so configuration failures surface unchanged at
//! every layer.

use thiserror::Error;

/// The top-level error type for `dvrp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DvrpError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `dvrp-*` crates.
pub type DvrpResult<T> = Result<T, DvrpError>;
