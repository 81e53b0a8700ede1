//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface configuration problems.

use thiserror::Error;

use crate::Location;

/// The error type for `bf-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid location {0}")]
    InvalidLocation(Location),
}

/// Shorthand result type for `bf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
