//! Core error type.

use thiserror::Error;

/// Errors produced by `rn-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("city record parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
