//! Graph-subsystem error type.

use thiserror::Error;

use rn_core::CoreError;

/// Errors produced by `rn-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    City(#[from] CoreError),

    #[error("road data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
