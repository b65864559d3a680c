// crates/dinerdb-core/src/error.rs

use thiserror::Error;

/// Errors raised by the loader and configuration surfaces.
///
/// Store operations never return this type: rejected input, resolved
/// conflicts and lookup misses are signalled through `bool` and `Option`.
#[derive(Debug, Error)]
pub enum DinerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A row handed over by the loader could not be parsed.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, DinerError>;
