use std::path::PathBuf;
use thiserror::Error;

/// Errors that can arise while dispatching commands or touching round logs.
#[derive(Debug, Error)]
pub enum GuessError {
    /// Bad, missing or malformed `--start` / `--total` value.
    #[error("{0}")]
    Usage(String),

    /// The round log requested by report mode could not be opened or read.
    #[error("round log not found: {}", path.display())]
    HistoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper around IO errors (log directory creation, file rewrite, console output).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around serde_json serialization errors.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
