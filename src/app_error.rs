//! Errors raised by the binary around the engine: CLI, script loading, terminal I/O

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read script '{}': {source}", path.display())]
    ScriptRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("script line {line}: {source}")]
    ScriptParse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("cannot open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
