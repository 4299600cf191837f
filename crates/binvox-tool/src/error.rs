//! Errors surfaced by the `binvox` command.

use std::path::PathBuf;

use binvox_format::BinvoxError;

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid binvox file: {source}", path.display())]
    Binvox {
        path: PathBuf,
        #[source]
        source: BinvoxError,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode JSON: {0}")]
    JsonEncode(#[source] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("could not determine OS configuration directory")]
    NoConfigDir,
}
