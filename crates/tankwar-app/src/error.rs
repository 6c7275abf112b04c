//! Driver errors. Every one of them ends the process.

use std::path::PathBuf;

use thiserror::Error;

use tankwar_map::MapError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("no .{extension} maps found in {dir}")]
    NoMaps { dir: PathBuf, extension: String },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("game loop thread panicked")]
    LoopPanicked,
}

pub type Result<T> = std::result::Result<T, AppError>;
