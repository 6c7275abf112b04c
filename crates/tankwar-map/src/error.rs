use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("map {0} is empty")]
    Empty(String),

    #[error("map {name} has an invalid header: {source}")]
    InvalidHeader {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("map {0} has no grid rows")]
    NoRows(String),

    #[error("map {0} has no player tank")]
    NoPlayerTank(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
