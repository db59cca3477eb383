use std::path::PathBuf;

use thiserror::Error;

use crate::emotion::Dimension;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{dimension} must be finite, got {value}")]
    NonFinite { dimension: Dimension, value: f64 },

    #[error("unknown emotion '{0}'")]
    UnknownEmotion(String),

    #[error("invalid classifier config: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    #[error("failed to read config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse classifier config")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
