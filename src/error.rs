//! Error types for unveil operations.

use thiserror::Error;

/// Errors that can occur while parsing reveal specs, covering, or fitting content.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid subslide range segment: {segment:?}")]
    Parse { segment: String },

    #[error("invalid visibility spec: {0}")]
    InvalidSpec(String),

    #[error("cover fill must be a concrete color, not `auto`")]
    AutoFill,

    #[error("layout error: {0}")]
    Layout(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
