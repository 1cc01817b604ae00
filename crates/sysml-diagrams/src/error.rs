//! Error types for diagram output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing diagram files.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write diagram {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DiagramError>;
