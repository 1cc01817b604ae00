//! Error types for model ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading model documents.
///
/// Any of these aborts the load; no partial model is returned.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("model directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Document Errors ===
    /// File is not valid YAML.
    #[error("failed to parse YAML {path}: {source}")]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Document root is not a mapping of category names to lists.
    #[error("unexpected document format in {path}: {reason}")]
    DocumentFormat { path: PathBuf, reason: String },

    /// A category list holds a record that is not an element.
    #[error("invalid {category} entry in {path}: {source}")]
    ElementDecode {
        path: PathBuf,
        category: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
