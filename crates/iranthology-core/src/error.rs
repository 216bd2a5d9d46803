//! Error types for iranthology-core.
//!
//! One error enum covers the whole loading path: file access, JSONL and XML
//! parsing, and registry operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or registering a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// I/O failure while reading a data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSONL record failed to deserialize
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number within the source file
        line: usize,
        /// Underlying deserializer message
        message: String,
    },

    /// XML topic file is malformed
    #[error("XML error: {0}")]
    Xml(String),

    /// A referenced data file does not exist at its resolved location
    #[error("missing data file: {}", .0.display())]
    MissingFile(PathBuf),

    /// A dataset name is already present in the registry
    #[error("dataset already registered: {0}")]
    DuplicateDataset(String),

    /// A dataset name is not present in the registry
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
}

impl From<quick_xml::Error> for DatasetError {
    fn from(err: quick_xml::Error) -> Self {
        DatasetError::Xml(err.to_string())
    }
}
