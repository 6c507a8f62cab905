//! Error types for reference and document ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("file is not valid UTF-8: {path}: {message}")]
    InvalidUtf8 { path: PathBuf, message: String },

    // === Reference Table Errors ===
    /// A reference row is malformed (wrong column count, bad quoting).
    #[error("malformed reference row at {path}:{line}: {message}")]
    ReferenceRow {
        path: PathBuf,
        line: u64,
        message: String,
    },

    // === Document Errors ===
    /// Document is not well-formed XML.
    #[error("failed to parse XML {path}: {message}")]
    XmlParse { path: PathBuf, message: String },

    /// Document root element is not the expected one.
    #[error("expected root element <{expected}> in {path}, found {found}")]
    UnexpectedRoot {
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// Document does not conform to the declared schema.
    #[error("failed to decode {path}: {message}")]
    XmlDecode { path: PathBuf, message: String },
}

impl IngestError {
    /// Map an I/O error on `path` to `FileNotFound` or `FileRead`.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
