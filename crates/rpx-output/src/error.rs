use std::path::PathBuf;

use thiserror::Error;

use rpx_model::OutputFormat;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to encode XML: {message}")]
    XmlEncode { message: String },

    #[error("failed to encode JSON: {source}")]
    JsonEncode {
        #[source]
        source: serde_json::Error,
    },

    #[error("no output path configured for {}", format.label())]
    MissingPath { format: OutputFormat },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
