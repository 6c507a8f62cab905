//! Shared constants and file helpers for output generation.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{OutputError, Result};

/// XML declaration written ahead of every XML output.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Spaces per nesting level in XML output.
pub const XML_INDENT: usize = 3;

/// Indentation used for JSON before newlines are stripped.
pub const JSON_INDENT: &[u8] = b"   ";

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write a complete output file, replacing any existing content.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
