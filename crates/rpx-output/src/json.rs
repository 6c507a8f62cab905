//! JSON output generation.
//!
//! The tree is pretty-printed and then every `\n` byte is removed. This is a
//! textual strip, not a re-serialization: the indentation between tokens
//! survives. Newlines inside string values are already escaped by the
//! serializer and are not affected.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::common::JSON_INDENT;
use crate::error::{OutputError, Result};

pub fn encode_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|source| OutputError::JsonEncode { source })?;
    strip_newlines(&mut buffer);
    Ok(buffer)
}

/// Remove every line feed byte in place.
pub fn strip_newlines(bytes: &mut Vec<u8>) {
    bytes.retain(|byte| *byte != b'\n');
}
