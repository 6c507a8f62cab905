//! XML output generation.

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::common::{XML_HEADER, XML_INDENT};
use crate::error::{OutputError, Result};

/// Serialize `value` as an indented XML document under `root`, prefixed with
/// [`XML_HEADER`].
pub fn encode_xml<T: Serialize>(value: &T, root: &str) -> Result<String> {
    let mut body = String::new();
    let mut serializer =
        Serializer::with_root(&mut body, Some(root)).map_err(|e| OutputError::XmlEncode {
            message: e.to_string(),
        })?;
    serializer.indent(' ', XML_INDENT);
    value
        .serialize(serializer)
        .map_err(|e| OutputError::XmlEncode {
            message: e.to_string(),
        })?;

    let mut output = String::with_capacity(XML_HEADER.len() + body.len());
    output.push_str(XML_HEADER);
    output.push_str(&body);
    Ok(output)
}
