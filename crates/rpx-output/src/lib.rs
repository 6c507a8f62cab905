//! Output generation for retail master-data documents.
//!
//! - **XML**: header, `DOCUMENT` root, three-space indentation
//! - **JSON**: pretty-printed tree with line feeds stripped

mod common;
mod error;
mod json;
mod render;
mod xml;

pub use common::{JSON_INDENT, XML_HEADER, XML_INDENT, ensure_parent_dir, write_output};
pub use error::{OutputError, Result};
pub use json::{encode_json, strip_newlines};
pub use render::{EncodedOutput, OutputTarget, render_outputs, target_for, write_outputs};
pub use xml::encode_xml;
