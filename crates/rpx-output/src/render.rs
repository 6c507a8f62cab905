//! Rendering a decoded document into every requested output format.

use std::path::{Path, PathBuf};

use serde::Serialize;

use rpx_model::{DOCUMENT_ROOT, OutputFormat};

use crate::common::write_output;
use crate::error::{OutputError, Result};
use crate::json::encode_json;
use crate::xml::encode_xml;

/// Output target: a format and the file it goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub format: OutputFormat,
    pub path: PathBuf,
}

/// One encoded output held in memory until it is written.
#[derive(Debug, Clone)]
pub struct EncodedOutput {
    pub format: OutputFormat,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Encode `document` for every target.
///
/// Nothing is written here; a failure in any encoder returns before a single
/// file is touched.
pub fn render_outputs<T: Serialize>(
    document: &T,
    targets: &[OutputTarget],
) -> Result<Vec<EncodedOutput>> {
    let mut outputs = Vec::with_capacity(targets.len());
    for target in targets {
        let bytes = match target.format {
            OutputFormat::Xml => encode_xml(document, DOCUMENT_ROOT)?.into_bytes(),
            OutputFormat::Json => encode_json(document)?,
        };
        outputs.push(EncodedOutput {
            format: target.format,
            path: target.path.clone(),
            bytes,
        });
    }
    Ok(outputs)
}

/// Write every encoded output, stopping at the first failure.
pub fn write_outputs(outputs: &[EncodedOutput]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(outputs.len());
    for output in outputs {
        write_output(&output.path, &output.bytes)?;
        written.push(output.path.clone());
    }
    Ok(written)
}

/// Resolve the path configured for `format`.
pub fn target_for(
    format: OutputFormat,
    xml_path: Option<&Path>,
    json_path: Option<&Path>,
) -> Result<OutputTarget> {
    let path = match format {
        OutputFormat::Xml => xml_path,
        OutputFormat::Json => json_path,
    };
    path.map(|path| OutputTarget {
        format,
        path: path.to_path_buf(),
    })
    .ok_or(OutputError::MissingPath { format })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpx_model::NarrowInventoryDocument;

    #[test]
    fn renders_each_target_in_order() {
        let targets = vec![
            OutputTarget {
                format: OutputFormat::Xml,
                path: PathBuf::from("new.xml"),
            },
            OutputTarget {
                format: OutputFormat::Json,
                path: PathBuf::from("new.json"),
            },
        ];
        let outputs = render_outputs(&NarrowInventoryDocument::default(), &targets).unwrap();

        assert_eq!(outputs.len(), 2);
        assert!(outputs[0].bytes.starts_with(b"<?xml"));
        assert!(outputs[1].bytes.starts_with(b"{"));
    }

    #[test]
    fn missing_json_path_is_an_error() {
        let result = target_for(OutputFormat::Json, Some(Path::new("new.xml")), None);
        assert!(matches!(
            result,
            Err(OutputError::MissingPath {
                format: OutputFormat::Json
            })
        ));
    }
}
