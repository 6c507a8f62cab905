//! Whole-document XML decoding into the fixed schema trees.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;
use tracing::debug;

use rpx_model::DOCUMENT_ROOT;

use crate::error::{IngestError, Result};

/// Read a document file into memory as UTF-8 text, dropping a leading BOM.
pub fn read_document_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Verify that the first element of `text` is `<expected>`.
///
/// The serde decoder ignores the root element's name, so a document with the
/// right shape under a different root would otherwise be accepted.
pub fn check_root_element(text: &str, path: &Path, expected: &str) -> Result<()> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(element) | Event::Empty(element)) => {
                let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                if name == expected {
                    return Ok(());
                }
                return Err(IngestError::UnexpectedRoot {
                    path: path.to_path_buf(),
                    expected: expected.to_string(),
                    found: format!("<{name}>"),
                });
            }
            Ok(Event::Eof) => {
                return Err(IngestError::UnexpectedRoot {
                    path: path.to_path_buf(),
                    expected: expected.to_string(),
                    found: "no element".to_string(),
                });
            }
            Ok(_) => continue,
            Err(e) => {
                return Err(IngestError::XmlParse {
                    path: path.to_path_buf(),
                    message: format!("{e} at byte {}", reader.error_position()),
                });
            }
        }
    }
}

/// Decode `text` into the schema tree `T`.
///
/// Elements and attributes that `T` does not declare are skipped.
pub fn decode_document<T: DeserializeOwned>(text: &str, path: &Path) -> Result<T> {
    check_root_element(text, path, DOCUMENT_ROOT)?;
    quick_xml::de::from_str(text).map_err(|e| IngestError::XmlDecode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read and decode a document file.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_document_text(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read document");
    decode_document(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpx_model::{CatalogDocument, NarrowInventoryDocument};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DOCUMENT>
   <DCSS>
      <DCS dcs_code="10" sbs_no="1" d_name="OLD" active="0"/>
      <DCS dcs_code="20" sbs_no="1"></DCS>
   </DCSS>
</DOCUMENT>
"#;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_decode_catalog() {
        let doc: CatalogDocument = decode_document(CATALOG, Path::new("dcs.xml")).unwrap();

        assert_eq!(doc.entries().len(), 2);
        assert_eq!(doc.entries()[0].dcs_code, "10");
        assert_eq!(doc.entries()[0].d_name, "OLD");
        assert_eq!(doc.entries()[1].dcs_code, "20");
        assert!(doc.entries()[1].active.is_empty());
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let text = CATALOG.replace("DOCUMENT", "CATALOG");
        let result: Result<CatalogDocument> = decode_document(&text, Path::new("dcs.xml"));
        match result {
            Err(IngestError::UnexpectedRoot { found, .. }) => assert_eq!(found, "<CATALOG>"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let result: Result<CatalogDocument> = decode_document("", Path::new("dcs.xml"));
        assert!(matches!(result, Err(IngestError::UnexpectedRoot { .. })));
    }

    #[test]
    fn test_malformed_xml_is_rejected() {
        let text = "<DOCUMENT><DCSS><DCS dcs_code=\"10\"></DCSS></DOCUMENT>";
        let result: Result<CatalogDocument> = decode_document(text, Path::new("dcs.xml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_undeclared_fields_are_skipped() {
        let text = r#"<DOCUMENT>
  <INVENTORYS>
    <INVENTORY>
      <INVN_STYLE style_sid="1" style_code="S"/>
      <INVN item_sid="100" upc="0001" prod_cost="2.50"/>
      <INVN_SBS sbs_no="1" alu="A-1" cost="9" description1="Shirt" description2="Blue">
        <INVN_SBS_PRICES><INVN_SBS_PRICE price_lvl="1" price="19.99"/></INVN_SBS_PRICES>
      </INVN_SBS>
    </INVENTORY>
  </INVENTORYS>
</DOCUMENT>"#;
        let doc: NarrowInventoryDocument =
            decode_document(text, Path::new("inventory.xml")).unwrap();

        let record = &doc.records()[0];
        assert_eq!(record.item.item_sid, "100");
        assert_eq!(record.item.upc, "0001");
        assert_eq!(record.subsidiary.alu, "A-1");
        assert_eq!(record.subsidiary.description2, "Blue");
    }

    #[test]
    fn test_load_document_strips_bom() {
        let mut content = "\u{feff}".as_bytes().to_vec();
        content.extend_from_slice(CATALOG.as_bytes());
        let file = create_temp_file(&content);

        let doc: CatalogDocument = load_document(file.path()).unwrap();
        assert_eq!(doc.entries().len(), 2);
    }

    #[test]
    fn test_load_document_missing_file() {
        let result: Result<CatalogDocument> = load_document(Path::new("/nonexistent/dcs.xml"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_document_invalid_utf8() {
        let file = create_temp_file(&[0x3c, 0xff, 0xfe, 0x3e]);
        let result: Result<CatalogDocument> = load_document(file.path());
        assert!(matches!(result, Err(IngestError::InvalidUtf8 { .. })));
    }
}
