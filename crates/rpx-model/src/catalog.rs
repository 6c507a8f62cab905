//! Department/class/subclass catalog document (`dcs.xml`).
//!
//! ```xml
//! <DOCUMENT>
//!    <DCSS>
//!       <DCS dcs_code="10" sbs_no="1" d_name="" ... active="0"/>
//!    </DCSS>
//! </DOCUMENT>
//! ```

use serde::{Deserialize, Serialize};

use crate::RecordCount;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    #[serde(rename = "DCSS")]
    pub dcss: CatalogEntries,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntries {
    #[serde(rename = "DCS")]
    pub entries: Vec<CatalogEntry>,
}

/// A single `DCS` element. Every field is an XML attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    #[serde(rename = "@dcs_code")]
    pub dcs_code: String,
    #[serde(rename = "@sbs_no")]
    pub sbs_no: String,
    /// Department short name (at most 18 bytes after enrichment).
    #[serde(rename = "@d_name")]
    pub d_name: String,
    /// Class short name.
    #[serde(rename = "@c_name")]
    pub c_name: String,
    #[serde(rename = "@s_name")]
    pub s_name: String,
    #[serde(rename = "@d_long_name")]
    pub d_long_name: String,
    #[serde(rename = "@c_long_name")]
    pub c_long_name: String,
    #[serde(rename = "@s_long_name")]
    pub s_long_name: String,
    #[serde(rename = "@use_qty_decimals")]
    pub use_qty_decimals: String,
    #[serde(rename = "@tax_code")]
    pub tax_code: String,
    #[serde(rename = "@margin_type")]
    pub margin_type: String,
    #[serde(rename = "@margin_value")]
    pub margin_value: String,
    #[serde(rename = "@active")]
    pub active: String,
    #[serde(rename = "@regional")]
    pub regional: String,
    #[serde(rename = "@ptrn_name")]
    pub ptrn_name: String,
    #[serde(rename = "@doc_design")]
    pub doc_design: String,
}

impl CatalogDocument {
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.dcss.entries
    }

    pub fn entries_mut(&mut self) -> &mut [CatalogEntry] {
        &mut self.dcss.entries
    }
}

impl RecordCount for CatalogDocument {
    fn record_count(&self) -> usize {
        self.dcss.entries.len()
    }
}
