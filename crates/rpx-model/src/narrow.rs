//! Identity-only view of the inventory document.
//!
//! Shares the element path of [`crate::InventoryDocument`] but declares just
//! the identifying attributes. The decoder skips everything else, so styles,
//! prices, quantities and the remaining `INVN_SBS` attributes are never
//! materialized and never re-emitted.

use serde::{Deserialize, Serialize};

use crate::RecordCount;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowInventoryDocument {
    #[serde(rename = "INVENTORYS")]
    pub inventorys: NarrowInventoryList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowInventoryList {
    #[serde(rename = "INVENTORY")]
    pub records: Vec<NarrowInventoryRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowInventoryRecord {
    #[serde(rename = "INVN")]
    pub item: NarrowItem,
    #[serde(rename = "INVN_SBS")]
    pub subsidiary: NarrowSubsidiary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowItem {
    /// Item id.
    #[serde(rename = "@item_sid")]
    pub item_sid: String,
    /// Barcode.
    #[serde(rename = "@upc")]
    pub upc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowSubsidiary {
    /// Location (subsidiary) code.
    #[serde(rename = "@sbs_no")]
    pub sbs_no: String,
    /// Alternate lookup / vendor reference code.
    #[serde(rename = "@alu")]
    pub alu: String,
    #[serde(rename = "@description1")]
    pub description1: String,
    #[serde(rename = "@description2")]
    pub description2: String,
}

impl NarrowInventoryDocument {
    pub fn records(&self) -> &[NarrowInventoryRecord] {
        &self.inventorys.records
    }
}

impl RecordCount for NarrowInventoryDocument {
    fn record_count(&self) -> usize {
        self.inventorys.records.len()
    }
}
