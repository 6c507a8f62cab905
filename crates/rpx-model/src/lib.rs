//! Retail master-data schema definitions.
//!
//! One plain struct per nesting level of each document. The structs carry
//! `serde` attributes in the quick-xml convention: `@name` fields are XML
//! attributes, other fields are child elements.

pub mod catalog;
pub mod inventory;
pub mod narrow;
pub mod processing;
pub mod reference;

pub use catalog::{CatalogDocument, CatalogEntries, CatalogEntry};
pub use inventory::{
    ElementText, InventoryDocument, InventoryItem, InventoryList, InventoryRecord, InventoryStyle,
    InventorySubsidiary, KitInfo, PriceList, PriceTier, QuantityList, StoreQuantity, Supplement,
    SupplementList,
};
pub use narrow::{
    NarrowInventoryDocument, NarrowInventoryList, NarrowInventoryRecord, NarrowItem,
    NarrowSubsidiary,
};
pub use processing::{
    DEFAULT_CATALOG_FILE, DEFAULT_INVENTORY_FILE, DEFAULT_JSON_OUTPUT, DEFAULT_REFERENCE_FILE,
    DEFAULT_XML_OUTPUT, JobKind, OutputFormat,
};
pub use reference::{ReferenceRecord, ReferenceTable};

/// Root element shared by every document.
pub const DOCUMENT_ROOT: &str = "DOCUMENT";

/// Number of top-level records held by a decoded document.
pub trait RecordCount {
    fn record_count(&self) -> usize;
}
