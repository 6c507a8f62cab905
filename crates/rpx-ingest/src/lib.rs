//! Retail master-data ingestion.
//!
//! - **Reference table**: load the semicolon-delimited `dcs.csv` into a
//!   [`ReferenceTable`](rpx_model::ReferenceTable)
//! - **Documents**: read XML exports and decode them into the schema trees of
//!   `rpx-model`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rpx_ingest::{load_document, load_reference_table};
//! use rpx_model::CatalogDocument;
//!
//! let table = load_reference_table(Path::new("dcs.csv"))?;
//! let catalog: CatalogDocument = load_document(Path::new("dcs.xml"))?;
//! ```

mod document;
mod error;
mod reference;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reference Table ===
pub use reference::{REFERENCE_DELIMITER, load_reference_table, read_reference_table};

// === Documents ===
pub use document::{check_root_element, decode_document, load_document, read_document_text};
