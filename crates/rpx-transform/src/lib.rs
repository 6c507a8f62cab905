//! Retail master-data transformations.
//!
//! - **enrich**: join catalog entries against the reference table and derive
//!   their short/long display names

pub mod enrich;

pub use enrich::{
    ACTIVE_FLAG, EnrichmentStats, SHORT_NAME_MAX_LEN, enrich_catalog, enrich_entry,
    truncate_bytes,
};
