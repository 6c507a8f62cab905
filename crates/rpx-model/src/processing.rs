use serde::{Deserialize, Serialize};

/// Default reference table file name.
pub const DEFAULT_REFERENCE_FILE: &str = "dcs.csv";
/// Default catalog input file name.
pub const DEFAULT_CATALOG_FILE: &str = "dcs.xml";
/// Default inventory input file name.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.xml";
/// Default XML output file name.
pub const DEFAULT_XML_OUTPUT: &str = "new.xml";
/// Default JSON output file name.
pub const DEFAULT_JSON_OUTPUT: &str = "new.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Xml,
    Json,
}

impl OutputFormat {
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Xml => "XML",
            OutputFormat::Json => "JSON",
        }
    }
}

/// The three conversion presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobKind {
    /// Enrich `dcs.xml` from `dcs.csv`.
    Catalog,
    /// Round-trip the full inventory schema to XML and JSON.
    Inventory,
    /// Project the inventory document onto its identity fields.
    InventoryNarrow,
}

impl JobKind {
    pub fn name(self) -> &'static str {
        match self {
            JobKind::Catalog => "catalog",
            JobKind::Inventory => "inventory",
            JobKind::InventoryNarrow => "inventory-narrow",
        }
    }

    pub fn default_formats(self) -> &'static [OutputFormat] {
        match self {
            JobKind::Inventory => &[OutputFormat::Xml, OutputFormat::Json],
            JobKind::Catalog | JobKind::InventoryNarrow => &[OutputFormat::Xml],
        }
    }

    pub fn default_input(self) -> &'static str {
        match self {
            JobKind::Catalog => DEFAULT_CATALOG_FILE,
            JobKind::Inventory | JobKind::InventoryNarrow => DEFAULT_INVENTORY_FILE,
        }
    }

    /// Whether the job joins against the reference table.
    pub fn uses_reference(self) -> bool {
        matches!(self, JobKind::Catalog)
    }
}
