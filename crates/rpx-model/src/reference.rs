//! Department/class reference table keyed by DCS code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of the semicolon-delimited reference file.
///
/// Column order in the source file is: code, department id, department
/// description, class id, class description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub code: String,
    pub department_id: String,
    pub department_description: String,
    pub class_id: String,
    pub class_description: String,
}

impl ReferenceRecord {
    /// Number of columns a reference row must carry.
    pub const COLUMN_COUNT: usize = 5;
}

/// Lookup table from DCS code to its reference record.
///
/// Insertion follows a last-write-wins policy: a later row with a code that is
/// already present replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    records: BTreeMap<String, ReferenceRecord>,
    overwritten: usize,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own code, returning the record it replaced.
    pub fn insert(&mut self, record: ReferenceRecord) -> Option<ReferenceRecord> {
        let previous = self.records.insert(record.code.clone(), record);
        if previous.is_some() {
            self.overwritten += 1;
        }
        previous
    }

    pub fn get(&self, code: &str) -> Option<&ReferenceRecord> {
        self.records.get(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// How many inserts replaced an existing code.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}

impl FromIterator<ReferenceRecord> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = ReferenceRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}
