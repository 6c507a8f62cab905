//! Catalog enrichment from the department/class reference table.

use tracing::{debug, warn};

use rpx_model::{CatalogDocument, CatalogEntry, ReferenceRecord, ReferenceTable};

/// Maximum byte length of the department and class short names.
pub const SHORT_NAME_MAX_LEN: usize = 18;

/// Value written to every entry's `active` attribute.
pub const ACTIVE_FLAG: &str = "1";

/// Counts produced by one enrichment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    pub entries: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Cut `value` to at most `max_len` bytes.
///
/// When the cut would split a multi-byte character it moves back to the
/// previous character boundary.
pub fn truncate_bytes(value: &str, max_len: usize) -> &str {
    if value.len() <= max_len {
        return value;
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Rewrite the derived display fields of one entry from `record`.
///
/// - `d_name`: trimmed department description, truncated to
///   [`SHORT_NAME_MAX_LEN`]
/// - `d_long_name`: trimmed department description
/// - `c_name`: trimmed class description, truncated only when the department
///   short name is longer than [`SHORT_NAME_MAX_LEN`]
/// - `c_long_name`: trimmed class description
/// - `active`: [`ACTIVE_FLAG`]
///
/// The `c_name` rule keys on the department short name, which is never longer
/// than the limit once truncated, so class short names are kept whole. Existing
/// exports depend on that output.
pub fn enrich_entry(entry: &mut CatalogEntry, record: &ReferenceRecord) {
    let department = record.department_description.trim();
    entry.d_name = truncate_bytes(department, SHORT_NAME_MAX_LEN).to_string();
    entry.d_long_name = department.to_string();

    let class = record.class_description.trim();
    entry.c_name = if entry.d_name.len() > SHORT_NAME_MAX_LEN {
        truncate_bytes(class, SHORT_NAME_MAX_LEN).to_string()
    } else {
        class.to_string()
    };
    entry.c_long_name = class.to_string();

    entry.active = ACTIVE_FLAG.to_string();
}

/// Enrich every entry of `document` in place.
///
/// Entries whose code is missing from `table` are kept; they are enriched from
/// an empty record, which blanks the four derived names.
pub fn enrich_catalog(document: &mut CatalogDocument, table: &ReferenceTable) -> EnrichmentStats {
    let mut stats = EnrichmentStats::default();
    let empty = ReferenceRecord::default();

    for entry in document.entries_mut() {
        stats.entries += 1;
        let record = match table.get(&entry.dcs_code) {
            Some(record) => {
                stats.matched += 1;
                record
            }
            None => {
                stats.unmatched += 1;
                warn!(dcs_code = %entry.dcs_code, "no reference row for code");
                &empty
            }
        };
        enrich_entry(entry, record);
        debug!(
            dcs_code = %entry.dcs_code,
            d_name = %entry.d_name,
            c_name = %entry.c_name,
            "enriched entry"
        );
    }

    stats
}
