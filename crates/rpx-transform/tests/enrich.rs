//! Property tests for catalog enrichment.

use proptest::prelude::*;
use rpx_model::{CatalogDocument, CatalogEntries, CatalogEntry, ReferenceRecord, ReferenceTable};
use rpx_transform::{ACTIVE_FLAG, SHORT_NAME_MAX_LEN, enrich_catalog, enrich_entry};

fn reference(code: &str, department: &str, class: &str) -> ReferenceRecord {
    ReferenceRecord {
        code: code.to_string(),
        department_description: department.to_string(),
        class_description: class.to_string(),
        ..ReferenceRecord::default()
    }
}

proptest! {
    #[test]
    fn long_department_is_cut_to_eighteen_bytes(
        padding in " {0,3}",
        department in "[A-Za-z][A-Za-z ]{17,40}[A-Za-z]",
    ) {
        let mut entry = CatalogEntry::default();
        let raw = format!("{padding}{department}{padding}");
        enrich_entry(&mut entry, &reference("1", &raw, ""));

        prop_assert_eq!(&entry.d_name, &department[..SHORT_NAME_MAX_LEN]);
        prop_assert_eq!(&entry.d_long_name, &department);
    }

    #[test]
    fn class_short_name_never_truncated(
        department in "[A-Za-z ]{0,40}",
        class in "[A-Za-z][A-Za-z ]{20,40}[A-Za-z]",
    ) {
        let mut entry = CatalogEntry::default();
        enrich_entry(&mut entry, &reference("1", &department, &class));

        prop_assert!(entry.d_name.len() <= SHORT_NAME_MAX_LEN);
        prop_assert_eq!(&entry.c_name, &class);
        prop_assert_eq!(&entry.c_long_name, &class);
    }

    #[test]
    fn unknown_codes_blank_derived_names(code in "[0-9]{1,6}", active in "[01]?") {
        let table: ReferenceTable =
            [reference("known", "Produce", "Apples")].into_iter().collect();
        let mut document = CatalogDocument {
            dcss: CatalogEntries {
                entries: vec![CatalogEntry {
                    dcs_code: code,
                    d_name: "x".to_string(),
                    c_long_name: "y".to_string(),
                    active,
                    ..CatalogEntry::default()
                }],
            },
        };

        let stats = enrich_catalog(&mut document, &table);
        let entry = &document.entries()[0];

        prop_assert_eq!(stats.unmatched, 1);
        prop_assert!(entry.d_name.is_empty());
        prop_assert!(entry.d_long_name.is_empty());
        prop_assert!(entry.c_name.is_empty());
        prop_assert!(entry.c_long_name.is_empty());
        prop_assert_eq!(entry.active.as_str(), ACTIVE_FLAG);
    }
}

#[test]
fn every_entry_is_kept_in_order() {
    let table: ReferenceTable = [
        reference("10", "Produce", "Organic Apples"),
        reference("20", "Dairy", "Cheese"),
    ]
    .into_iter()
    .collect();
    let codes = ["20", "30", "10"];
    let mut document = CatalogDocument {
        dcss: CatalogEntries {
            entries: codes
                .iter()
                .map(|code| CatalogEntry {
                    dcs_code: (*code).to_string(),
                    ..CatalogEntry::default()
                })
                .collect(),
        },
    };

    let stats = enrich_catalog(&mut document, &table);

    assert_eq!(stats.entries, 3);
    assert_eq!(stats.matched, 2);
    let names: Vec<&str> = document.entries().iter().map(|e| e.d_name.as_str()).collect();
    assert_eq!(names, vec!["Dairy", "", "Produce"]);
    assert!(document.entries().iter().all(|e| e.active == ACTIVE_FLAG));
}
