//! End-to-end tests for the conversion pipeline.

use std::fs;
use std::path::Path;

use rpx_cli::pipeline::{JobConfig, run_job};
use rpx_ingest::decode_document;
use rpx_model::{CatalogDocument, InventoryDocument, JobKind, NarrowInventoryDocument};
use tempfile::TempDir;

const REFERENCE_CSV: &str = "\
10;5;Produce;12;Organic Apples
20;6;  Frozen Foods And Desserts  ;31;Premium Ice Cream Tubs And Cones
10;5;Produce;12;Organic Apples
";

const CATALOG_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DOCUMENT>
   <DCSS>
      <DCS dcs_code="10" sbs_no="1" d_name="" c_name="" s_name="FRUIT" d_long_name="" c_long_name="" s_long_name="Fruit" use_qty_decimals="0" tax_code="0" margin_type="1" margin_value="35" active="0" regional="0" ptrn_name="" doc_design=""/>
      <DCS dcs_code="20" sbs_no="1" d_name="x" c_name="x" s_name="" d_long_name="x" c_long_name="x" s_long_name="" use_qty_decimals="0" tax_code="1" margin_type="1" margin_value="40" active="0" regional="0" ptrn_name="" doc_design=""/>
      <DCS dcs_code="99" sbs_no="1" d_name="Old" c_name="Old" s_name="" d_long_name="Old" c_long_name="Old" s_long_name="" use_qty_decimals="0" tax_code="0" margin_type="0" margin_value="0" active="0" regional="0" ptrn_name="" doc_design=""/>
   </DCSS>
</DOCUMENT>
"#;

const INVENTORY_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DOCUMENT>
  <INVENTORYS>
    <INVENTORY>
      <INVN_STYLE style_sid="5001" style_code="TEE"/>
      <INVN item_sid="100200300" upc="0012345678905" use_qty_decimals="0" prod_cost="4.10" reclass_item_sid=""/>
      <INVN_SBS sbs_no="1" alu="ALU-77" dcs_code="10" description1="Crew Tee" description2="Navy" cost="4.10">
        <INVN_SBS_SUPPLS>
          <INVN_SBS_SUPPL udf_no="1" udf_value="Cotton"/>
        </INVN_SBS_SUPPLS>
        <INVN_SBS_VENDORS><INVN_SBS_VENDOR vend_code="ACME"/></INVN_SBS_VENDORS>
        <INVN_SBS_PRICES>
          <INVN_SBS_PRICE price_lvl="1" price="12.99" qty_req="0" season_code="" active_season="1"/>
        </INVN_SBS_PRICES>
        <INVN_SBS_QTYS>
          <INVN_SBS_QTY store_no="0" qty="14"/>
        </INVN_SBS_QTYS>
        <INVN_SBS_KITS came_from=""/>
        <LOTS><LOT lot_no="1"/></LOTS>
        <INVN_SBS_LTYS/>
      </INVN_SBS>
    </INVENTORY>
  </INVENTORYS>
</DOCUMENT>
"#;

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn read_catalog(path: &Path) -> CatalogDocument {
    let text = fs::read_to_string(path).unwrap();
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    decode_document(&text, path).unwrap()
}

#[test]
fn catalog_job_enriches_and_writes_new_xml() {
    let dir = workspace(&[("dcs.csv", REFERENCE_CSV), ("dcs.xml", CATALOG_XML)]);
    let result = run_job(&JobConfig::preset(JobKind::Catalog, dir.path())).unwrap();

    assert_eq!(result.records, 3);
    assert_eq!(result.reference_rows, Some(2));
    let stats = result.enrichment.unwrap();
    assert_eq!((stats.matched, stats.unmatched), (2, 1));

    let doc = read_catalog(&dir.path().join("new.xml"));
    let lines: Vec<String> = doc
        .entries()
        .iter()
        .map(|e| {
            format!(
                "{}|{}|{}|{}|{}|{}",
                e.dcs_code, e.d_name, e.d_long_name, e.c_name, e.c_long_name, e.active
            )
        })
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    10|Produce|Produce|Organic Apples|Organic Apples|1
    20|Frozen Foods And D|Frozen Foods And Desserts|Premium Ice Cream Tubs And Cones|Premium Ice Cream Tubs And Cones|1
    99|||||1
    ");

    let first = &doc.entries()[0];
    assert_eq!(first.s_name, "FRUIT");
    assert_eq!(first.margin_value, "35");
}

#[test]
fn inventory_job_writes_xml_and_newline_free_json() {
    let dir = workspace(&[("inventory.xml", INVENTORY_XML)]);
    let result = run_job(&JobConfig::preset(JobKind::Inventory, dir.path())).unwrap();

    assert_eq!(result.records, 1);
    assert_eq!(result.outputs.len(), 2);
    assert!(result.outputs.iter().all(|o| o.written));

    let original: InventoryDocument =
        decode_document(INVENTORY_XML, Path::new("inventory.xml")).unwrap();
    let xml_path = dir.path().join("new.xml");
    let round: InventoryDocument =
        decode_document(&fs::read_to_string(&xml_path).unwrap(), &xml_path).unwrap();
    assert_eq!(original, round);

    let json = fs::read(dir.path().join("new.json")).unwrap();
    assert!(!json.contains(&b'\n'));
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(
        value["INVENTORYS"]["INVENTORY"][0]["INVN_SBS"]["INVN_SBS_PRICES"]["INVN_SBS_PRICE"][0]
            ["@price"],
        "12.99"
    );
}

#[test]
fn narrow_job_keeps_identity_fields_only() {
    let dir = workspace(&[("inventory.xml", INVENTORY_XML)]);
    let result = run_job(&JobConfig::preset(JobKind::InventoryNarrow, dir.path())).unwrap();

    assert_eq!(result.outputs.len(), 1);
    assert!(!dir.path().join("new.json").exists());

    let xml_path = dir.path().join("new.xml");
    let text = fs::read_to_string(&xml_path).unwrap();
    assert!(!text.contains("INVN_STYLE"));
    assert!(!text.contains("cost="));
    assert!(!text.contains("INVN_SBS_PRICES"));

    let doc: NarrowInventoryDocument = decode_document(&text, &xml_path).unwrap();
    let record = &doc.records()[0];
    assert_eq!(record.item.item_sid, "100200300");
    assert_eq!(record.item.upc, "0012345678905");
    assert_eq!(record.subsidiary.sbs_no, "1");
    assert_eq!(record.subsidiary.alu, "ALU-77");
    assert_eq!(record.subsidiary.description1, "Crew Tee");
    assert_eq!(record.subsidiary.description2, "Navy");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = workspace(&[("inventory.xml", INVENTORY_XML)]);
    let mut config = JobConfig::preset(JobKind::Inventory, dir.path());
    config.dry_run = true;

    let result = run_job(&config).unwrap();

    assert!(result.outputs.iter().all(|o| !o.written && o.bytes > 0));
    assert!(!dir.path().join("new.xml").exists());
    assert!(!dir.path().join("new.json").exists());
}

#[test]
fn malformed_reference_row_aborts_without_output() {
    let dir = workspace(&[
        ("dcs.csv", "10;5;Produce;12;Organic Apples\n20;6;Dairy\n"),
        ("dcs.xml", CATALOG_XML),
    ]);
    let error = run_job(&JobConfig::preset(JobKind::Catalog, dir.path())).unwrap_err();

    assert!(format!("{error:#}").contains("expected 5 fields, found 3"));
    assert!(!dir.path().join("new.xml").exists());
}

#[test]
fn malformed_document_aborts_without_output() {
    let truncated = INVENTORY_XML.split("<INVN_SBS_QTYS>").next().unwrap();
    let dir = workspace(&[("inventory.xml", truncated)]);
    let result = run_job(&JobConfig::preset(JobKind::Inventory, dir.path()));

    assert!(result.is_err());
    assert!(!dir.path().join("new.xml").exists());
    assert!(!dir.path().join("new.json").exists());
}

#[test]
fn missing_input_is_reported() {
    let dir = workspace(&[("dcs.csv", REFERENCE_CSV)]);
    let error = run_job(&JobConfig::preset(JobKind::Catalog, dir.path())).unwrap_err();

    assert!(format!("{error:#}").contains("input file not found"));
    assert!(!dir.path().join("new.xml").exists());
}
