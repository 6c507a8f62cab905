//! Full inventory schema (`inventory.xml`).
//!
//! Every element and attribute the export carries is declared here so that a
//! decode followed by an encode reproduces the document field for field.
//! Attribute values are kept as the raw strings found in the source.

use serde::{Deserialize, Serialize};

use crate::RecordCount;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryDocument {
    #[serde(rename = "INVENTORYS")]
    pub inventorys: InventoryList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryList {
    #[serde(rename = "INVENTORY")]
    pub records: Vec<InventoryRecord>,
}

/// One `INVENTORY` element: style, item, and per-subsidiary detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryRecord {
    #[serde(rename = "INVN_STYLE")]
    pub style: InventoryStyle,
    #[serde(rename = "INVN")]
    pub item: InventoryItem,
    #[serde(rename = "INVN_SBS")]
    pub subsidiary: InventorySubsidiary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryStyle {
    #[serde(rename = "@style_sid")]
    pub style_sid: String,
    #[serde(rename = "@style_code")]
    pub style_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    #[serde(rename = "@item_sid")]
    pub item_sid: String,
    #[serde(rename = "@upc")]
    pub upc: String,
    #[serde(rename = "@use_qty_decimals")]
    pub use_qty_decimals: String,
    #[serde(rename = "@prod_cost")]
    pub prod_cost: String,
    #[serde(rename = "@reclass_item_sid")]
    pub reclass_item_sid: String,
}

/// The `INVN_SBS` element: pricing, quantities, dates and descriptions of an
/// item within one subsidiary, plus its nested collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySubsidiary {
    #[serde(rename = "@sbs_no")]
    pub sbs_no: String,
    #[serde(rename = "@alu")]
    pub alu: String,
    #[serde(rename = "@dcs_code")]
    pub dcs_code: String,
    #[serde(rename = "@vend_code")]
    pub vend_code: String,
    #[serde(rename = "@scale_no")]
    pub scale_no: String,
    #[serde(rename = "@description1")]
    pub description1: String,
    #[serde(rename = "@description2")]
    pub description2: String,
    #[serde(rename = "@description3")]
    pub description3: String,
    #[serde(rename = "@description4")]
    pub description4: String,
    #[serde(rename = "@attr")]
    pub attr: String,
    #[serde(rename = "@siz")]
    pub siz: String,
    #[serde(rename = "@cost")]
    pub cost: String,
    #[serde(rename = "@spif")]
    pub spif: String,
    #[serde(rename = "@fc_cost")]
    pub fc_cost: String,
    #[serde(rename = "@fst_rcvd_date")]
    pub fst_rcvd_date: String,
    #[serde(rename = "@lst_rcvd_date")]
    pub lst_rcvd_date: String,
    #[serde(rename = "@lst_sold_date")]
    pub lst_sold_date: String,
    #[serde(rename = "@marked_date")]
    pub marked_date: String,
    #[serde(rename = "@discont_date")]
    pub discont_date: String,
    #[serde(rename = "@created_date")]
    pub created_date: String,
    #[serde(rename = "@modified_date")]
    pub modified_date: String,
    #[serde(rename = "@tax_code")]
    pub tax_code: String,
    #[serde(rename = "@comm_code")]
    pub comm_code: String,
    #[serde(rename = "@sched_no")]
    pub sched_no: String,
    #[serde(rename = "@fst_price")]
    pub fst_price: String,
    #[serde(rename = "@markdown_price")]
    pub markdown_price: String,
    #[serde(rename = "@qty_per_case")]
    pub qty_per_case: String,
    #[serde(rename = "@lst_rcvd_cost")]
    pub lst_rcvd_cost: String,
    #[serde(rename = "@flag")]
    pub flag: String,
    #[serde(rename = "@ext_flag")]
    pub ext_flag: String,
    #[serde(rename = "@edi_flag")]
    pub edi_flag: String,
    #[serde(rename = "@kit_type")]
    pub kit_type: String,
    #[serde(rename = "@max_disc_perc1")]
    pub max_disc_perc1: String,
    #[serde(rename = "@max_disc_perc2")]
    pub max_disc_perc2: String,
    #[serde(rename = "@min_ord_qty")]
    pub min_ord_qty: String,
    #[serde(rename = "@vend_lead_time")]
    pub vend_lead_time: String,
    #[serde(rename = "@vend_list_cost")]
    pub vend_list_cost: String,
    #[serde(rename = "@trade_disc_perc")]
    pub trade_disc_perc: String,
    #[serde(rename = "@udf1_date")]
    pub udf1_date: String,
    #[serde(rename = "@udf2_value")]
    pub udf2_value: String,
    #[serde(rename = "@unorderable")]
    pub unorderable: String,
    #[serde(rename = "@print_tag")]
    pub print_tag: String,
    #[serde(rename = "@active")]
    pub active: String,
    #[serde(rename = "@item_no")]
    pub item_no: String,
    #[serde(rename = "@cms")]
    pub cms: String,
    #[serde(rename = "@cms_post_date")]
    pub cms_post_date: String,
    #[serde(rename = "@eci_flag")]
    pub eci_flag: String,
    #[serde(rename = "@regional")]
    pub regional: String,
    #[serde(rename = "@gift_flag")]
    pub gift_flag: String,
    #[serde(rename = "@item_state")]
    pub item_state: String,
    #[serde(rename = "@orderable_date")]
    pub orderable_date: String,
    #[serde(rename = "@sellable_date")]
    pub sellable_date: String,
    #[serde(rename = "@long_description")]
    pub long_description: String,
    #[serde(rename = "@non_return_flag")]
    pub non_return_flag: String,
    #[serde(rename = "@ship_weight1")]
    pub ship_weight1: String,
    #[serde(rename = "@ship_weight2")]
    pub ship_weight2: String,
    #[serde(rename = "@oversized_item")]
    pub oversized_item: String,
    #[serde(rename = "@text1")]
    pub text1: String,
    #[serde(rename = "@text2")]
    pub text2: String,
    #[serde(rename = "@text3")]
    pub text3: String,
    #[serde(rename = "@text4")]
    pub text4: String,
    #[serde(rename = "@text5")]
    pub text5: String,
    #[serde(rename = "@text6")]
    pub text6: String,
    #[serde(rename = "@text7")]
    pub text7: String,
    #[serde(rename = "@text8")]
    pub text8: String,
    #[serde(rename = "@text9")]
    pub text9: String,
    #[serde(rename = "@text10")]
    pub text10: String,
    #[serde(rename = "@height")]
    pub height: String,
    #[serde(rename = "@length")]
    pub length: String,
    #[serde(rename = "@width")]
    pub width: String,
    #[serde(rename = "@weight_unit")]
    pub weight_unit: String,
    #[serde(rename = "@dim_unit")]
    pub dim_unit: String,
    #[serde(rename = "@subloc_flag")]
    pub subloc_flag: String,
    #[serde(rename = "@lty_price_in_points")]
    pub lty_price_in_points: String,
    #[serde(rename = "@lty_points_earned")]
    pub lty_points_earned: String,
    #[serde(rename = "@force_orig_tax")]
    pub force_orig_tax: String,
    #[serde(rename = "@prod_cost")]
    pub prod_cost: String,
    #[serde(rename = "@local_upc")]
    pub local_upc: String,
    #[serde(rename = "@zero_price_lock")]
    pub zero_price_lock: String,
    #[serde(rename = "@currency_name")]
    pub currency_name: String,
    #[serde(rename = "@createdby_sbs_no")]
    pub createdby_sbs_no: String,
    #[serde(rename = "@createdby_empl_name")]
    pub createdby_empl_name: String,
    #[serde(rename = "@modifiedby_sbs_no")]
    pub modifiedby_sbs_no: String,
    #[serde(rename = "@modifiedby_empl_name")]
    pub modifiedby_empl_name: String,
    #[serde(rename = "@range_name")]
    pub range_name: String,
    #[serde(rename = "@keyitem_group_name")]
    pub keyitem_group_name: String,
    #[serde(rename = "@doc_design")]
    pub doc_design: String,
    #[serde(rename = "@ship_method_name")]
    pub ship_method_name: String,
    #[serde(rename = "INVN_SBS_SUPPLS")]
    pub suppls: SupplementList,
    #[serde(rename = "INVN_SBS_VENDORS")]
    pub vendors: ElementText,
    #[serde(rename = "INVN_SBS_PRICES")]
    pub prices: PriceList,
    #[serde(rename = "INVN_SBS_QTYS")]
    pub qtys: QuantityList,
    #[serde(rename = "INVN_SBS_KITS")]
    pub kits: KitInfo,
    #[serde(rename = "LOTS")]
    pub lots: ElementText,
    #[serde(rename = "INVN_SBS_LTYS")]
    pub ltys: ElementText,
}

/// Character data of an element whose children are not part of the schema.
///
/// Nested elements such as `INVN_SBS_VENDOR` or `LOT` are skipped on decode;
/// only the element's own text is kept and re-emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementText {
    #[serde(rename = "$text", default)]
    pub text: String,
}

impl ElementText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplementList {
    #[serde(rename = "INVN_SBS_SUPPL")]
    pub entries: Vec<Supplement>,
}

/// User-defined field value attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplement {
    #[serde(rename = "@udf_no")]
    pub udf_no: String,
    #[serde(rename = "@udf_value")]
    pub udf_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceList {
    #[serde(rename = "INVN_SBS_PRICE")]
    pub entries: Vec<PriceTier>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTier {
    #[serde(rename = "@price_lvl")]
    pub price_lvl: String,
    #[serde(rename = "@price")]
    pub price: String,
    #[serde(rename = "@qty_req")]
    pub qty_req: String,
    #[serde(rename = "@season_code")]
    pub season_code: String,
    #[serde(rename = "@active_season")]
    pub active_season: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantityList {
    #[serde(rename = "INVN_SBS_QTY")]
    pub entries: Vec<StoreQuantity>,
}

/// Per-store quantity counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreQuantity {
    #[serde(rename = "@store_no")]
    pub store_no: String,
    #[serde(rename = "@qty")]
    pub qty: String,
    #[serde(rename = "@min_qty")]
    pub min_qty: String,
    #[serde(rename = "@max_qty")]
    pub max_qty: String,
    #[serde(rename = "@transfer_in_qty")]
    pub transfer_in_qty: String,
    #[serde(rename = "@transfer_out_qty")]
    pub transfer_out_qty: String,
    #[serde(rename = "@sold_qty")]
    pub sold_qty: String,
    #[serde(rename = "@rcvd_qty")]
    pub rcvd_qty: String,
    #[serde(rename = "@onorder_qty")]
    pub onorder_qty: String,
    #[serde(rename = "@to_in_ord_qty")]
    pub to_in_ord_qty: String,
    #[serde(rename = "@to_in_sent_qty")]
    pub to_in_sent_qty: String,
    #[serde(rename = "@to_out_ord_qty")]
    pub to_out_ord_qty: String,
    #[serde(rename = "@to_out_sent_qty")]
    pub to_out_sent_qty: String,
    #[serde(rename = "@po_ord_qty")]
    pub po_ord_qty: String,
    #[serde(rename = "@po_rcvd_qty")]
    pub po_rcvd_qty: String,
    #[serde(rename = "@so_ord_qty")]
    pub so_ord_qty: String,
    #[serde(rename = "@so_sent_qty")]
    pub so_sent_qty: String,
    #[serde(rename = "@asn_in_transit_qty")]
    pub asn_in_transit_qty: String,
    #[serde(rename = "@lst_oh_qty_date")]
    pub lst_oh_qty_date: String,
    #[serde(rename = "@docs_in_use")]
    pub docs_in_use: String,
    #[serde(rename = "@pend_vou_in")]
    pub pend_vou_in: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitInfo {
    #[serde(rename = "@came_from")]
    pub came_from: String,
}

impl InventoryDocument {
    pub fn records(&self) -> &[InventoryRecord] {
        &self.inventorys.records
    }
}

impl RecordCount for InventoryDocument {
    fn record_count(&self) -> usize {
        self.inventorys.records.len()
    }
}
