use serde::{Deserialize, Serialize};

use crate::domain::a013_order::aggregate::NamedRef;
use crate::domain::a017_barcode_details::aggregate::{BarcodePurity, BarcodeSize};
use crate::domain::common::{lenient_f64, lenient_f64_opt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockStatus {
    Available,
    Reserved,
    Sold,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [StockStatus::Available, StockStatus::Reserved, StockStatus::Sold];

    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::Available => "AVAILABLE",
            StockStatus::Reserved => "RESERVED",
            StockStatus::Sold => "SOLD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Available => "Available",
            StockStatus::Reserved => "Reserved",
            StockStatus::Sold => "Sold",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarcodeRef {
    #[serde(default)]
    pub barcode: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialTypeRef {
    #[serde(default)]
    pub type_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: String,
    #[serde(default)]
    pub material_type_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub size_id: Option<String>,
    #[serde(default)]
    pub purity_id: Option<String>,
    #[serde(default)]
    pub pieces: i64,
    #[serde(with = "lenient_f64", default)]
    pub gross_weight: f64,
    #[serde(with = "lenient_f64", default)]
    pub stone_weight: f64,
    #[serde(with = "lenient_f64", default)]
    pub net_weight: f64,
    #[serde(with = "lenient_f64", default)]
    pub wastage_percent: f64,
    #[serde(with = "lenient_f64", default)]
    pub fine_weight: f64,
    #[serde(default)]
    pub huid: Option<String>,
    #[serde(with = "lenient_f64", default)]
    pub stone_cost: f64,
    #[serde(with = "lenient_f64_opt", default)]
    pub approx_sales_price: Option<f64>,
    #[serde(default)]
    pub status: Option<StockStatus>,
    #[serde(default)]
    pub sales_voucher_no: Option<String>,
    #[serde(default)]
    pub order_no: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub barcode_details: Option<BarcodeRef>,
    #[serde(default)]
    pub material_type: Option<MaterialTypeRef>,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub size: Option<BarcodeSize>,
    #[serde(default)]
    pub purity: Option<BarcodePurity>,
}

impl StockItem {
    /// Barcode from the nested details, falling back to the flat column.
    pub fn barcode_text(&self) -> String {
        self.barcode_details
            .as_ref()
            .map(|b| b.barcode.clone())
            .filter(|b| !b.is_empty())
            .or_else(|| self.barcode.clone())
            .unwrap_or_default()
    }
}

/// Body for stock create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItemPayload {
    pub material_type_id: String,
    pub category_id: String,
    pub size_id: String,
    pub purity_id: String,
    pub pieces: i64,
    pub gross_weight: f64,
    pub stone_weight: f64,
    pub net_weight: f64,
    pub wastage_percent: f64,
    pub fine_weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huid: Option<String>,
    pub stone_cost: f64,
    pub approx_sales_price: f64,
    pub status: StockStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_voucher_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_no: Option<String>,
    /// A new barcode creates its barcode details record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stock_row_with_nested_barcode() {
        let json = r#"{"id":"s1","pieces":2,"grossWeight":"12.000","stoneWeight":"0.500",
            "netWeight":"11.500","fineWeight":"10.534","approxSalesPrice":"85000",
            "status":"AVAILABLE","barcodeDetails":{"barcode":"BC0001"},
            "category":{"id":"c1","name":"Rings"},"purity":{"purityLabel":"22K"}}"#;
        let item: StockItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, Some(StockStatus::Available));
        assert_eq!(item.approx_sales_price, Some(85000.0));
        assert_eq!(item.barcode_text(), "BC0001");
        assert_eq!(item.category.unwrap().name, "Rings");
        assert_eq!(item.purity.unwrap().purity_label, "22K");
        assert!(item.size.is_none());
    }

    #[test]
    fn barcode_text_falls_back_to_flat_column() {
        let item = StockItem {
            barcode: Some("FLAT".into()),
            ..Default::default()
        };
        assert_eq!(item.barcode_text(), "FLAT");
    }
}
