use serde::{Deserialize, Serialize};

use crate::domain::a013_order::aggregate::NamedRef;
use crate::domain::common::lenient_f64;

/// Customer as embedded in a sale, with the fields GST returns need.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCustomer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gst_no: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    #[serde(default)]
    pub sale_no: String,
    #[serde(default)]
    pub sale_date: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub salesman_id: Option<String>,
    #[serde(with = "lenient_f64", default)]
    pub total_gross_wt: f64,
    #[serde(with = "lenient_f64", default)]
    pub total_net_wt: f64,
    #[serde(with = "lenient_f64", default)]
    pub total_fine_wt: f64,
    #[serde(with = "lenient_f64", default)]
    pub stone_amount: f64,
    #[serde(with = "lenient_f64", default)]
    pub making_amount: f64,
    #[serde(with = "lenient_f64", default)]
    pub wastage_amount: f64,
    #[serde(with = "lenient_f64", default)]
    pub sub_total: f64,
    #[serde(with = "lenient_f64", default)]
    pub total_tax: f64,
    #[serde(with = "lenient_f64", default)]
    pub round_off: f64,
    #[serde(with = "lenient_f64", default)]
    pub grand_total: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub customer: Option<SaleCustomer>,
    #[serde(default)]
    pub salesman: Option<NamedRef>,
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

/// One invoice line as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Sent as `null` when the category has no HSN code.
    #[serde(default)]
    pub hsn_id: Option<String>,
    #[serde(default)]
    pub pieces: i64,
    #[serde(with = "lenient_f64", default)]
    pub gross_weight: f64,
    #[serde(with = "lenient_f64", default)]
    pub net_weight: f64,
    #[serde(with = "lenient_f64", default)]
    pub fine_weight: f64,
    #[serde(with = "lenient_f64", default)]
    pub metal_rate: f64,
    #[serde(with = "lenient_f64", default)]
    pub metal_amount: f64,
    #[serde(with = "lenient_f64", default)]
    pub stone_amount: f64,
    #[serde(with = "lenient_f64", default)]
    pub making_amount: f64,
    #[serde(with = "lenient_f64", default)]
    pub taxable_amount: f64,
    #[serde(with = "lenient_f64", default)]
    pub gst_percent: f64,
    #[serde(with = "lenient_f64", default)]
    pub cgst_amount: f64,
    #[serde(with = "lenient_f64", default)]
    pub sgst_amount: f64,
    #[serde(with = "lenient_f64", default)]
    pub igst_amount: f64,
    #[serde(with = "lenient_f64", default)]
    pub line_total: f64,
}

/// Body of `POST /api/sales`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalePayload {
    pub sale_no: String,
    pub sale_date: String,
    pub customer_id: String,
    /// The invoice screen has no salesman picker and sends an empty id.
    pub salesman_id: String,
    pub total_gross_wt: f64,
    pub total_net_wt: f64,
    pub total_fine_wt: f64,
    pub stone_amount: f64,
    pub making_amount: f64,
    pub wastage_amount: f64,
    pub sub_total: f64,
    pub total_tax: f64,
    pub round_off: f64,
    pub grand_total: f64,
    pub notes: String,
    pub items: Vec<SaleItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sale_with_embedded_customer() {
        let json = r#"{"id":"1","saleNo":"SALE-2024-1","saleDate":"2024-05-01",
            "subTotal":"1000.00","totalTax":"30.00","grandTotal":"1030.00",
            "customer":{"id":"c","name":"Asha","gstNo":null,"state":"Kerala"}}"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.grand_total, 1030.0);
        let customer = sale.customer.unwrap();
        assert_eq!(customer.state.as_deref(), Some("Kerala"));
        assert!(customer.gst_no.is_none());
        assert!(sale.items.is_empty());
    }

    #[test]
    fn line_without_hsn_serializes_null() {
        let line = SaleItem {
            stock_item_id: Some("s1".into()),
            barcode_id: None,
            category_id: None,
            hsn_id: None,
            pieces: 1,
            gross_weight: 10.0,
            net_weight: 8.0,
            fine_weight: 7.3,
            metal_rate: 5000.0,
            metal_amount: 40000.0,
            stone_amount: 0.0,
            making_amount: 200.0,
            taxable_amount: 40200.0,
            gst_percent: 3.0,
            cgst_amount: 603.0,
            sgst_amount: 603.0,
            igst_amount: 0.0,
            line_total: 41406.0,
        };
        let value = serde_json::to_value(&line).unwrap();
        assert!(value["hsnId"].is_null());
        assert!(value.get("barcodeId").is_none());
        assert_eq!(value["taxableAmount"], 40200.0);
    }
}
