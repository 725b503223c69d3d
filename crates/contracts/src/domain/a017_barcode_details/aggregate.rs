//! Response of `GET /api/barcode-details/search/{barcode}`, used by the
//! invoice builder to turn a scanned tag into a line.

use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient_f64, lenient_f64_opt};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeCategory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hsn_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodePurity {
    #[serde(default)]
    pub purity_label: String,
    #[serde(with = "lenient_f64_opt", default)]
    pub purity_percent: Option<f64>,
}

impl BarcodePurity {
    /// `"91.6%"` when a percent is known, otherwise the label.
    pub fn display(&self) -> String {
        match self.purity_percent {
            Some(percent) => format!("{}%", percent),
            None => self.purity_label.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeSize {
    #[serde(default)]
    pub size_label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeStockItem {
    pub id: String,
    #[serde(default)]
    pub size: Option<BarcodeSize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeDetails {
    pub id: String,
    pub barcode: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub pieces: i64,
    #[serde(default)]
    pub purity_id: Option<String>,
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
    pub category: Option<BarcodeCategory>,
    #[serde(default)]
    pub purity: Option<BarcodePurity>,
    #[serde(default)]
    pub stock_items: Vec<BarcodeStockItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_search_result() {
        let json = r#"{"id":"b1","barcode":"BC0007","pieces":1,
            "grossWeight":"10.000","stoneWeight":"0.500","netWeight":"9.500",
            "category":{"id":"c","name":"Ring"},
            "purity":{"purityLabel":"22K","purityPercent":"91.6"},
            "stockItems":[{"id":"s9","size":{"sizeLabel":"12"}}]}"#;
        let details: BarcodeDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.net_weight, 9.5);
        assert_eq!(details.purity.as_ref().unwrap().display(), "91.6%");
        assert_eq!(details.stock_items[0].id, "s9");
    }

    #[test]
    fn purity_display_falls_back_to_label() {
        let purity = BarcodePurity {
            purity_label: "18K".into(),
            purity_percent: None,
        };
        assert_eq!(purity.display(), "18K");
    }
}
