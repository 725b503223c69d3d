use serde::{Deserialize, Serialize};

use crate::domain::common::lenient_f64;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hsn {
    pub id: String,
    pub hsn_code: String,
    #[serde(with = "lenient_f64", default)]
    pub gst_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HsnPayload {
    pub hsn_code: String,
    pub gst_percent: f64,
}
