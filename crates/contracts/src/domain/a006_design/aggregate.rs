use serde::{Deserialize, Serialize};

use crate::domain::a005_category::aggregate::CategoryRef;
use crate::domain::common::lenient_f64;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: String,
    pub design_no: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub s3_key: Option<String>,
    /// Gross weight.
    #[serde(with = "lenient_f64", default)]
    pub gwt: f64,
    /// Net weight.
    #[serde(with = "lenient_f64", default)]
    pub nwt: f64,
    /// Other (stone) weight.
    #[serde(with = "lenient_f64", default)]
    pub owt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPayload {
    pub design_no: String,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
    pub gwt: f64,
    pub nwt: f64,
    pub owt: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_decode_from_decimal_strings() {
        let json = r#"{"id":"d1","designNo":"DN-01","categoryId":"c1",
            "gwt":"10.500","nwt":"9.250","owt":null}"#;
        let design: Design = serde_json::from_str(json).unwrap();
        assert_eq!(design.gwt, 10.5);
        assert_eq!(design.nwt, 9.25);
        assert_eq!(design.owt, 0.0);
    }
}
