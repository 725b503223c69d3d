use serde::{Deserialize, Serialize};

use crate::domain::common::lenient_f64;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purity {
    pub id: String,
    pub purity_label: String,
    #[serde(with = "lenient_f64", default)]
    pub purity_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurityPayload {
    pub purity_label: String,
    pub purity_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_decodes_from_string() {
        let purity: Purity =
            serde_json::from_str(r#"{"id":"p1","purityLabel":"22K","purityPercent":"91.60"}"#)
                .unwrap();
        assert_eq!(purity.purity_percent, 91.6);
    }
}
