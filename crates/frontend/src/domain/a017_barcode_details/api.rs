use contracts::domain::a017_barcode_details::aggregate::BarcodeDetails;

use crate::shared::api::{ApiError, Gateway};

pub fn search_path(query: &str) -> String {
    format!("/api/barcode-details/search/{}", urlencoding::encode(query.trim()))
}

/// Barcode details whose barcode matches `query`.
pub async fn search_barcodes(gateway: &Gateway, query: &str) -> Result<Vec<BarcodeDetails>, ApiError> {
    gateway.get(&search_path(query)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_a_single_encoded_segment() {
        assert_eq!(search_path("BC 01/2"), "/api/barcode-details/search/BC%2001%2F2");
        assert_eq!(search_path(" 1001 "), "/api/barcode-details/search/1001");
    }
}
