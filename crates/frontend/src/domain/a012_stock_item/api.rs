use contracts::domain::a012_stock_item::aggregate::{StockItem, StockItemPayload, StockStatus};
use contracts::domain::common::Record;

use crate::shared::api::Resource;

pub struct StockItems;

impl Resource for StockItems {
    const PATH: &'static str = "/api/stock-items";
    type Item = StockItem;
    type Payload = StockItemPayload;
}

fn or_dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string())
}

/// List row with the display columns flattened out of the nested refs.
pub fn stock_row(item: &StockItem) -> Result<Record, String> {
    let mut row = Record::from_serialize(item)?;
    row.set(
        "stockType",
        or_dash(item.material_type.as_ref().map(|m| m.type_name.clone())),
    );
    row.set("barcode", or_dash(Some(item.barcode_text())));
    row.set("categoryName", or_dash(item.category.as_ref().map(|c| c.name.clone())));
    row.set("sizeLabel", or_dash(item.size.as_ref().map(|s| s.size_label.clone())));
    row.set("purityLabel", or_dash(item.purity.as_ref().map(|p| p.purity_label.clone())));
    Ok(row)
}

pub fn stock_payload(draft: &Record) -> Result<StockItemPayload, String> {
    let status = draft.parse("status").unwrap_or(StockStatus::Available);
    Ok(StockItemPayload {
        material_type_id: draft.text("materialTypeId"),
        category_id: draft.text("categoryId"),
        size_id: draft.text("sizeId"),
        purity_id: draft.text("purityId"),
        pieces: draft.number("pieces") as i64,
        gross_weight: draft.number("grossWeight"),
        stone_weight: draft.number("stoneWeight"),
        net_weight: draft.number("netWeight"),
        wastage_percent: draft.number("wastagePercent"),
        fine_weight: draft.number("fineWeight"),
        huid: draft.opt_text("huid"),
        stone_cost: draft.number("stoneCost"),
        approx_sales_price: draft.number("approxSalesPrice"),
        status,
        sales_voucher_no: draft.opt_text("salesVoucherNo"),
        order_no: draft.opt_text("orderNo"),
        barcode: draft.opt_text("barcode"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a012_stock_item::aggregate::{BarcodeRef, MaterialTypeRef};

    #[test]
    fn row_flattens_display_columns() {
        let item = StockItem {
            id: "s1".into(),
            material_type: Some(MaterialTypeRef { type_name: "Gold 22k".into() }),
            barcode_details: Some(BarcodeRef { barcode: "BC01".into() }),
            ..Default::default()
        };
        let row = stock_row(&item).unwrap();
        assert_eq!(row.text("stockType"), "Gold 22k");
        assert_eq!(row.text("barcode"), "BC01");
        assert_eq!(row.text("categoryName"), "-");
        assert_eq!(row.id().as_deref(), Some("s1"));
    }

    #[test]
    fn payload_coerces_numbers_and_defaults_status() {
        let draft = Record::new()
            .with("pieces", "2")
            .with("grossWeight", "10.5")
            .with("stoneWeight", "")
            .with("barcode", "");
        let payload = stock_payload(&draft).unwrap();
        assert_eq!(payload.pieces, 2);
        assert_eq!(payload.gross_weight, 10.5);
        assert_eq!(payload.stone_weight, 0.0);
        assert_eq!(payload.status, StockStatus::Available);
        assert_eq!(payload.barcode, None);
    }
}
