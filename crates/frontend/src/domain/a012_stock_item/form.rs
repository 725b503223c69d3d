//! Draft handling of the stock modal: seeding and weight derivation.

use contracts::domain::a010_purity::aggregate::Purity;
use contracts::domain::a012_stock_item::aggregate::StockStatus;
use contracts::domain::common::Record;
use serde_json::Value;

/// Fields of the stock modal, in display order.
pub const STOCK_FIELDS: [&str; 17] = [
    "materialTypeId",
    "categoryId",
    "barcode",
    "sizeId",
    "purityId",
    "pieces",
    "grossWeight",
    "stoneWeight",
    "netWeight",
    "wastagePercent",
    "fineWeight",
    "huid",
    "stoneCost",
    "approxSalesPrice",
    "status",
    "salesVoucherNo",
    "orderNo",
];

/// Net = gross - stone and fine = net * purity% / 100, both with three
/// decimals. Non-positive results are left blank.
pub fn derive_weights(gross: f64, stone: f64, purity_percent: f64) -> (String, String) {
    let net = gross - stone;
    let fine = net * purity_percent / 100.0;
    let show = |w: f64| if w > 0.0 { format!("{:.3}", w) } else { String::new() };
    (show(net), show(fine))
}

pub fn empty_stock_draft() -> Record {
    let mut draft = Record::new();
    for field in STOCK_FIELDS {
        draft.set(field, "");
    }
    draft.set("status", StockStatus::Available.code());
    draft
}

/// Draft for editing `row`. Missing fields become blank inputs.
pub fn stock_draft_from_row(row: &Record) -> Record {
    let mut draft = empty_stock_draft();
    for field in STOCK_FIELDS {
        match row.get(field) {
            None | Some(Value::Null) => {}
            Some(value) => draft.set(field, value.clone()),
        }
    }
    if draft.text("barcode") == "-" {
        draft.set("barcode", "");
    }
    if draft.text("status").is_empty() {
        draft.set("status", StockStatus::Available.code());
    }
    draft
}

/// Apply one edit. Changing gross, stone or purity recomputes net and fine.
pub fn apply_stock_change(draft: &mut Record, name: &str, value: Value, purities: &[Purity]) {
    draft.set(name, value);
    if !matches!(name, "grossWeight" | "stoneWeight" | "purityId") {
        return;
    }
    let purity_id = draft.text("purityId");
    let purity_percent = purities
        .iter()
        .find(|p| p.id == purity_id)
        .map_or(0.0, |p| p.purity_percent);
    let (net, fine) = derive_weights(
        draft.number("grossWeight"),
        draft.number("stoneWeight"),
        purity_percent,
    );
    draft.set("netWeight", net);
    draft.set("fineWeight", fine);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purities() -> Vec<Purity> {
        vec![Purity {
            id: "p22".into(),
            purity_label: "22K".into(),
            purity_percent: 91.6,
        }]
    }

    #[test]
    fn weights_follow_gross_stone_and_purity() {
        let purities = purities();
        let mut draft = empty_stock_draft();
        apply_stock_change(&mut draft, "grossWeight", "10".into(), &purities);
        assert_eq!(draft.text("netWeight"), "10.000");
        assert_eq!(draft.text("fineWeight"), "");

        apply_stock_change(&mut draft, "stoneWeight", "2".into(), &purities);
        apply_stock_change(&mut draft, "purityId", "p22".into(), &purities);
        assert_eq!(draft.text("netWeight"), "8.000");
        assert_eq!(draft.text("fineWeight"), "7.328");
    }

    #[test]
    fn other_fields_leave_weights_alone() {
        let mut draft = empty_stock_draft();
        draft.set("netWeight", "5.000");
        apply_stock_change(&mut draft, "huid", "AB1234".into(), &purities());
        assert_eq!(draft.text("netWeight"), "5.000");
    }

    #[test]
    fn non_positive_net_is_blank() {
        assert_eq!(derive_weights(2.0, 3.0, 91.6), (String::new(), String::new()));
    }

    #[test]
    fn edit_draft_is_seeded_from_row() {
        let row = Record::new()
            .with("id", "s1")
            .with("grossWeight", 12.5)
            .with("barcode", "-")
            .with("huid", Value::Null);
        let draft = stock_draft_from_row(&row);
        assert_eq!(draft.text("grossWeight"), "12.5");
        assert_eq!(draft.text("barcode"), "");
        assert_eq!(draft.text("huid"), "");
        assert_eq!(draft.text("status"), "AVAILABLE");
    }
}
