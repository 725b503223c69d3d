use contracts::domain::common::{input_text, Record};
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::master::{ColumnSchema, FieldSchema, MasterCallbacks, MasterContainer, MasterViewModel};
use crate::shared::number_format::format_inr;

fn rate_cell(value: &Value, _row: &Record) -> String {
    input_text(value)
        .trim()
        .parse::<f64>()
        .map(format_inr)
        .unwrap_or_default()
}

fn columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("rateDate", "Date").render(|value: &Value, _row: &Record| format_date(&input_text(value))),
        ColumnSchema::new("goldRate", "Gold Rate (₹/g)").render(rate_cell),
        ColumnSchema::new("silverRate", "Silver Rate (₹/g)").render(rate_cell),
        ColumnSchema::new("remarks", "Remarks"),
    ]
}

fn fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::date("rateDate", "Date").required(),
        FieldSchema::number("goldRate", "Gold Rate (₹/g)").required().placeholder("e.g. 7500"),
        FieldSchema::number("silverRate", "Silver Rate (₹/g)").required().placeholder("e.g. 85"),
        FieldSchema::textarea("remarks", "Remarks"),
    ]
}

/// Daily gold and silver rates. Entries live in this screen only and get
/// client-generated ids.
#[component]
pub fn MetalRateList() -> impl IntoView {
    let callbacks = MasterCallbacks::new().new_draft(|| Record::new().with("rateDate", today_iso()));

    view! {
        <MasterContainer
            title="Gold / Silver Rate"
            subtitle="Update daily rates"
            add_label="Add Rate"
            columns=columns()
            fields=fields()
            vm=MasterViewModel::new(callbacks)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_render_as_rupees() {
        let row = Record::new()
            .with("rateDate", "2024-04-01")
            .with("goldRate", "7500")
            .with("silverRate", "");
        let cells: Vec<String> = columns().iter().map(|c| c.cell_text(&row)).collect();
        assert_eq!(cells, vec!["01/04/2024", "₹7,500.00", "", ""]);
    }
}
