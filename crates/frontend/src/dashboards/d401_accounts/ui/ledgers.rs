use contracts::domain::a015_ledger::aggregate::{BalanceType, LEDGER_GROUPS};
use contracts::domain::common::{input_text, Record};
use leptos::prelude::*;
use serde_json::Value;

use crate::dashboards::d401_accounts::api::{fetch_ledgers, ledger_row};
use crate::shared::api::use_gateway;
use crate::shared::master::{ColumnSchema, FieldOption, FieldSchema, MasterCallbacks, MasterContainer, MasterViewModel};

fn columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("name", "Ledger Name"),
        ColumnSchema::new("group", "Group"),
        ColumnSchema::new("openingBalance", "Opening Balance")
            .render(|value: &Value, row: &Record| format!("{} {}", input_text(value), row.text("balanceType"))),
    ]
}

fn fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("name", "Ledger Name").required(),
        FieldSchema::select(
            "group",
            "Under Group",
            LEDGER_GROUPS
                .iter()
                .map(|(label, value)| FieldOption::new(*value, *label))
                .collect(),
        )
        .required(),
        FieldSchema::number("openingBalance", "Opening Balance").required(),
        FieldSchema::select(
            "balanceType",
            "Dr/Cr",
            BalanceType::ALL
                .iter()
                .map(|b| FieldOption::new(b.code(), b.code()))
                .collect(),
        )
        .required(),
    ]
}

/// Chart of accounts. New ledgers are kept in the list only; there is no
/// create endpoint yet.
#[component]
pub fn LedgersTab() -> impl IntoView {
    let gateway = use_gateway();
    let callbacks = MasterCallbacks::new()
        .fetch(move || {
            let gateway = gateway.clone();
            async move { Ok(fetch_ledgers(&gateway).await.iter().map(ledger_row).collect()) }
        })
        .new_draft(|| Record::new().with("balanceType", BalanceType::Dr.code()));

    view! {
        <MasterContainer
            title="Ledger"
            subtitle="Ledger accounts and opening balances"
            add_label="Create Ledger"
            columns=columns()
            fields=fields()
            vm=MasterViewModel::new(callbacks)
            show_actions=false
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_balance_shows_its_side() {
        let row = Record::new().with("openingBalance", 50000).with("balanceType", "Dr");
        assert_eq!(columns()[2].cell_text(&row), "50000 Dr");
    }
}
