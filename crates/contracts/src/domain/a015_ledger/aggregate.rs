use serde::{Deserialize, Serialize};

use crate::domain::common::lenient_f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceType {
    Dr,
    Cr,
}

impl BalanceType {
    pub const ALL: [BalanceType; 2] = [BalanceType::Dr, BalanceType::Cr];

    pub fn code(&self) -> &'static str {
        match self {
            BalanceType::Dr => "Dr",
            BalanceType::Cr => "Cr",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(with = "lenient_f64", default)]
    pub opening_balance: f64,
    #[serde(default = "default_balance_type")]
    pub balance_type: BalanceType,
}

fn default_balance_type() -> BalanceType {
    BalanceType::Dr
}

/// Groups offered when creating a ledger, as `(label, value)`.
pub const LEDGER_GROUPS: [(&str, &str); 9] = [
    ("Capital Account", "Capital Account"),
    ("Current Assets", "Assets"),
    ("Current Liabilities", "Liabilities"),
    ("Sales Accounts", "Income"),
    ("Purchase Accounts", "Purchase"),
    ("Sundry Debtors", "Sundry Debtors"),
    ("Sundry Creditors", "Sundry Creditors"),
    ("Indirect Expenses", "Indirect Expenses"),
    ("Indirect Incomes", "Indirect Income"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_type_defaults_to_debit() {
        let ledger: Ledger =
            serde_json::from_str(r#"{"id":"1","name":"Cash","openingBalance":"500"}"#).unwrap();
        assert_eq!(ledger.balance_type, BalanceType::Dr);
        assert_eq!(ledger.opening_balance, 500.0);
    }
}
