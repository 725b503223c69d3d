use serde::{Deserialize, Serialize};

use crate::domain::common::lenient_f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherType {
    Payment,
    Receipt,
    Journal,
    Contra,
}

impl VoucherType {
    pub fn label(&self) -> &'static str {
        match self {
            VoucherType::Payment => "Payment",
            VoucherType::Receipt => "Receipt",
            VoucherType::Journal => "Journal",
            VoucherType::Contra => "Contra",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: String,
    pub voucher_no: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type")]
    pub voucher_type: VoucherType,
    #[serde(default)]
    pub ledger_id: Option<String>,
    #[serde(with = "lenient_f64", default)]
    pub amount: f64,
    /// `Dr` or `Cr`.
    #[serde(default)]
    pub type_dr_cr: String,
    #[serde(default)]
    pub narration: Option<String>,
}
