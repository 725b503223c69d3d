use serde::{Deserialize, Serialize};

use crate::domain::common::lenient_f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeMode {
    PerGram,
    Percent,
    PerPiece,
}

impl ChargeMode {
    pub const ALL: [ChargeMode; 3] = [ChargeMode::PerGram, ChargeMode::Percent, ChargeMode::PerPiece];

    pub fn code(&self) -> &'static str {
        match self {
            ChargeMode::PerGram => "PER_GRAM",
            ChargeMode::Percent => "PERCENT",
            ChargeMode::PerPiece => "PER_PIECE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChargeMode::PerGram => "Per Gram",
            ChargeMode::Percent => "Percent",
            ChargeMode::PerPiece => "Per Piece",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakingCharge {
    pub id: String,
    pub charge_mode: ChargeMode,
    #[serde(with = "lenient_f64", default)]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakingChargePayload {
    pub charge_mode: ChargeMode,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_mode_uses_screaming_snake_codes() {
        for mode in ChargeMode::ALL {
            let encoded = serde_json::to_value(mode).unwrap();
            assert_eq!(encoded, mode.code());
        }
    }
}
