use contracts::domain::a008_making_charge::aggregate::{ChargeMode, MakingCharge, MakingChargePayload};
use contracts::domain::common::Record;

use crate::shared::api::Resource;
use crate::shared::master::choice;

pub struct MakingCharges;

impl Resource for MakingCharges {
    const PATH: &'static str = "/api/making-charges";
    type Item = MakingCharge;
    type Payload = MakingChargePayload;
}

pub fn making_charge_payload(draft: &Record) -> Result<MakingChargePayload, String> {
    let charge_mode: ChargeMode = choice(draft, "chargeMode", "Charge mode")?;
    Ok(MakingChargePayload {
        charge_mode,
        value: draft.number("value"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_mode_is_required() {
        let draft = Record::new().with("value", "100.00");
        assert!(making_charge_payload(&draft).is_err());
        let draft = draft.with("chargeMode", "PER_PIECE");
        let payload = making_charge_payload(&draft).unwrap();
        assert_eq!(payload.charge_mode, ChargeMode::PerPiece);
        assert_eq!(payload.value, 100.0);
    }
}
