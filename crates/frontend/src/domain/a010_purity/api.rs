use contracts::domain::a010_purity::aggregate::{Purity, PurityPayload};
use contracts::domain::common::Record;

use crate::shared::api::Resource;

pub struct Purities;

impl Resource for Purities {
    const PATH: &'static str = "/api/purities";
    type Item = Purity;
    type Payload = PurityPayload;
}

pub fn purity_payload(draft: &Record) -> Result<PurityPayload, String> {
    Ok(PurityPayload {
        purity_label: draft.text("purityLabel"),
        purity_percent: draft.number("purityPercent"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_numeric() {
        let draft = Record::new().with("purityLabel", "22K").with("purityPercent", "91.6");
        let payload = purity_payload(&draft).unwrap();
        assert_eq!(payload.purity_label, "22K");
        assert_eq!(payload.purity_percent, 91.6);
    }
}
