use contracts::domain::a006_design::aggregate::{Design, DesignPayload};
use contracts::domain::common::Record;

use crate::shared::api::Resource;

pub struct Designs;

impl Resource for Designs {
    const PATH: &'static str = "/api/designs";
    type Item = Design;
    type Payload = DesignPayload;
}

/// Weights arrive as input text; blanks and garbage count as zero.
pub fn design_payload(draft: &Record) -> Result<DesignPayload, String> {
    Ok(DesignPayload {
        design_no: draft.text("designNo"),
        category_id: draft.text("categoryId"),
        s3_key: draft.opt_text("s3Key"),
        gwt: draft.number("gwt"),
        nwt: draft.number("nwt"),
        owt: draft.number("owt"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_numeric() {
        let draft = Record::new()
            .with("designNo", "DSN-2024-001")
            .with("categoryId", "c1")
            .with("gwt", "12.5")
            .with("nwt", "10.250");
        let payload = design_payload(&draft).unwrap();
        assert_eq!(payload.gwt, 12.5);
        assert_eq!(payload.nwt, 10.25);
        assert_eq!(payload.owt, 0.0);
        assert_eq!(payload.s3_key, None);
    }
}
