use contracts::domain::a007_hsn::aggregate::{Hsn, HsnPayload};
use contracts::domain::common::Record;

use crate::shared::api::Resource;

pub struct HsnCodes;

impl Resource for HsnCodes {
    const PATH: &'static str = "/api/hsn-master";
    type Item = Hsn;
    type Payload = HsnPayload;
}

pub fn hsn_payload(draft: &Record) -> Result<HsnPayload, String> {
    Ok(HsnPayload {
        hsn_code: draft.text("hsnCode"),
        gst_percent: draft.number("gstPercent"),
    })
}

/// Dropdown label, e.g. `7113 (3%)`.
pub fn hsn_label(hsn: &Hsn) -> String {
    format!("{} ({}%)", hsn.hsn_code, hsn.gst_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gst_percent_is_coerced_from_input_text() {
        let draft = Record::new().with("hsnCode", "7113").with("gstPercent", "3.0");
        let payload = hsn_payload(&draft).unwrap();
        assert_eq!(payload.gst_percent, 3.0);
        let hsn = Hsn { id: "1".into(), hsn_code: payload.hsn_code, gst_percent: 3.0 };
        assert_eq!(hsn_label(&hsn), "7113 (3%)");
    }
}
