use contracts::domain::a011_size::aggregate::{Size, SizePayload};
use contracts::domain::common::Record;

use crate::shared::api::Resource;

pub struct Sizes;

impl Resource for Sizes {
    const PATH: &'static str = "/api/sizes";
    type Item = Size;
    type Payload = SizePayload;
}

pub fn size_payload(draft: &Record) -> Result<SizePayload, String> {
    Ok(SizePayload {
        size_label: draft.text("sizeLabel"),
    })
}
