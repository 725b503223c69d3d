use contracts::domain::a009_material_type::aggregate::{MaterialType, MaterialTypePayload};
use contracts::domain::common::Record;

use crate::shared::api::Resource;

pub struct MaterialTypes;

impl Resource for MaterialTypes {
    const PATH: &'static str = "/api/material-types";
    type Item = MaterialType;
    type Payload = MaterialTypePayload;
}

pub fn material_type_payload(draft: &Record) -> Result<MaterialTypePayload, String> {
    Ok(MaterialTypePayload {
        type_name: draft.text("typeName"),
    })
}
