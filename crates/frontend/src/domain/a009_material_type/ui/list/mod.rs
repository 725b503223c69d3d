use leptos::prelude::*;

use crate::domain::a009_material_type::api::{material_type_payload, MaterialTypes};
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{bind_resource, ColumnSchema, FieldSchema, MasterContainer, MasterViewModel};

#[component]
pub fn MaterialTypeList() -> impl IntoView {
    let client = ResourceClient::<MaterialTypes>::new(use_gateway());
    let vm = MasterViewModel::new(bind_resource(client, material_type_payload));

    view! {
        <MasterContainer
            title="Material Type Master"
            subtitle="Manage different types of materials"
            columns=vec![ColumnSchema::new("typeName", "Material Type Name")]
            fields=vec![
                FieldSchema::text("typeName", "Material Type Name")
                    .required()
                    .placeholder("e.g. Gold 22k"),
            ]
            vm=vm
        />
    }
}
