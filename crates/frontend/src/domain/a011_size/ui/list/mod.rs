use leptos::prelude::*;

use crate::domain::a011_size::api::{size_payload, Sizes};
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{bind_resource, ColumnSchema, FieldSchema, MasterContainer, MasterViewModel};

#[component]
pub fn SizeList() -> impl IntoView {
    let client = ResourceClient::<Sizes>::new(use_gateway());
    let vm = MasterViewModel::new(bind_resource(client, size_payload));

    view! {
        <MasterContainer
            title="Size Master"
            subtitle="Manage different sizes"
            columns=vec![ColumnSchema::new("sizeLabel", "Size Label")]
            fields=vec![FieldSchema::text("sizeLabel", "Size Label").required().placeholder("e.g. 12")]
            vm=vm
        />
    }
}
