use leptos::prelude::*;

use crate::domain::a010_purity::api::{purity_payload, Purities};
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{bind_resource, ColumnSchema, FieldSchema, MasterContainer, MasterViewModel};

#[component]
pub fn PurityList() -> impl IntoView {
    let client = ResourceClient::<Purities>::new(use_gateway());
    let vm = MasterViewModel::new(bind_resource(client, purity_payload));

    let columns = vec![
        ColumnSchema::new("purityLabel", "Purity Label"),
        ColumnSchema::new("purityPercent", "Purity %"),
    ];
    let fields = vec![
        FieldSchema::text("purityLabel", "Purity Label").required().placeholder("e.g. 22K"),
        FieldSchema::number("purityPercent", "Purity Percentage")
            .required()
            .placeholder("e.g. 91.6"),
    ];

    view! {
        <MasterContainer
            title="Purity Master"
            subtitle="Manage different purity levels"
            columns=columns
            fields=fields
            vm=vm
        />
    }
}
