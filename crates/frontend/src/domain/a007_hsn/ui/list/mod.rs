use leptos::prelude::*;

use crate::domain::a007_hsn::api::{hsn_payload, HsnCodes};
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{bind_resource, ColumnSchema, FieldSchema, MasterContainer, MasterViewModel};

#[component]
pub fn HsnList() -> impl IntoView {
    let client = ResourceClient::<HsnCodes>::new(use_gateway());
    let vm = MasterViewModel::new(bind_resource(client, hsn_payload));

    let columns = vec![
        ColumnSchema::new("hsnCode", "HSN Code"),
        ColumnSchema::new("gstPercent", "GST %"),
    ];
    let fields = vec![
        FieldSchema::text("hsnCode", "HSN Code").required().placeholder("e.g. 7113"),
        FieldSchema::number("gstPercent", "GST Percentage").required().placeholder("e.g. 3.0"),
    ];

    view! {
        <MasterContainer
            title="HSN Master"
            subtitle="Manage HSN codes and GST percentages"
            columns=columns
            fields=fields
            vm=vm
        />
    }
}
