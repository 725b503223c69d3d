use leptos::prelude::*;

use crate::domain::a002_vendor::api::Vendors;
use crate::domain::party_form::{party_columns, party_fields, party_payload};
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{bind_resource, MasterContainer, MasterViewModel};

#[component]
pub fn VendorList() -> impl IntoView {
    let client = ResourceClient::<Vendors>::new(use_gateway());
    let vm = MasterViewModel::new(bind_resource(client, party_payload));

    view! {
        <MasterContainer
            title="Vendor Master"
            subtitle="Manage vendor information"
            columns=party_columns()
            fields=party_fields("Vendor Name")
            vm=vm
        />
    }
}
