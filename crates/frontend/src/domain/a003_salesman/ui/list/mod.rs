use leptos::prelude::*;

use crate::domain::a003_salesman::api::Salesmen;
use crate::domain::party_form::{party_columns, party_fields, party_payload};
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{bind_resource, MasterContainer, MasterViewModel};

#[component]
pub fn SalesmanList() -> impl IntoView {
    let client = ResourceClient::<Salesmen>::new(use_gateway());
    let vm = MasterViewModel::new(bind_resource(client, party_payload));

    view! {
        <MasterContainer
            title="Salesman Master"
            subtitle="Manage salesman records"
            columns=party_columns()
            fields=party_fields("Salesman Name")
            vm=vm
        />
    }
}
