use leptos::prelude::*;

use crate::domain::a004_job_worker::api::JobWorkers;
use crate::domain::party_form::{party_columns, party_fields, party_payload};
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{bind_resource, MasterContainer, MasterViewModel};

#[component]
pub fn JobWorkerList() -> impl IntoView {
    let client = ResourceClient::<JobWorkers>::new(use_gateway());
    let vm = MasterViewModel::new(bind_resource(client, party_payload));

    view! {
        <MasterContainer
            title="Job Worker Master"
            subtitle="Manage job worker records"
            columns=party_columns()
            fields=party_fields("Job Worker Name")
            vm=vm
        />
    }
}
