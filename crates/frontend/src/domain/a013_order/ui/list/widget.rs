use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a003_salesman::aggregate::Salesman;
use contracts::domain::a006_design::aggregate::Design;
use contracts::domain::common::Record;
use leptos::prelude::*;

use super::state::{columns, load_dependencies};
use crate::domain::a013_order::api::{order_payload, order_row, Orders};
use crate::domain::a013_order::form::{fill_design_weights, new_order_draft, order_fields};
use crate::domain::a013_order::ui::status_dialog::StatusDialog;
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{MasterCallbacks, MasterContainer, MasterViewModel};

#[component]
pub fn OrderList() -> impl IntoView {
    let gateway = use_gateway();
    let client = ResourceClient::<Orders>::new(gateway.clone());

    let designs = RwSignal::new(Vec::<Design>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let salesmen = RwSignal::new(Vec::<Salesman>::new());
    let status_target = RwSignal::new(None::<Record>);

    {
        let gateway = gateway.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match load_dependencies(gateway).await {
                Ok((d, c, s)) => {
                    designs.try_set(d);
                    customers.try_set(c);
                    salesmen.try_set(s);
                }
                Err(e) => log::error!("failed to fetch order dependencies: {}", e),
            }
        });
    }

    let fetch_client = client.clone();
    let create_client = client;
    let callbacks = MasterCallbacks::new()
        .fetch(move || {
            let client = fetch_client.clone();
            async move {
                let orders = client.get_all().await.map_err(|e| e.to_string())?;
                orders.iter().map(order_row).collect()
            }
        })
        .create(move |draft: Record| {
            let client = create_client.clone();
            let payload = designs.with_untracked(|d| order_payload(&draft, d));
            async move {
                let created = client.create(&payload?).await.map_err(|e| e.to_string())?;
                order_row(&created)
            }
        })
        .new_draft(new_order_draft)
        .on_field(move |draft, changed| {
            designs.with_untracked(|d| fill_design_weights(draft, changed, d))
        })
        .on_edit(move |row| status_target.set(Some(row)));
    let vm = MasterViewModel::new(callbacks);

    let fields = Signal::derive(move || {
        designs.with(|d| customers.with(|c| salesmen.with(|s| order_fields(d, c, s))))
    });
    let on_saved = {
        let vm = vm.clone();
        Callback::new(move |_: ()| {
            status_target.set(None);
            vm.load_command();
        })
    };

    view! {
        <MasterContainer
            title="Order"
            subtitle="Manage all customer orders"
            add_label="Add Order"
            columns=columns()
            fields=fields
            vm=vm
        />
        {move || status_target.get().map(|order| view! {
            <StatusDialog
                order=order
                gateway=gateway.clone()
                on_close=Callback::new(move |_: ()| status_target.set(None))
                on_saved=on_saved
            />
        })}
    }
}
