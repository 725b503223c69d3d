use contracts::domain::a005_category::aggregate::Category;
use contracts::domain::a007_hsn::aggregate::Hsn;
use contracts::domain::common::Record;
use leptos::prelude::*;

use super::state::{columns, fields, load_dependencies};
use crate::domain::a005_category::api::{category_payload, Categories};
use crate::domain::a007_hsn::api::HsnCodes;
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{bind_resource, MasterContainer, MasterViewModel};

#[component]
pub fn CategoryList() -> impl IntoView {
    let gateway = use_gateway();
    let client = ResourceClient::<Categories>::new(gateway.clone());
    let hsn_client = ResourceClient::<HsnCodes>::new(gateway);

    let categories = RwSignal::new(Vec::<Category>::new());
    let hsn_codes = RwSignal::new(Vec::<Hsn>::new());

    let reload_dependencies = {
        let client = client.clone();
        move || {
            let client = client.clone();
            let hsn_client = hsn_client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match load_dependencies(client, hsn_client).await {
                    Ok((cats, hsns)) => {
                        categories.try_set(cats);
                        hsn_codes.try_set(hsns);
                    }
                    Err(e) => log::error!("failed to fetch category dependencies: {}", e),
                }
            });
        }
    };
    reload_dependencies();

    let fetch_client = client.clone();
    let callbacks = bind_resource(client, category_payload)
        .fetch(move || {
            let client = fetch_client.clone();
            async move {
                let cats = client.get_all().await.map_err(|e| e.to_string())?;
                categories.try_set(cats.clone());
                cats.iter().map(Record::from_serialize).collect()
            }
        })
        .on_add(reload_dependencies);
    let vm = MasterViewModel::new(callbacks);

    let fields = Signal::derive(move || categories.with(|c| hsn_codes.with(|h| fields(c, h))));

    view! {
        <MasterContainer
            title="Category Master"
            subtitle="Manage product categories and subcategories"
            columns=columns()
            fields=fields
            vm=vm
        />
    }
}
