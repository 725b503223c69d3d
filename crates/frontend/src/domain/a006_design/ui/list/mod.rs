use contracts::domain::a005_category::aggregate::Category;
use leptos::prelude::*;

use crate::domain::a005_category::api::Categories;
use crate::domain::a006_design::api::{design_payload, Designs};
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{
    bind_resource, nested, ColumnSchema, FieldOption, FieldSchema, MasterContainer,
    MasterViewModel,
};

fn columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("s3Key", "Image").render(|value, _| {
            if value.as_str().is_some_and(|key| !key.is_empty()) {
                "Yes".to_string()
            } else {
                "-".to_string()
            }
        }),
        ColumnSchema::new("designNo", "Design No"),
        ColumnSchema::new("category", "Category").render(|value, row| {
            let name = nested("name")(value, row);
            if name.is_empty() { "-".to_string() } else { name }
        }),
        ColumnSchema::new("nwt", "Net Wt."),
        ColumnSchema::new("gwt", "Gross Wt."),
    ]
}

fn fields(categories: &[Category]) -> Vec<FieldSchema> {
    let category_options = categories
        .iter()
        .map(|c| FieldOption::new(c.id.clone(), c.name.clone()))
        .collect();

    vec![
        FieldSchema::text("s3Key", "Design Image URL").required().hint("Enter image URL"),
        FieldSchema::text("designNo", "Design No").required().placeholder("e.g. DSN-2024-001"),
        FieldSchema::select("categoryId", "Category", category_options)
            .required()
            .placeholder("Select Category"),
        FieldSchema::number("nwt", "Net Weight (gms)").required().placeholder("0.000"),
        FieldSchema::number("gwt", "Gross Weight (gms)").required().placeholder("0.000"),
        FieldSchema::number("owt", "Other Weight (gms)")
            .placeholder("0.000")
            .hint("Weight of stones, enamel, etc."),
    ]
}

#[component]
pub fn DesignList() -> impl IntoView {
    let gateway = use_gateway();
    let client = ResourceClient::<Designs>::new(gateway.clone());
    let category_client = ResourceClient::<Categories>::new(gateway);
    let categories = RwSignal::new(Vec::<Category>::new());

    let reload_categories = move || {
        let client = category_client.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match client.get_all().await {
                Ok(cats) => {
                    categories.try_set(cats);
                }
                Err(e) => log::error!("failed to fetch categories: {}", e),
            }
        });
    };
    reload_categories();

    let vm = MasterViewModel::new(bind_resource(client, design_payload).on_add(reload_categories));
    let fields = Signal::derive(move || categories.with(|c| fields(c)));

    view! {
        <MasterContainer
            title="Design Master"
            subtitle="Manage jewelry designs"
            columns=columns()
            fields=fields
            vm=vm
        />
    }
}
