use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a014_sale::aggregate::Sale;
use contracts::domain::common::Record;
use futures::try_join;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::a001_customer::api::Customers;
use crate::domain::a014_sale::api::{filter_sales, sale_row, SaleFilter, Sales};
use crate::routes::paths;
use crate::shared::api::{use_gateway, ApiError, ResourceClient};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use crate::shared::master::{ColumnSchema, MasterTable};

const DELETE_SALE_CONFIRMATION: &str = "Are you sure you want to delete this sale?";

fn columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("date", "Date"),
        ColumnSchema::new("invoiceNo", "Invoice No."),
        ColumnSchema::new("customerName", "Customer Name"),
        ColumnSchema::new("totalFine", "Total Fine (Gms)"),
        ColumnSchema::new("amount", "Amount (₹)"),
    ]
}

async fn load(
    sales: ResourceClient<Sales>,
    customers: ResourceClient<Customers>,
) -> Result<(Vec<Sale>, Vec<Customer>), ApiError> {
    try_join!(sales.get_all(), customers.get_all())
}

#[component]
pub fn SalesList() -> impl IntoView {
    let gateway = use_gateway();
    let client = ResourceClient::<Sales>::new(gateway.clone());
    let customer_client = ResourceClient::<Customers>::new(gateway);

    let sales = RwSignal::new(Vec::<Sale>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let filter = RwSignal::new(SaleFilter::default());

    let fetch = {
        let client = client.clone();
        move || {
            let client = client.clone();
            let customer_client = customer_client.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match load(client, customer_client).await {
                    Ok((s, c)) => {
                        sales.try_set(s);
                        customers.try_set(c);
                    }
                    Err(e) => log::error!("failed to fetch sales: {}", e),
                }
                loading.try_set(false);
            });
        }
    };
    fetch();

    let on_delete = {
        let fetch = fetch.clone();
        Callback::new(move |row: Record| {
            let Some(id) = row.id() else {
                return;
            };
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(DELETE_SALE_CONFIRMATION).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let client = client.clone();
            let fetch = fetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.delete(&id).await {
                    Ok(()) => fetch(),
                    Err(e) => {
                        log::error!("failed to delete sale {}: {}", id, e);
                        error.try_set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let rows = Signal::derive(move || {
        sales.with(|s| filter.with(|f| filter_sales(s, f).iter().map(sale_row).collect::<Vec<_>>()))
    });
    let customer_options = Signal::derive(move || {
        customers.with(|c| {
            c.iter()
                .map(|c| (c.id.clone(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let customer_id = Signal::derive(move || filter.with(|f| f.customer_id.clone()));
    let from_date = Signal::derive(move || filter.with(|f| f.from_date.clone()));
    let to_date = Signal::derive(move || filter.with(|f| f.to_date.clone()));

    view! {
        <div class="page sales-page">
            <PageHeader title="Sales Invoice" subtitle="Manage sales invoice records">
                <A href=paths::NEW_SALE attr:class="button button--primary">
                    {icon("plus")}
                    "Add New"
                </A>
            </PageHeader>

            {move || error.get().map(|message| view! {
                <div class="alert alert--error">
                    <span>{message}</span>
                    <button class="alert__close" title="Dismiss" on:click=move |_| error.set(None)>"×"</button>
                </div>
            })}

            <div class="filter-bar">
                <Select
                    label="Select Customer"
                    value=customer_id
                    on_change=Callback::new(move |v: String| filter.update(|f| f.customer_id = v))
                    options=customer_options
                    placeholder="All Customers"
                />
                <Input
                    label="From Date"
                    input_type="date"
                    value=from_date
                    on_input=Callback::new(move |v: String| filter.update(|f| f.from_date = v))
                />
                <Input
                    label="To Date"
                    input_type="date"
                    value=to_date
                    on_input=Callback::new(move |v: String| filter.update(|f| f.to_date = v))
                />
                <Button variant="secondary" on_click=Callback::new(move |_: MouseEvent| fetch())>"Filter"</Button>
                <Button variant="ghost" on_click=Callback::new(move |_: MouseEvent| filter.set(SaleFilter::default()))>"Reset"</Button>
            </div>

            <Show
                when=move || !(loading.get() && sales.with(|s| s.is_empty()))
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <MasterTable columns=columns() rows=rows on_delete=on_delete />
            </Show>
        </div>
    }
}
