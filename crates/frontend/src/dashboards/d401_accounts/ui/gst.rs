use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a014_sale::aggregate::Sale;
use leptos::prelude::*;
use thaw::Card;

use crate::dashboards::d401_accounts::api::{fetch_gst_sources, gstr1_rows, gstr3b_totals};
use crate::shared::api::use_gateway;
use crate::shared::components::stat_card::StatCard;
use crate::shared::master::{ColumnSchema, MasterTable};
use crate::shared::number_format::format_inr;

fn gstr1_columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("gstin", "GSTIN/UIN"),
        ColumnSchema::new("receiverName", "Receiver Name"),
        ColumnSchema::new("invoiceNo", "Invoice No"),
        ColumnSchema::new("invoiceDate", "Date"),
        ColumnSchema::new("invoiceValue", "Invoice Value"),
        ColumnSchema::new("placeOfSupply", "Place Of Supply"),
        ColumnSchema::new("rate", "Rate"),
        ColumnSchema::new("taxableValue", "Taxable Value"),
        ColumnSchema::new("cess", "Cess Amount"),
    ]
}

#[component]
pub fn GstTab() -> impl IntoView {
    let gateway = use_gateway();
    let sales = RwSignal::new(Vec::<Sale>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let (loading, set_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_gst_sources(&gateway).await {
            Ok((s, c)) => {
                sales.try_set(s);
                customers.try_set(c);
            }
            Err(e) => log::error!("Error fetching GST data: {}", e),
        }
        set_loading.try_set(false);
    });

    let rows = Signal::derive(move || sales.with(|s| customers.with(|c| gstr1_rows(s, c))));
    let totals = Signal::derive(move || sales.with(|s| gstr3b_totals(s)));

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            <Card class="report-card">
                <h3>"GSTR-1 (Sales / Outward Supplies)"</h3>
                <MasterTable columns=gstr1_columns() rows=rows show_actions=false />
            </Card>

            <Card class="report-card">
                <h3>"GSTR-3B (Summary)"</h3>
                <div class="stat-grid stat-grid--four">
                    <StatCard
                        label="Total Outward Taxable Supplies"
                        icon_name="file-text"
                        value=Signal::derive(move || format_inr(totals.get().taxable))
                    />
                    <StatCard label="Total Tax" icon_name="percent" value=Signal::derive(move || format_inr(totals.get().total_tax)) />
                    <StatCard label="Total CGST" icon_name="percent" value=Signal::derive(move || format_inr(totals.get().cgst)) />
                    <StatCard label="Total SGST" icon_name="percent" value=Signal::derive(move || format_inr(totals.get().sgst)) />
                </div>
            </Card>
        </Show>
    }
}
