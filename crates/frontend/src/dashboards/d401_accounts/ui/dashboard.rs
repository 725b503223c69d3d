use leptos::prelude::*;
use thaw::{Tab, TabList};

use super::gst::GstTab;
use super::ledgers::LedgersTab;
use super::vouchers::VouchersTab;
use crate::shared::components::page_header::PageHeader;

fn tab_heading(tab: &str) -> &'static str {
    match tab {
        "vouchers" => "Day Book",
        "gst" => "GST Returns Summary",
        _ => "Chart of Accounts",
    }
}

/// Ledgers, vouchers and GST returns. Each tab fetches when opened.
#[component]
pub fn AccountsDashboard() -> impl IntoView {
    let selected_tab = RwSignal::new("ledgers".to_string());

    view! {
        <div id="d401_accounts--dashboard" class="page accounts-page">
            <PageHeader title="Accounts & GST" />

            <TabList selected_value=selected_tab>
                <Tab value="ledgers">"Ledgers"</Tab>
                <Tab value="vouchers">"Vouchers"</Tab>
                <Tab value="gst">"GST Reports"</Tab>
            </TabList>

            <h2 class="tab-heading">{move || tab_heading(&selected_tab.get())}</h2>

            <div class="tab-content">
                {move || match selected_tab.get().as_str() {
                    "vouchers" => view! { <VouchersTab /> }.into_any(),
                    "gst" => view! { <GstTab /> }.into_any(),
                    _ => view! { <LedgersTab /> }.into_any(),
                }}
            </div>
        </div>
    }
}
