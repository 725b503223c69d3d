use leptos::prelude::*;
use thaw::{Card, Tab, TabList};

use crate::dashboards::d400_reports::api::{
    load_report_data, order_report_row, order_stats, sales_report_row, sales_stats,
    stock_report_row, stock_stats, ReportData,
};
use crate::shared::api::use_gateway;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::master::{ColumnSchema, MasterTable};
use crate::shared::number_format::format_inr;

fn sales_columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("saleNo", "Sale No"),
        ColumnSchema::new("saleDate", "Date"),
        ColumnSchema::new("customerName", "Customer"),
        ColumnSchema::new("salesmanName", "Salesman"),
        ColumnSchema::new("grandTotal", "Amount"),
    ]
}

fn order_columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("orderNumber", "Order No"),
        ColumnSchema::new("orderType", "Type"),
        ColumnSchema::new("customerName", "Customer"),
        ColumnSchema::new("status", "Status"),
        ColumnSchema::new("deliveryDate", "Delivery"),
        ColumnSchema::new("totalQuantity", "Qty"),
    ]
}

fn stock_columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("huid", "HUID"),
        ColumnSchema::new("category", "Category"),
        ColumnSchema::new("grossWeight", "Gross Wt (g)"),
        ColumnSchema::new("netWeight", "Net Wt (g)"),
        ColumnSchema::new("status", "Status"),
        ColumnSchema::new("approxSalesPrice", "Approx Price"),
    ]
}

/// Sales, order and stock summaries over the full collections.
#[component]
pub fn ReportsDashboard() -> impl IntoView {
    let gateway = use_gateway();
    let data = RwSignal::new(ReportData::default());
    let (loading, set_loading) = signal(true);
    let selected_tab = RwSignal::new("sales".to_string());

    wasm_bindgen_futures::spawn_local(async move {
        match load_report_data(&gateway).await {
            Ok(loaded) => {
                data.try_set(loaded);
            }
            Err(e) => log::error!("Failed to fetch report data: {}", e),
        }
        set_loading.try_set(false);
    });

    let sales = Signal::derive(move || data.with(|d| sales_stats(&d.sales)));
    let orders = Signal::derive(move || data.with(|d| order_stats(&d.orders)));
    let stock = Signal::derive(move || data.with(|d| stock_stats(&d.stock)));

    let sales_rows = Signal::derive(move || data.with(|d| d.sales.iter().map(sales_report_row).collect::<Vec<_>>()));
    let order_rows = Signal::derive(move || data.with(|d| d.orders.iter().map(order_report_row).collect::<Vec<_>>()));
    let stock_rows = Signal::derive(move || data.with(|d| d.stock.iter().map(stock_report_row).collect::<Vec<_>>()));

    view! {
        <div id="d400_reports--dashboard" class="page reports-page">
            <PageHeader title="Reports" />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading reports data..."</div> }
            >
                <TabList selected_value=selected_tab>
                    <Tab value="sales">"Sales Reports"</Tab>
                    <Tab value="orders">"Order Reports"</Tab>
                    <Tab value="stock">"Stock Reports"</Tab>
                </TabList>

                <div class="tab-content">
                    {move || match selected_tab.get().as_str() {
                        "orders" => view! {
                            <div class="stat-grid">
                                <StatCard label="Total Orders" icon_name="shopping-cart" value=Signal::derive(move || orders.get().total.to_string()) />
                                <StatCard
                                    label="Pending Orders"
                                    icon_name="shopping-cart"
                                    value=Signal::derive(move || orders.get().pending.to_string())
                                    subtitle="Needs Attention"
                                />
                                <StatCard label="Completed Orders" icon_name="shopping-cart" value=Signal::derive(move || orders.get().completed.to_string()) />
                            </div>
                            <Card class="report-card">
                                <h3>"Order Details"</h3>
                                <MasterTable columns=order_columns() rows=order_rows show_actions=false />
                            </Card>
                        }
                        .into_any(),
                        "stock" => view! {
                            <div class="stat-grid stat-grid--four">
                                <StatCard label="Total Items" icon_name="box" value=Signal::derive(move || stock.get().total.to_string()) />
                                <StatCard label="Available Items" icon_name="box" value=Signal::derive(move || stock.get().available.to_string()) />
                                <StatCard label="Total Value" icon_name="box" value=Signal::derive(move || format_inr(stock.get().value)) />
                                <StatCard
                                    label="Total Gross Wt."
                                    icon_name="box"
                                    value=Signal::derive(move || format!("{:.2} g", stock.get().gross_weight))
                                />
                            </div>
                            <Card class="report-card">
                                <h3>"Stock Inventory"</h3>
                                <MasterTable columns=stock_columns() rows=stock_rows show_actions=false />
                            </Card>
                        }
                        .into_any(),
                        _ => view! {
                            <div class="stat-grid">
                                <StatCard label="Total Revenue" icon_name="bar-chart" value=Signal::derive(move || format_inr(sales.get().revenue)) />
                                <StatCard label="Total Sales Count" icon_name="bar-chart" value=Signal::derive(move || sales.get().count.to_string()) />
                                <StatCard label="Avg. Sale Value" icon_name="bar-chart" value=Signal::derive(move || format_inr(sales.get().average)) />
                            </div>
                            <Card class="report-card">
                                <h3>"Sales History"</h3>
                                <MasterTable columns=sales_columns() rows=sales_rows show_actions=false />
                            </Card>
                        }
                        .into_any(),
                    }}
                </div>
            </Show>
        </div>
    }
}
