//! Sales invoice builder: customer header, scanned lines, totals.

mod lines;

use chrono::Utc;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a017_barcode_details::aggregate::BarcodeDetails;
use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use self::lines::InvoiceLines;
use crate::domain::a001_customer::api::Customers;
use crate::domain::a014_sale::api::Sales;
use crate::domain::a014_sale::invoice::{
    add_line, invoice_totals, sale_payload, InvoiceLine, DEFAULT_GOLD_RATE, DEFAULT_SILVER_RATE,
};
use crate::domain::a017_barcode_details::api::search_barcodes;
use crate::routes::paths;
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::today_iso;
use crate::shared::icons::icon;
use crate::shared::search::SearchGeneration;

fn parse_rate(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Put a picked match on the invoice. Any lookup still waiting on the
/// debounce is dropped so it cannot reopen the dropdown afterwards.
fn accept_match(
    lines: &mut Vec<InvoiceLine>,
    details: &BarcodeDetails,
    metal_rate: f64,
    generation: &SearchGeneration,
) -> bool {
    generation.cancel();
    add_line(lines, details, metal_rate)
}

#[component]
pub fn InvoiceBuilder() -> impl IntoView {
    let gateway = use_gateway();
    let sales = ResourceClient::<Sales>::new(gateway.clone());
    let customer_client = ResourceClient::<Customers>::new(gateway.clone());
    let navigate = use_navigate();

    let customers = RwSignal::new(Vec::<Customer>::new());
    let customer_id = RwSignal::new(String::new());
    let gold_rate = RwSignal::new(DEFAULT_GOLD_RATE);
    let silver_rate = RwSignal::new(DEFAULT_SILVER_RATE);
    let lines = RwSignal::new(Vec::<InvoiceLine>::new());
    let jewellery_narration = RwSignal::new(String::new());
    let account_narration = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let barcode_input = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<BarcodeDetails>::new());
    let show_dropdown = RwSignal::new(false);
    let searching = RwSignal::new(false);
    let generation = SearchGeneration::new();

    wasm_bindgen_futures::spawn_local(async move {
        match customer_client.get_all().await {
            Ok(list) => {
                customers.try_set(list);
            }
            Err(e) => log::error!("failed to fetch customers: {}", e),
        }
    });

    let selected_customer = move || {
        let id = customer_id.get();
        customers.with(|c| c.iter().find(|c| c.id == id).cloned())
    };
    let pan_no = Signal::derive(move || selected_customer().and_then(|c| c.pan_no).unwrap_or_default());
    let gst_no = Signal::derive(move || selected_customer().and_then(|c| c.gst_no).unwrap_or_default());
    let customer_options = Signal::derive(move || {
        customers.with(|c| c.iter().map(|c| (c.id.clone(), c.name.clone())).collect::<Vec<_>>())
    });
    let totals = Signal::derive(move || lines.with(|l| invoice_totals(l)));

    let pending_search = StoredValue::new(generation.clone());
    let add_from = move |details: &BarcodeDetails| {
        let rate = gold_rate.get_untracked();
        pending_search.with_value(|generation| {
            lines.update(|l| {
                accept_match(l, details, rate, generation);
            })
        });
        barcode_input.set(String::new());
        results.set(Vec::new());
        show_dropdown.set(false);
    };

    let on_barcode_input = {
        let generation = generation.clone();
        let gateway = gateway.clone();
        move |query: String| {
            barcode_input.set(query.clone());
            let ticket = generation.next();
            let generation = generation.clone();
            let gateway = gateway.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if !generation.settle(ticket).await {
                    return;
                }
                if query.trim().is_empty() {
                    results.try_set(Vec::new());
                    show_dropdown.try_set(false);
                    return;
                }
                searching.try_set(true);
                let found = search_barcodes(&gateway, &query).await;
                if generation.is_current(ticket) {
                    match found {
                        Ok(found) => {
                            results.try_set(found);
                            show_dropdown.try_set(true);
                        }
                        Err(e) => {
                            log::error!("barcode search failed: {}", e);
                            results.try_set(Vec::new());
                        }
                    }
                    searching.try_set(false);
                }
            });
        }
    };

    // Adds the first match, searching right away when no results are in yet.
    let add_item = {
        let generation = generation.clone();
        let gateway = gateway.clone();
        move || {
            if let Some(first) = results.with_untracked(|r| r.first().cloned()) {
                add_from(&first);
                return;
            }
            let query = barcode_input.get_untracked();
            if query.trim().is_empty() {
                return;
            }
            let ticket = generation.next();
            let generation = generation.clone();
            let gateway = gateway.clone();
            searching.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match search_barcodes(&gateway, &query).await {
                    Ok(found) if generation.is_current(ticket) => {
                        if let Some(first) = found.first() {
                            add_from(first);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => log::error!("barcode search failed: {}", e),
                }
                searching.try_set(false);
            });
        }
    };
    let add_on_enter = {
        let add_item = add_item.clone();
        move |ev: KeyboardEvent| {
            if ev.key() == "Enter" {
                add_item();
            }
        }
    };

    let save = move |_: MouseEvent| {
        let payload = lines.with_untracked(|l| {
            sale_payload(
                &customer_id.get_untracked(),
                l,
                &jewellery_narration.get_untracked(),
                &account_narration.get_untracked(),
                Utc::now(),
            )
        });
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let sales = sales.clone();
        let navigate = navigate.clone();
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match sales.create(&payload).await {
                Ok(sale) => {
                    log::info!("saved sale {}", sale.sale_no);
                    navigate(paths::SALES, Default::default());
                }
                Err(e) => {
                    log::error!("failed to save sale: {}", e);
                    error.try_set(Some(format!("Failed to save invoice: {}", e)));
                }
            }
            saving.try_set(false);
        });
    };

    let money = |value: f64| format!("₹ {:.2}", value);

    view! {
        <div class="page invoice-page">
            <PageHeader title="Add Sales Invoice" subtitle="Manage invoice entries, save & print">
                <A href=paths::SALES attr:class="button button--secondary">
                    {icon("arrow-left")}
                    "Back"
                </A>
            </PageHeader>

            {move || error.get().map(|message| view! {
                <div class="alert alert--error">
                    <span>{message}</span>
                    <button class="alert__close" title="Dismiss" on:click=move |_| error.set(None)>"×"</button>
                </div>
            })}

            <section class="card">
                <h3 class="card__title">"Invoice Details"</h3>
                <div class="form form--grid">
                    <Input label="Date" input_type="date" value=today_iso() disabled=true />
                    <Input label="Invoice No." value=String::new() placeholder="INV-2024-001" disabled=true />
                    <Select
                        label="Customer Name"
                        value=customer_id
                        on_change=Callback::new(move |v: String| customer_id.set(v))
                        options=customer_options
                        placeholder="Select Customer"
                    />
                    <Input label="PAN No." value=pan_no placeholder="PAN Number" disabled=true />
                    <Input label="GST No." value=gst_no placeholder="GSTIN" disabled=true />
                    <Input
                        label="Gold Rate (10g)"
                        input_type="number"
                        value=Signal::derive(move || gold_rate.get().to_string())
                        on_input=Callback::new(move |v: String| gold_rate.set(parse_rate(&v)))
                    />
                    <Input
                        label="Silver Rate (10g)"
                        input_type="number"
                        value=Signal::derive(move || silver_rate.get().to_string())
                        on_input=Callback::new(move |v: String| silver_rate.set(parse_rate(&v)))
                    />
                </div>
            </section>

            <section class="card">
                <div class="invoice-search">
                    <div class="invoice-search__box">
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Scan Barcode or Type Item Code..."
                            prop:value=move || barcode_input.get()
                            disabled=move || searching.get()
                            on:input=move |ev| on_barcode_input(event_target_value(&ev))
                            on:keydown=add_on_enter
                        />
                        <Show when=move || show_dropdown.get() && results.with(|r| !r.is_empty())>
                            <div class="invoice-search__dropdown">
                                <For
                                    each=move || results.get()
                                    key=|d| d.id.clone()
                                    children=move |d| {
                                        let label = format!(
                                            "{} - {}",
                                            d.barcode,
                                            d.category.as_ref().map(|c| c.name.clone()).unwrap_or_default()
                                        );
                                        let weight = format!("{}g", d.gross_weight);
                                        view! {
                                            <button class="invoice-search__option" on:click=move |_| add_from(&d)>
                                                <span>{label}</span>
                                                <span class="invoice-search__weight">{weight}</span>
                                            </button>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                    <button
                        class="button button--primary"
                        disabled=move || searching.get()
                        on:click=move |_| add_item()
                    >
                        {move || if searching.get() {
                            view! { "Scanning..." }.into_any()
                        } else {
                            view! { {icon("plus")} " Add Item" }.into_any()
                        }}
                    </button>
                </div>

                <InvoiceLines lines=lines />
            </section>

            <section class="card invoice-footer">
                <div class="invoice-footer__narration">
                    <Textarea
                        label="Jewellery Narration"
                        value=jewellery_narration
                        on_input=Callback::new(move |v: String| jewellery_narration.set(v))
                        placeholder="Enter details..."
                    />
                    <Textarea
                        label="Account Narration"
                        value=account_narration
                        on_input=Callback::new(move |v: String| account_narration.set(v))
                        placeholder="Enter details..."
                    />
                </div>
                <div class="invoice-footer__totals">
                    <div class="invoice-total">
                        <span>"Sub Total"</span>
                        <span>{move || money(totals.get().sub_total)}</span>
                    </div>
                    <div class="invoice-total">
                        <span>"GST (3%)"</span>
                        <span>{move || money(totals.get().gst)}</span>
                    </div>
                    <div class="invoice-total invoice-total--grand">
                        <span>"Grand Total"</span>
                        <span>{move || money(totals.get().grand_total)}</span>
                    </div>
                    <button class="button button--primary button--block" disabled=move || saving.get() on:click=save>
                        {icon("save")}
                        {move || if saving.get() { "Saving..." } else { "Save & Print" }}
                    </button>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(barcode: &str) -> BarcodeDetails {
        BarcodeDetails {
            id: format!("bd-{}", barcode),
            barcode: barcode.into(),
            ..Default::default()
        }
    }

    #[test]
    fn picking_a_match_drops_the_pending_lookup() {
        let generation = SearchGeneration::new();
        let typed = generation.next();
        let mut lines = Vec::new();
        assert!(accept_match(&mut lines, &details("B1"), 6500.0, &generation));
        assert_eq!(lines.len(), 1);
        assert!(!generation.is_current(typed));
    }

    #[test]
    fn duplicate_pick_still_cancels_lookup() {
        let generation = SearchGeneration::new();
        let mut lines = Vec::new();
        accept_match(&mut lines, &details("B1"), 6500.0, &generation);
        let typed = generation.next();
        assert!(!accept_match(&mut lines, &details("B1"), 6500.0, &generation));
        assert_eq!(lines.len(), 1);
        assert!(!generation.is_current(typed));
    }
}
