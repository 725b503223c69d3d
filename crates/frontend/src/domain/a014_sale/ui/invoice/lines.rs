use leptos::prelude::*;

use crate::domain::a014_sale::invoice::{edit_line, remove_line, InvoiceLine, LineEdit};
use crate::shared::icons::icon;

const EMPTY_INVOICE_TEXT: &str = "No items added. Scan a barcode to begin.";
const HEADERS: [&str; 14] = [
    "Category", "Barcode", "Particulars", "HSN", "Pcs", "Size", "Purity", "Gr. Wt", "Oth. Wt",
    "Net Wt", "Metal Rate", "Labour", "Amount", "",
];

/// Editable table of invoice lines.
#[component]
pub fn InvoiceLines(lines: RwSignal<Vec<InvoiceLine>>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="table invoice-table">
                <thead class="table__head">
                    <tr>
                        {HEADERS.iter().map(|h| view! { <th class="table__header-cell">{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || lines.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td class="table__cell table__cell--empty" colspan=HEADERS.len()>{EMPTY_INVOICE_TEXT}</td>
                            </tr>
                        }
                    >
                        <For
                            each=move || lines.get()
                            key=|line| line.id.clone()
                            children=move |line| view! { <LineRow id=line.id lines=lines /> }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn LineRow(id: String, lines: RwSignal<Vec<InvoiceLine>>) -> impl IntoView {
    let current = {
        let id = id.clone();
        move |read: fn(&InvoiceLine) -> String| {
            let id = id.clone();
            move || lines.with(|l| l.iter().find(|line| line.id == id).map(read).unwrap_or_default())
        }
    };
    let edit = {
        let id = id.clone();
        move |change: LineEdit| lines.update(|l| edit_line(l, &id, change))
    };

    let text_cell = {
        let current = current.clone();
        let edit = edit.clone();
        move |read: fn(&InvoiceLine) -> String, make: fn(String) -> LineEdit| {
            let value = current(read);
            let edit = edit.clone();
            view! {
                <td class="table__cell">
                    <input
                        type="text"
                        class="invoice-table__input"
                        prop:value=value
                        on:input=move |ev| edit(make(event_target_value(&ev)))
                    />
                </td>
            }
        }
    };
    let number_cell = {
        let current = current.clone();
        let edit = edit.clone();
        move |read: fn(&InvoiceLine) -> String, make: fn(f64) -> LineEdit| {
            let value = current(read);
            let edit = edit.clone();
            view! {
                <td class="table__cell">
                    <input
                        type="number"
                        step="any"
                        class="invoice-table__input"
                        prop:value=value
                        on:input=move |ev| edit(make(event_target_value(&ev).trim().parse().unwrap_or(0.0)))
                    />
                </td>
            }
        }
    };

    let barcode = current(|l| l.barcode.clone());
    let net = current(|l| format!("{:.3}", l.net_weight));
    let amount = current(|l| format!("{:.2}", l.amount));

    view! {
        <tr class="table__row">
            {text_cell(|l| l.category.clone(), LineEdit::Category)}
            <td class="table__cell table__cell--muted">{barcode}</td>
            {text_cell(|l| l.particulars.clone(), LineEdit::Particulars)}
            {text_cell(|l| l.hsn.clone(), LineEdit::Hsn)}
            {number_cell(|l| l.pieces.to_string(), |v| LineEdit::Pieces(v as i64))}
            {text_cell(|l| l.size.clone(), LineEdit::Size)}
            {text_cell(|l| l.purity.clone(), LineEdit::Purity)}
            {number_cell(|l| l.gross_weight.to_string(), LineEdit::GrossWeight)}
            {number_cell(|l| l.other_weight.to_string(), LineEdit::OtherWeight)}
            <td class="table__cell table__cell--strong">{net}</td>
            {number_cell(|l| l.metal_rate.to_string(), LineEdit::MetalRate)}
            {number_cell(|l| l.labour.to_string(), LineEdit::Labour)}
            <td class="table__cell table__cell--strong">{amount}</td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--danger"
                    title="Remove"
                    on:click=move |_| lines.update(|l| remove_line(l, &id))
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
}
