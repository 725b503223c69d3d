use contracts::domain::a015_ledger::aggregate::Ledger;
use contracts::domain::a016_voucher::aggregate::Voucher;
use leptos::prelude::*;

use crate::dashboards::d401_accounts::api::{fetch_ledgers, fetch_vouchers, voucher_row};
use crate::shared::api::use_gateway;
use crate::shared::master::{ColumnSchema, MasterTable};

fn columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("date", "Date"),
        ColumnSchema::new("voucherNo", "Voucher No"),
        ColumnSchema::new("type", "Type"),
        ColumnSchema::new("ledgerName", "Ledger"),
        ColumnSchema::new("amount", "Amount"),
        ColumnSchema::new("narration", "Narration"),
    ]
}

/// Day book: every voucher, read-only.
#[component]
pub fn VouchersTab() -> impl IntoView {
    let gateway = use_gateway();
    let vouchers = RwSignal::new(Vec::<Voucher>::new());
    let ledgers = RwSignal::new(Vec::<Ledger>::new());
    let (loading, set_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        let (loaded_vouchers, loaded_ledgers) =
            futures::join!(fetch_vouchers(&gateway), fetch_ledgers(&gateway));
        vouchers.try_set(loaded_vouchers);
        ledgers.try_set(loaded_ledgers);
        set_loading.try_set(false);
    });

    let rows = Signal::derive(move || {
        ledgers.with(|l| vouchers.with(|v| v.iter().map(|voucher| voucher_row(voucher, l)).collect::<Vec<_>>()))
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            <MasterTable columns=columns() rows=rows show_actions=false />
        </Show>
    }
}
