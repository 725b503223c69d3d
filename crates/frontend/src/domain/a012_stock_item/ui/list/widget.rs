use contracts::domain::common::Record;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::state::{columns, load_lookups, StockEditor, StockLookups};
use crate::domain::a012_stock_item::api::{stock_row, StockItems};
use crate::domain::a012_stock_item::form::{empty_stock_draft, stock_draft_from_row};
use crate::domain::a012_stock_item::ui::details::StockDetails;
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::list_utils::SearchInput;
use crate::shared::master::{MasterCallbacks, MasterContainer, MasterViewModel};

#[component]
pub fn StockList() -> impl IntoView {
    let gateway = use_gateway();
    let client = ResourceClient::<StockItems>::new(gateway.clone());

    let lookups = RwSignal::new(StockLookups::default());
    let editor = RwSignal::new(None::<StockEditor>);

    let reload_lookups = move || {
        let gateway = gateway.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match load_lookups(gateway).await {
                Ok(loaded) => {
                    lookups.try_set(loaded);
                }
                Err(e) => log::error!("failed to fetch stock dependencies: {}", e),
            }
        });
    };
    reload_lookups();

    let fetch_client = client.clone();
    let delete_client = client.clone();
    let edit_reload = reload_lookups.clone();
    let callbacks = MasterCallbacks::new()
        .fetch(move || {
            let client = fetch_client.clone();
            async move {
                let items = client.get_all().await.map_err(|e| e.to_string())?;
                items.iter().map(stock_row).collect()
            }
        })
        .delete(move |id: String| {
            let client = delete_client.clone();
            async move { client.delete(&id).await.map_err(|e| e.to_string()) }
        })
        .on_edit(move |row: Record| {
            edit_reload();
            editor.set(Some(StockEditor {
                editing_id: row.id(),
                draft: stock_draft_from_row(&row),
            }));
        });
    let vm = MasterViewModel::new(callbacks);
    let state = vm.state;

    let on_search = {
        let vm = vm.clone();
        Callback::new(move |query: String| vm.set_search(query))
    };
    let on_add = Callback::new(move |_: MouseEvent| {
        reload_lookups();
        editor.set(Some(StockEditor {
            editing_id: None,
            draft: empty_stock_draft(),
        }));
    });
    let on_saved = {
        let vm = vm.clone();
        Callback::new(move |_: ()| {
            editor.set(None);
            vm.load_command();
        })
    };
    let search = Signal::derive(move || state.with(|s| s.search.clone()));

    view! {
        <div class="page stock-page">
            <PageHeader title="Stock Management" subtitle="Tagged stock on hand">
                <SearchInput value=search on_change=on_search placeholder="Search stock..." />
                <Button icon_name="plus" on_click=on_add>"Add Stock"</Button>
            </PageHeader>

            <MasterContainer
                title="Stock"
                columns=columns()
                fields=Vec::new()
                vm=vm
                hide_toolbar=true
            />

            {move || editor.get().map(|open| view! {
                <StockDetails
                    editor=open
                    client=client.clone()
                    lookups=lookups
                    on_close=Callback::new(move |_: ()| editor.set(None))
                    on_saved=on_saved
                />
            })}
        </div>
    }
}
