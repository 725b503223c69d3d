use std::sync::Arc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use serde_json::Value;

use super::view_model::StockDetailsViewModel;
use crate::domain::a012_stock_item::api::StockItems;
use crate::domain::a012_stock_item::ui::list::{StockEditor, StockLookups};
use crate::shared::api::ResourceClient;
use crate::shared::components::ui::Button;
use crate::shared::master::SchemaForm;
use crate::shared::modal::Modal;

/// Two-column add/edit dialog for a stock item.
#[component]
pub fn StockDetails(
    editor: StockEditor,
    client: ResourceClient<StockItems>,
    lookups: RwSignal<StockLookups>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = StockDetailsViewModel::new(editor, lookups);
    let error = vm.error;
    let saving = vm.saving;

    let on_change = {
        let vm = vm.clone();
        Callback::new(move |(name, value): (String, Value)| vm.change(&name, value))
    };
    let on_save = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.save_command(client.clone(), on_saved))
    };

    let footer = move || -> ChildrenFn {
        Arc::new(move || {
            view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>"Cancel"</Button>
                <Button on_click=on_save disabled=saving>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            }
            .into_any()
        })
    };

    view! {
        <Modal title=vm.title().to_string() on_close=on_close wide=true footer=footer()>
            {move || error.get().map(|message| view! {
                <div class="alert alert--error">{message}</div>
            })}
            <SchemaForm fields=vm.fields() draft=vm.draft on_change=on_change />
        </Modal>
    }
}
