use std::sync::Arc;

use contracts::domain::a013_order::aggregate::{OrderStatus, OrderStatusUpdate};
use contracts::domain::common::Record;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::domain::a013_order::api::update_order_status;
use crate::shared::api::Gateway;
use crate::shared::components::ui::{Button, Select, Textarea};
use crate::shared::modal::Modal;

fn status_update(status: &str, remarks: &str) -> Result<OrderStatusUpdate, String> {
    let status = OrderStatus::from_code(status).ok_or_else(|| "Status is required".to_string())?;
    let remarks = remarks.trim();
    Ok(OrderStatusUpdate {
        status,
        remarks: (!remarks.is_empty()).then(|| remarks.to_string()),
    })
}

/// Moves an order to another status with optional remarks.
#[component]
pub fn StatusDialog(
    order: Record,
    gateway: Gateway,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let order_id = order.id().unwrap_or_default();
    let title = format!("Update Status: {}", order.text("orderId"));
    let status = RwSignal::new(order.text("status"));
    let remarks = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let options: Vec<(String, String)> = OrderStatus::ALL
        .iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect();

    let on_save = Callback::new(move |_: MouseEvent| {
        let body = match status_update(&status.get_untracked(), &remarks.get_untracked()) {
            Ok(body) => body,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let gateway = gateway.clone();
        let order_id = order_id.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match update_order_status(&gateway, &order_id, &body).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("failed to update status of order {}: {}", order_id, e);
                    error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    let footer = move || -> ChildrenFn {
        Arc::new(move || {
            view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>"Cancel"</Button>
                <Button on_click=on_save>"Update"</Button>
            }
            .into_any()
        })
    };

    view! {
        <Modal title=title on_close=on_close footer=footer()>
            {move || error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
            <div class="form">
                <Select
                    label="Status"
                    value=status
                    on_change=Callback::new(move |v: String| status.set(v))
                    options=options
                    required=true
                />
                <Textarea
                    label="Remarks"
                    value=remarks
                    on_input=Callback::new(move |v: String| remarks.set(v))
                    placeholder="Reason for the change..."
                />
            </div>
        </Modal>
    }
}
