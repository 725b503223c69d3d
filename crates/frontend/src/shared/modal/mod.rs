use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Escape, the overlay and the close button all call
/// `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    /// Two-column body for wide forms.
    #[prop(optional)]
    wide: bool,
    /// Footer buttons (Save, Cancel, ...).
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();
    let modal_class = if wide { "modal modal--wide" } else { "modal" };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=modal_class on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer()}</div> })}
            </div>
        </div>
    }
}
