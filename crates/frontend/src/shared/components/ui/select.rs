use leptos::prelude::*;

use super::label::FieldLabel;

/// Dropdown over `(value, label)` pairs, headed by an empty choice.
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Text of the empty choice.
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let empty_label = move || placeholder.get().unwrap_or_else(|| "Select...".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <FieldLabel text=l for_id=id.get().unwrap_or_default() required=required />
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>{empty_label}</option>
                <For
                    each=move || options.get()
                    key=|(val, lbl)| (val.clone(), lbl.clone())
                    children=move |(val, lbl)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {lbl}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
