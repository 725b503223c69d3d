use leptos::prelude::*;
use web_sys::HtmlInputElement;

use super::label::FieldLabel;

/// Single-line input. Reports the raw string on every keystroke.
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "number", "email", "password", "date".
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] hint: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <FieldLabel text=l for_id=id.get().unwrap_or_default() required=required />
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                step=move || (input_t() == "number").then_some("any")
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || hint.get().map(|h| view! { <small class="form__hint">{h}</small> })}
        </div>
    }
}

/// File picker. Reports the chosen file name; the current value is shown
/// beneath the control.
#[component]
pub fn FileInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_select: Callback<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <FieldLabel text=label required=required />
            <input
                type="file"
                class="form__input"
                disabled=disabled
                on:change=move |ev| {
                    let input = event_target::<HtmlInputElement>(&ev);
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        on_select.run(file.name());
                    }
                }
            />
            <Show when=move || !value.get().is_empty()>
                <small class="form__hint">{move || value.get()}</small>
            </Show>
        </div>
    }
}
