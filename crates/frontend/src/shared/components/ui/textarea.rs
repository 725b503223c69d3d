use leptos::prelude::*;

use super::label::FieldLabel;

#[component]
pub fn Textarea(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] required: bool,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--wide">
            {move || label.get().map(|l| view! { <FieldLabel text=l required=required /> })}
            <textarea
                class="form__textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=disabled
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
