use leptos::prelude::*;

/// Form label with the required marker. Required is visual only.
#[component]
pub fn FieldLabel(
    #[prop(into)] text: String,
    #[prop(optional, into)] for_id: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form__label" for=move || for_id.get().unwrap_or_default()>
            {text}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}
