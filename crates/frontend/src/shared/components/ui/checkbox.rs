use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group form__checkbox-wrapper">
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=checkbox_id>{label}</label>
        </div>
    }
}
