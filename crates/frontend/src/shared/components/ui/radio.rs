use leptos::prelude::*;

use super::label::FieldLabel;

/// Radio buttons sharing one `name`. Reports the chosen option's value.
#[component]
pub fn RadioGroup(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] name: String,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <FieldLabel text=l required=required /> })}
            <div class="form__radio-group">
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, lbl)| {
                        let radio_id = format!("radio-{}-{}", name, val);
                        let for_check = val.clone();
                        let for_change = val.clone();
                        view! {
                            <div class="form__radio-wrapper">
                                <input
                                    id=radio_id.clone()
                                    type="radio"
                                    class="form__radio"
                                    name=name.clone()
                                    value=val
                                    checked=move || value.get() == for_check
                                    disabled=disabled
                                    on:change=move |_| on_change.run(for_change.clone())
                                />
                                <label class="form__radio-label" for=radio_id>{lbl}</label>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
