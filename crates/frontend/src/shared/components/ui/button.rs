use leptos::prelude::*;

use crate::shared::icons::icon;

/// Toolbar and row-action button: "primary" (default), "secondary",
/// "ghost" or "danger", with an optional leading icon.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] icon_name: MaybeProp<String>,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    on_click: Callback<leptos::ev::MouseEvent>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button button--secondary",
        "ghost" => "button button--ghost",
        "danger" => "button button--danger",
        _ => "button button--primary",
    };

    view! {
        <button
            type="button"
            class=variant_class
            title=move || title.get().unwrap_or_default()
            disabled=move || disabled.get()
            on:click=move |ev| on_click.run(ev)
        >
            {move || icon_name.get().map(|name| icon(&name))}
            {children.map(|c| c())}
        </button>
    }
}
