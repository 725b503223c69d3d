use leptos::prelude::*;

use crate::layout::global_context::use_global_context;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.left_open.get();

    view! {
        <div data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
