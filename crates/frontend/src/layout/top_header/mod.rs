//! Top bar: sidebar toggle, brand and sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_session};
use crate::system::auth::guard::SIGN_IN_PATH;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(session);
        navigate(SIGN_IN_PATH, Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Jewel Admin"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                    <span>"Sign out"</span>
                </button>
            </div>
        </div>
    }
}
