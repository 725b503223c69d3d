use leptos::prelude::*;

use super::session::Session;
use super::{api, storage};
use crate::shared::api::Gateway;
use crate::shared::config::AppConfig;

/// Provides the [`Session`] (restored from storage) and the [`Gateway`].
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = Session::new(storage::get_access_token());
    let config = use_context::<AppConfig>().unwrap_or_default();

    provide_context(session);
    provide_context(Gateway::new(config, session));

    children()
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("AuthProvider not found in component tree")
}

/// Sign in, persist the token and flip the session.
pub async fn do_login(
    gateway: &Gateway,
    session: Session,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(gateway, email, password)
        .await
        .map_err(|e| e.to_string())?;

    storage::save_access_token(&response.access_token);
    session.sign_in(response.access_token);
    log::info!("signed in");
    Ok(())
}

pub fn do_logout(session: Session) {
    storage::clear_tokens();
    session.sign_out();
    log::info!("signed out");
}
