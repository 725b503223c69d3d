//! Token persistence: a `SameSite=Strict` cookie plus localStorage.
//! Reads prefer the cookie.

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

use crate::shared::config::{TOKEN_COOKIE_MAX_AGE_SECS, TOKEN_KEY};

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Persist the access token to both stores.
pub fn save_access_token(token: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&token_cookie(token));
    }
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn get_access_token() -> Option<String> {
    let from_cookie = html_document()
        .and_then(|d| d.cookie().ok())
        .and_then(|cookies| cookie_value(&cookies, TOKEN_KEY));
    from_cookie.or_else(|| {
        get_local_storage()?
            .get_item(TOKEN_KEY)
            .ok()?
            .filter(|t| !t.is_empty())
    })
}

pub fn clear_tokens() {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&expired_cookie());
    }
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

pub fn token_cookie(token: &str) -> String {
    format!(
        "{}={}; path=/; max-age={}; SameSite=Strict",
        TOKEN_KEY,
        urlencoding::encode(token),
        TOKEN_COOKIE_MAX_AGE_SECS
    )
}

pub fn expired_cookie() -> String {
    format!("{}=; path=/; max-age=0; SameSite=Strict", TOKEN_KEY)
}

/// Value of `key` in a `document.cookie` string.
pub fn cookie_value(cookies: &str, key: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_carries_expiry_and_same_site() {
        let cookie = token_cookie("abc.def");
        assert!(cookie.starts_with("accessToken=abc.def;"));
        assert!(cookie.contains("max-age=86400"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(expired_cookie().contains("max-age=0"));
    }

    #[test]
    fn reads_token_among_other_cookies() {
        let cookies = "theme=dark; accessToken=eyJhbGci%3D; lang=en";
        assert_eq!(cookie_value(cookies, "accessToken").as_deref(), Some("eyJhbGci="));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("accessToken=", "accessToken"), None);
    }
}
