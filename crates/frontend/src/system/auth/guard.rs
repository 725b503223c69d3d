use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::context::use_session;

pub const SIGN_IN_PATH: &str = "/signin";

const PUBLIC_PATHS: [&str; 7] = [
    SIGN_IN_PATH,
    "/signup",
    "/reset-password",
    "/favicon.ico",
    "/manifest.json",
    "/robots.txt",
    "/sitemap.xml",
];

const PUBLIC_PREFIXES: [&str; 3] = ["/static", "/images", "/api"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToSignIn,
    RedirectHome,
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
        || PUBLIC_PREFIXES
            .iter()
            .any(|prefix| path == *prefix || path.starts_with(&format!("{}/", prefix)))
}

pub fn guard_decision(path: &str, authenticated: bool) -> GuardDecision {
    if authenticated && path == SIGN_IN_PATH {
        return GuardDecision::RedirectHome;
    }
    if !authenticated && !is_public_path(path) {
        return GuardDecision::RedirectToSignIn;
    }
    GuardDecision::Allow
}

/// Renders `children` only when the current path may be shown.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let decision =
        Memo::new(move |_| guard_decision(&location.pathname.get(), session.is_authenticated()));

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::RedirectToSignIn => view! { <Redirect path=SIGN_IN_PATH /> }.into_any(),
        GuardDecision::RedirectHome => view! { <Redirect path="/" /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_user_is_sent_to_sign_in() {
        assert_eq!(guard_decision("/", false), GuardDecision::RedirectToSignIn);
        assert_eq!(guard_decision("/masters/customers", false), GuardDecision::RedirectToSignIn);
    }

    #[test]
    fn public_paths_stay_open() {
        for path in ["/signin", "/signup", "/reset-password", "/robots.txt", "/static/app.css", "/api/x"] {
            assert_eq!(guard_decision(path, false), GuardDecision::Allow, "{}", path);
        }
        assert!(!is_public_path("/apiary"));
    }

    #[test]
    fn signed_in_user_leaves_sign_in_page() {
        assert_eq!(guard_decision("/signin", true), GuardDecision::RedirectHome);
        assert_eq!(guard_decision("/sales", true), GuardDecision::Allow);
        assert_eq!(guard_decision("/signup", true), GuardDecision::Allow);
    }
}
