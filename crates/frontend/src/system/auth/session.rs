use leptos::prelude::*;

/// Signed-in state shared by the gateway, the route guard and the shell.
///
/// The token is set at sign-in, cleared at sign-out and read on every
/// request. Persistence is handled by [`super::storage`].
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwSignal::new(token.filter(|t| !t.is_empty())),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    pub fn sign_in(&self, token: String) {
        self.token.set(Some(token));
    }

    pub fn sign_out(&self) {
        self.token.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_anonymous() {
        let session = Session::new(Some(String::new()));
        assert_eq!(session.token_untracked(), None);
    }

    #[test]
    fn sign_in_and_out() {
        let session = Session::new(None);
        session.sign_in("jwt".into());
        assert_eq!(session.token_untracked().as_deref(), Some("jwt"));
        session.sign_out();
        assert_eq!(session.token_untracked(), None);
    }
}
