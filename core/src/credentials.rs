//! How outgoing requests prove who the user is.
//!
//! Most of the app relies on the session cookies the backend sets
//! (`AccessToken`, `RefreshToken`, `deviceId`, `adminAuthToken`). The
//! assistant chat instead sends a bearer token kept in local storage. Both
//! are expressed as a [`CredentialProvider`] so the HTTP layer does not
//! special-case either.

/// Key under which the chat bearer token is stored.
pub const TOKEN_STORAGE_KEY: &str = "token";

pub trait CredentialProvider {
    /// Value for the `Authorization` header, if this scheme uses one.
    fn authorization(&self) -> Option<String>;

    /// Whether browser cookies travel with the request.
    fn include_cookies(&self) -> bool {
        true
    }
}

/// Session cookies only; the browser attaches them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CookieCredentials;

impl CredentialProvider for CookieCredentials {
    fn authorization(&self) -> Option<String> {
        None
    }
}

/// Anything that can hand back a previously stored token.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
}

/// Bearer token read from a [`TokenStore`] on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredTokenCredentials<S> {
    store: S,
}

impl<S: TokenStore> StoredTokenCredentials<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: TokenStore> CredentialProvider for StoredTokenCredentials<S> {
    fn authorization(&self) -> Option<String> {
        self.store
            .token()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {t}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticToken(Option<String>);

    impl TokenStore for StaticToken {
        fn token(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn cookies_send_no_header() {
        assert_eq!(CookieCredentials.authorization(), None);
        assert!(CookieCredentials.include_cookies());
    }

    #[test]
    fn stored_token_becomes_bearer_header() {
        let creds = StoredTokenCredentials::new(StaticToken(Some("abc.def".into())));
        assert_eq!(creds.authorization().as_deref(), Some("Bearer abc.def"));
    }

    #[test]
    fn missing_or_blank_token_sends_nothing() {
        let none = StoredTokenCredentials::new(StaticToken(None));
        let blank = StoredTokenCredentials::new(StaticToken(Some("  ".into())));
        assert_eq!(none.authorization(), None);
        assert_eq!(blank.authorization(), None);
    }
}
