//! Bearer-token session holder.

use store::{KeyValueStore, TOKEN_KEY};

/// Holds the bearer token in a [`KeyValueStore`] under [`TOKEN_KEY`].
///
/// There is no local expiry check: an expired token is discovered when the
/// server answers 401, at which point the client calls [`Session::clear`].
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// `Authorization` header for the current token, if any.
    pub fn authorization(&self) -> Option<(String, String)> {
        self.token()
            .map(|token| ("Authorization".to_string(), format!("Bearer {token}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_token_lifecycle() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        assert!(!session.is_logged_in());
        assert!(session.authorization().is_none());

        session.set_token("tok");
        assert!(session.is_logged_in());
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(
            session.authorization(),
            Some(("Authorization".to_string(), "Bearer tok".to_string()))
        );

        session.clear();
        assert!(!session.is_logged_in());
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_empty_token_is_logged_out() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "");
        assert!(!Session::new(store).is_logged_in());
    }
}
