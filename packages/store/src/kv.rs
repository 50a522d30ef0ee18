//! # Key-value persistence seam
//!
//! The client persists exactly one thing across page loads: the bearer token,
//! stored under [`TOKEN_KEY`]. [`KeyValueStore`] abstracts the browser's
//! `localStorage` so the session logic in the `api` crate can be exercised
//! against [`crate::MemoryStore`] in tests.
//!
//! Implementations are synchronous because `localStorage` is. Write failures
//! (quota, private browsing) are swallowed: a token that fails to persist only
//! costs the user a fresh login on the next page load.

/// Fixed storage key for the bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
