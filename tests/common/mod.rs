#![allow(dead_code)]

use std::sync::Arc;

use wavefeed::security::jwt::TokenIssuer;
use wavefeed::store::{InMemoryStore, PostStore, UserStore};
use wavefeed::AppState;

pub const TEST_SECRET: &str = "wavefeed-test-secret";

/// Application state over a fresh in-memory store.
pub fn test_state(ttl_secs: i64) -> AppState {
    let store = Arc::new(InMemoryStore::new());
    let users: Arc<dyn UserStore> = store.clone();
    let posts: Arc<dyn PostStore> = store;
    let tokens = Arc::new(TokenIssuer::new(TEST_SECRET.as_bytes(), ttl_secs));
    AppState::new(users, posts, tokens)
}
