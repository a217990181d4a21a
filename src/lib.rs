//! wavefeed - social-feed backend
//!
//! Authenticated CRUD over user-authored posts with per-user likes and
//! threaded comments. Identity is proven by a stateless signed session
//! token; post mutations are ownership-gated and serialized per post.

use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod security;
pub mod services;
pub mod store;

use security::jwt::TokenIssuer;
use services::{AuthService, EngagementService, PostService};
use store::{PostStore, UserStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub posts: PostService,
    pub engagement: EngagementService,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        posts: Arc<dyn PostStore>,
        tokens: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            auth: AuthService::new(users.clone(), tokens.clone()),
            posts: PostService::new(posts.clone(), users.clone()),
            engagement: EngagementService::new(posts, users),
            tokens,
        }
    }
}
