/// Router assembly
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, engagement, posts};
use crate::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/auth", post(auth::login).get(auth::me))
        .route("/users", post(auth::register))
        .route("/posts", post(posts::create_post).get(posts::list_posts))
        .route(
            "/posts/:id",
            get(posts::get_post).delete(posts::delete_post),
        )
        .route("/posts/like/:id", put(engagement::like_post))
        .route("/posts/unlike/:id", put(engagement::unlike_post))
        .route("/posts/comment/:id", put(engagement::add_comment))
        .route(
            "/posts/comment/:id/:comment_id",
            delete(engagement::remove_comment),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
