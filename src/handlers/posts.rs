/// Post handlers - HTTP endpoints for post lifecycle
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::Post;
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1))]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DeletePostResponse {
    pub deleted: Uuid,
}

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<Post>> {
    payload.validate()?;

    let post = state.posts.create(user.0, &payload.text).await?;
    Ok(Json(post))
}

/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<Post>>> {
    let posts = state.posts.list_all().await?;
    Ok(Json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Post>> {
    let post = state.posts.get(post_id).await?;
    Ok(Json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<DeletePostResponse>> {
    state.posts.delete(post_id, user.0).await?;
    Ok(Json(DeletePostResponse { deleted: post_id }))
}
