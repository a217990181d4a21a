/// Engagement handlers - likes and comments
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Comment, Like, Post};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1))]
    pub text: String,
}

/// PUT /posts/like/{id}
pub async fn like_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<Like>>> {
    let likes = state.engagement.like(post_id, user.0).await?;
    Ok(Json(likes))
}

/// PUT /posts/unlike/{id}
pub async fn unlike_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<Like>>> {
    let likes = state.engagement.unlike(post_id, user.0).await?;
    Ok(Json(likes))
}

/// PUT /posts/comment/{id}
pub async fn add_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(payload): Json<CommentRequest>,
) -> Result<Json<Post>> {
    payload.validate()?;

    let post = state
        .engagement
        .add_comment(post_id, user.0, &payload.text)
        .await?;

    Ok(Json(post))
}

/// DELETE /posts/comment/{id}/{commentId}
pub async fn remove_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path((post_id, comment_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<Comment>>> {
    let comments = state
        .engagement
        .remove_comment(post_id, comment_id, user.0)
        .await?;

    Ok(Json(comments))
}
