/// Authentication handlers
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::PublicUser;
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(default)]
    pub avatar: String,
}

/// POST /auth
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    payload.validate()?;

    let token = state
        .auth
        .authenticate(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}

/// GET /auth
pub async fn me(State(state): State<AppState>, user: AuthUser) -> Result<Json<PublicUser>> {
    let profile = state.auth.current_user(user.0).await?;
    Ok(Json(profile))
}

/// POST /users
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<PublicUser>> {
    payload.validate()?;

    let created = state
        .auth
        .register(
            &payload.email,
            &payload.name,
            &payload.password,
            &payload.avatar,
        )
        .await?;

    Ok(Json(created))
}
