/// Session guard: bearer-token extraction on protected routes
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Identity resolved from the session token. Extracting this is the single
/// gate every protected handler passes through; it knows nothing about the
/// operation being performed.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthenticated)?;

        let user_id = state.tokens.resolve(token)?;
        Ok(AuthUser(user_id))
    }
}
