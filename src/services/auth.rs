/// Credential verification and registration
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{PublicUser, User};
use crate::error::{ApiError, Result};
use crate::security::{jwt::TokenIssuer, password};
use crate::store::UserStore;

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenIssuer>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenIssuer>) -> Self {
        Self { users, tokens }
    }

    /// Check an email+password pair and issue a session token.
    ///
    /// An unknown email and a failed password check produce the same
    /// `InvalidCredential`; a failed check short-circuits before issuance.
    pub async fn authenticate(&self, email: &str, secret: &str) -> Result<String> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(ApiError::InvalidCredential)?;

        password::verify(secret, &user.password_hash)?;

        let token = self.tokens.issue(user.id)?;
        tracing::info!(user_id = %user.id, "session token issued");
        Ok(token)
    }

    pub async fn register(
        &self,
        email: &str,
        name: &str,
        secret: &str,
        avatar: &str,
    ) -> Result<PublicUser> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(ApiError::InvalidInput("email already registered".to_string()));
        }

        let password_hash = password::hash(secret)?;
        let user = User::new(name, email, avatar, password_hash);
        self.users.insert(user.clone()).await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(PublicUser::from(&user))
    }

    /// Resolve an authenticated id to its public profile.
    pub async fn current_user(&self, user_id: Uuid) -> Result<PublicUser> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("user"))?;
        Ok(PublicUser::from(&user))
    }
}
