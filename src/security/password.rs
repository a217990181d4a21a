/// Password hashing and verification using Argon2id
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};

use crate::error::ApiError;

/// Hash a password for storage.
pub fn hash(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(rand::thread_rng());

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|_| ApiError::Internal("failed to hash password".to_string()))
}

/// Verify a password against a stored hash. A mismatch maps to
/// `InvalidCredential`, indistinguishable from an unknown user.
pub fn verify(password: &str, hash: &str) -> Result<(), ApiError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|_| ApiError::Internal("stored password hash is malformed".to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| ApiError::InvalidCredential)
}
