//! Document store seam.
//!
//! The persistent store is an external collaborator; the services only see
//! these collection/document traits. The bundled [`memory::InMemoryStore`]
//! backs the binary and the test suite.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Post, User};

pub mod memory;

pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// User collection
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: User) -> StoreResult<()>;
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;
}

/// Post collection. `replace` is a whole-document write-back; callers are
/// responsible for serializing concurrent writers to the same post.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert(&self, post: Post) -> StoreResult<()>;
    async fn find_all(&self) -> StoreResult<Vec<Post>>;
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Post>>;
    async fn replace(&self, post: Post) -> StoreResult<()>;
    async fn remove(&self, id: Uuid) -> StoreResult<bool>;
}
