/// In-memory document store
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Post, User};

use super::{PostStore, StoreResult, UserStore};

#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert(&self, user: User) -> StoreResult<()> {
        self.users.write().await.insert(user.id, user);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl PostStore for InMemoryStore {
    async fn insert(&self, post: Post) -> StoreResult<()> {
        self.posts.write().await.insert(post.id, post);
        Ok(())
    }

    async fn find_all(&self) -> StoreResult<Vec<Post>> {
        Ok(self.posts.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Post>> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn replace(&self, post: Post) -> StoreResult<()> {
        self.posts.write().await.insert(post.id, post);
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.posts.write().await.remove(&id).is_some())
    }
}
