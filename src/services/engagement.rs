//! Like and comment mutations on post documents.
//!
//! Every operation is a read-modify-write of a whole post document. A
//! per-post async mutex serializes concurrent mutators of the same post so
//! the write-back cannot drop a concurrent like or comment; operations on
//! different posts proceed in parallel without coordination.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{Comment, Like, Post};
use crate::error::{ApiError, Result};
use crate::store::{PostStore, UserStore};

#[derive(Clone)]
pub struct EngagementService {
    posts: Arc<dyn PostStore>,
    users: Arc<dyn UserStore>,
    locks: Arc<DashMap<Uuid, Arc<Mutex<()>>>>,
}

impl EngagementService {
    pub fn new(posts: Arc<dyn PostStore>, users: Arc<dyn UserStore>) -> Self {
        Self {
            posts,
            users,
            locks: Arc::new(DashMap::new()),
        }
    }

    fn post_lock(&self, post_id: Uuid) -> Arc<Mutex<()>> {
        self.locks.entry(post_id).or_default().clone()
    }

    async fn load(&self, post_id: Uuid) -> Result<Post> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or(ApiError::NotFound("post"))
    }

    /// Add a like for `user_id`. At most one like per (post, user).
    pub async fn like(&self, post_id: Uuid, user_id: Uuid) -> Result<Vec<Like>> {
        let lock = self.post_lock(post_id);
        let _guard = lock.lock().await;

        let mut post = self.load(post_id).await?;

        if post.likes.iter().any(|l| l.user_id == user_id) {
            return Err(ApiError::DuplicateAction("post already liked"));
        }

        post.likes.insert(0, Like { user_id });
        self.posts.replace(post.clone()).await?;

        tracing::debug!(post_id = %post_id, user_id = %user_id, "post liked");
        Ok(post.likes)
    }

    /// Remove the caller's like, first match in the sequence.
    pub async fn unlike(&self, post_id: Uuid, user_id: Uuid) -> Result<Vec<Like>> {
        let lock = self.post_lock(post_id);
        let _guard = lock.lock().await;

        let mut post = self.load(post_id).await?;

        let idx = post
            .likes
            .iter()
            .position(|l| l.user_id == user_id)
            .ok_or(ApiError::InvalidState("post not liked"))?;

        post.likes.remove(idx);
        self.posts.replace(post.clone()).await?;

        tracing::debug!(post_id = %post_id, user_id = %user_id, "post unliked");
        Ok(post.likes)
    }

    /// Prepend a comment with author name/avatar snapshots.
    pub async fn add_comment(&self, post_id: Uuid, user_id: Uuid, text: &str) -> Result<Post> {
        let author = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::Unauthenticated)?;

        let lock = self.post_lock(post_id);
        let _guard = lock.lock().await;

        let mut post = self.load(post_id).await?;
        post.comments.insert(0, Comment::new(&author, text));
        self.posts.replace(post.clone()).await?;

        tracing::debug!(post_id = %post_id, user_id = %user_id, "comment added");
        Ok(post)
    }

    /// Remove a comment by id. Only the post's author may remove comments,
    /// regardless of who wrote them.
    pub async fn remove_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        actor_id: Uuid,
    ) -> Result<Vec<Comment>> {
        let lock = self.post_lock(post_id);
        let _guard = lock.lock().await;

        let mut post = self.load(post_id).await?;

        let idx = post
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(ApiError::NotFound("comment"))?;

        if !post.is_authored_by(actor_id) {
            return Err(ApiError::Forbidden);
        }

        post.comments.remove(idx);
        self.posts.replace(post.clone()).await?;

        tracing::debug!(post_id = %post_id, comment_id = %comment_id, "comment removed");
        Ok(post.comments)
    }
}
