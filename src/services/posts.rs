/// Post lifecycle and ownership checks
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::{ApiError, Result};
use crate::store::{PostStore, UserStore};

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostStore>,
    users: Arc<dyn UserStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>, users: Arc<dyn UserStore>) -> Self {
        Self { posts, users }
    }

    /// Create a post, snapshotting the author's name and avatar.
    pub async fn create(&self, author_id: Uuid, text: &str) -> Result<Post> {
        let author = self
            .users
            .find_by_id(author_id)
            .await?
            .ok_or(ApiError::Unauthenticated)?;

        let post = Post::new(&author, text);
        self.posts.insert(post.clone()).await?;

        tracing::info!(post_id = %post.id, user_id = %author_id, "post created");
        Ok(post)
    }

    /// All posts, newest first.
    pub async fn list_all(&self) -> Result<Vec<Post>> {
        let mut posts = self.posts.find_all().await?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    pub async fn get(&self, post_id: Uuid) -> Result<Post> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or(ApiError::NotFound("post"))
    }

    /// Delete a post. Only the author may delete it; the post stays
    /// retrievable after a forbidden attempt.
    pub async fn delete(&self, post_id: Uuid, actor_id: Uuid) -> Result<()> {
        let post = self.get(post_id).await?;

        if !post.is_authored_by(actor_id) {
            return Err(ApiError::Forbidden);
        }

        self.posts.remove(post_id).await?;
        tracing::info!(post_id = %post_id, user_id = %actor_id, "post deleted");
        Ok(())
    }
}
