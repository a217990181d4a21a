/// Domain models for the feed
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered identity. The stored password hash never leaves the process;
/// API responses use [`PublicUser`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: &str, email: &str, avatar: &str, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar.to_string(),
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Public projection of a user, with the credential hash omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// A single like. At most one entry per user may exist in a post's like
/// sequence; the Engagement service enforces this, the structure does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user_id: Uuid,
}

/// A comment embedded in a post. `author_name` and `author_avatar` are
/// snapshots taken at write time and are not kept in sync with later
/// profile changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_avatar: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &User, text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: author.id,
            text: text.to_string(),
            author_name: author.name.clone(),
            author_avatar: author.avatar.clone(),
            created_at: Utc::now(),
        }
    }
}

/// A post document. Likes and comments are embedded, most-recent-first.
/// Author name/avatar are write-time snapshots, same as for [`Comment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_avatar: String,
    pub created_at: DateTime<Utc>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn new(author: &User, text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: author.id,
            text: text.to_string(),
            author_name: author.name.clone(),
            author_avatar: author.avatar.clone(),
            created_at: Utc::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Only the author may delete the post or remove its comments.
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}
