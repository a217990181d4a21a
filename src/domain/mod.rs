pub mod models;

pub use models::{Comment, Like, Post, PublicUser, User};
