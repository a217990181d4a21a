pub mod auth;
pub mod engagement;
pub mod posts;

pub use auth::AuthService;
pub use engagement::EngagementService;
pub use posts::PostService;
