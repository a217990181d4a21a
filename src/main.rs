/// wavefeed - main entry point
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use wavefeed::{
    config::Config,
    routes,
    security::jwt::TokenIssuer,
    store::{InMemoryStore, PostStore, UserStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let store = Arc::new(InMemoryStore::new());
    let users: Arc<dyn UserStore> = store.clone();
    let posts: Arc<dyn PostStore> = store;
    let tokens = Arc::new(TokenIssuer::new(
        config.jwt_secret.as_bytes(),
        config.token_ttl_secs,
    ));

    let state = AppState::new(users, posts, tokens);
    let app = routes::app(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("wavefeed listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
