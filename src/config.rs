/// Configuration management
use serde::Deserialize;

/// Default session token lifetime in seconds.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 36_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub server_host: String,
    #[serde(default = "default_port")]
    pub server_port: u16,
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: i64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_token_ttl() -> i64 {
    DEFAULT_TOKEN_TTL_SECS
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
