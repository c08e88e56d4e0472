// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    seed_demo_content: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| default_listen_addr())
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid(format!("LISTEN_ADDR: {err}")))?;

        let seed_demo_content = env::var("SEED_DEMO_CONTENT")
            .ok()
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            seed_demo_content,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Whether to populate the in-memory store with sample items at startup.
    pub fn seed_demo_content(&self) -> bool {
        self.seed_demo_content
    }
}
