use serde::Deserialize;
use std::env;

pub const DEFAULT_PORT: &str = "5000";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server_port: String,
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let server_port = env::var("SERVER_PORT").unwrap_or_else(|_| DEFAULT_PORT.into());
        server_port
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("invalid SERVER_PORT {server_port:?}: {e}"))?;
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        Ok(Self {
            server_port,
            database_url,
        })
    }
}
