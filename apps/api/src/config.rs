use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `cargo run` works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory where uploaded resumes are persisted before extraction.
    pub upload_dir: PathBuf,
    /// Optional JSON file overriding the compiled-in role catalog.
    pub role_catalog_path: Option<PathBuf>,
    /// How long a stored career projection stays fetchable by id.
    pub result_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            role_catalog_path: std::env::var("ROLE_CATALOG_PATH").ok().map(PathBuf::from),
            result_ttl_secs: std::env::var("RESULT_TTL_SECS")
                .unwrap_or_else(|_| "900".to_string())
                .parse::<i64>()
                .context("RESULT_TTL_SECS must be a number of seconds")?,
        })
    }
}
