use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;

/// Application configuration loaded from environment variables.
///
/// `.env.{RUST_ENV}` is tried first, then `.env`, matching how the
/// deployments are provisioned.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Optional db.json fixture loaded into the document store at startup.
    pub seed_file: Option<PathBuf>,
    /// Directory for uploaded media. When unset, uploads are returned as
    /// inline data URLs instead of hosted files.
    pub media_root: Option<PathBuf>,
    /// Base URL under which stored media is reachable.
    pub public_base_url: String,
    /// CORS origins for the SPA. Empty means allow any (dev default).
    pub allowed_origins: Vec<String>,
    /// Fallback admin secret used when the profile document carries none.
    pub admin_password: Option<String>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Ok(AppConfig {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            seed_file: std::env::var("SEED_FILE").ok().map(PathBuf::from),
            media_root: std::env::var("MEDIA_ROOT").ok().map(PathBuf::from),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
            jwt: JwtConfig::from_env()?,
        })
    }
}

pub fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
