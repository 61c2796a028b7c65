use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults match a local checkout.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file backing the seeded showcase profile. Wiped on every start.
    pub showcase_database_path: String,
    /// SQLite file backing the profile directory. Persistent.
    pub directory_database_path: String,
    /// Document served at `/`.
    pub static_index: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            showcase_database_path: env_or("SHOWCASE_DATABASE_PATH", "meapi.db"),
            directory_database_path: env_or("DIRECTORY_DATABASE_PATH", "profiles.db"),
            static_index: env_or("STATIC_INDEX", "static/index.html"),
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
