use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a sensible default — the service runs with no env at all,
/// serving whatever listings are already on disk.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file backing the listing store.
    pub listings_path: String,
    /// Optional external feed URL. When unset, the periodic refresh task is
    /// not started and POST /api/v1/jobs/refresh returns 404.
    pub listings_feed_url: Option<String>,
    /// Interval between feed refreshes, in seconds.
    pub refresh_interval_secs: u64,
    /// Hard cap on uploaded résumé size, in bytes.
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            listings_path: std::env::var("LISTINGS_PATH")
                .unwrap_or_else(|_| "data/listings.json".to_string()),
            listings_feed_url: std::env::var("LISTINGS_FEED_URL").ok(),
            refresh_interval_secs: std::env::var("REFRESH_INTERVAL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse::<u64>()
                .context("REFRESH_INTERVAL_SECS must be a number of seconds")?,
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| "5242880".to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
