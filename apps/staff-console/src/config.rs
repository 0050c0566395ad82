use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const SESSION_FILE_NAME: &str = "session.json";
const APP_DIR_NAME: &str = "staff-console";

/// Client configuration loaded from environment variables (and `.env` if present).
/// Every value has a default, so a bare environment yields a usable local setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub session_file: PathBuf,
    /// `None` means requests wait indefinitely for the server.
    pub http_timeout: Option<Duration>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let http_timeout = match std::env::var("STAFF_HTTP_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(
                raw.parse::<u64>()
                    .context("STAFF_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            Err(_) => None,
        };

        let session_file = match std::env::var("STAFF_SESSION_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_session_file()?,
        };

        Ok(Config {
            api_base_url: std::env::var("STAFF_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            session_file,
            http_timeout,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        })
    }

    /// Origin of the API server, used for links to uploaded files.
    pub fn api_origin(&self) -> &str {
        api_origin(&self.api_base_url)
    }
}

/// Strips a trailing `/api` (or `/api/`) segment from the base URL.
pub fn api_origin(base: &str) -> &str {
    base.strip_suffix("/api/")
        .or_else(|| base.strip_suffix("/api"))
        .unwrap_or(base)
}

fn default_session_file() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(dir.join(APP_DIR_NAME).join(SESSION_FILE_NAME))
}
