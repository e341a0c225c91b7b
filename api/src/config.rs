//! Runtime configuration, read from environment variables with in-code
//! defaults.
//!
//! Native builds read the variables when the app starts. A wasm build has no
//! process environment, so the same names are captured at compile time.

use std::path::PathBuf;
use std::time::Duration;

use dioxus_logger::tracing::Level;

/// Where the mock API lives unless `FINTECH_API_URL` says otherwise.
pub const DEFAULT_API_URL: &str = "https://6779319f482f42b62e90a739.mockapi.io/api/v1";

/// Rows per table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Directory used by the native file slot.
pub const DEFAULT_DATA_DIR: &str = ".fintech-dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the mock API, without a trailing slash.
    pub base_url: String,
    pub page_size: usize,
    /// Directory holding the native key-value slot file.
    pub data_dir: PathBuf,
    /// Request timeout. Only honoured on native targets.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Creates an `ApiConfig` from environment variables.
    ///
    /// # Environment Variables
    /// - `FINTECH_API_URL`: base URL of the mock API.
    /// - `FINTECH_PAGE_SIZE`: rows per page, must be a positive integer.
    /// - `FINTECH_DATA_DIR`: directory for the native slot file.
    /// - `FINTECH_HTTP_TIMEOUT_SECS`: request timeout in whole seconds.
    ///
    /// Missing or malformed values fall back to the defaults above.
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("FINTECH_API_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let page_size = lookup("FINTECH_PAGE_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let data_dir = lookup("FINTECH_DATA_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let timeout = lookup("FINTECH_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            base_url,
            page_size,
            data_dir,
            timeout,
        }
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Log level for the launchers, from `FINTECH_LOG_LEVEL` (default `INFO`).
pub fn log_level() -> Level {
    env_var("FINTECH_LOG_LEVEL")
        .and_then(|s| s.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

#[cfg(not(target_arch = "wasm32"))]
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_var(name: &str) -> Option<String> {
    let value = match name {
        "FINTECH_API_URL" => option_env!("FINTECH_API_URL"),
        "FINTECH_PAGE_SIZE" => option_env!("FINTECH_PAGE_SIZE"),
        "FINTECH_DATA_DIR" => option_env!("FINTECH_DATA_DIR"),
        "FINTECH_HTTP_TIMEOUT_SECS" => option_env!("FINTECH_HTTP_TIMEOUT_SECS"),
        "FINTECH_LOG_LEVEL" => option_env!("FINTECH_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}
