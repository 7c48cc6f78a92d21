//! Runtime configuration.
//!
//! Values come from the environment and can be overridden by command-line
//! flags. The employee page size is not configurable.

use std::path::PathBuf;
use std::time::Duration;

use crate::client::DEFAULT_BASE_URL;

/// Backend origin.
pub const ENV_BASE_URL: &str = "ROLLCALL_BASE_URL";
/// Request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "ROLLCALL_TIMEOUT_SECS";
/// `tracing` filter directive, e.g. `debug` or `rollcall=trace`.
pub const ENV_LOG: &str = "ROLLCALL_LOG";
/// Log file path.
pub const ENV_LOG_FILE: &str = "ROLLCALL_LOG_FILE";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_FILTER: &str = "info";

/// Dashboard configuration.
///
/// Use the builder pattern to customize it.
///
/// # Example
///
/// ```ignore
/// use rollcall::config::Config;
///
/// let config = Config::from_env()
///     .with_base_url("http://10.0.0.5:8000")
///     .with_log_filter("debug");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend origin, without a trailing slash (default: http://localhost:8000)
    pub base_url: String,
    /// Per-request timeout (default: 10s)
    pub timeout: Duration,
    /// Tracing filter (default: info)
    pub log_filter: String,
    /// Explicit log file; `None` means the cache directory
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend origin. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Read configuration from `ROLLCALL_*` environment variables.
    ///
    /// Unset or empty variables keep their defaults, as does a timeout that
    /// is not a positive integer.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = env_value(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }
        if let Some(secs) = env_value(ENV_TIMEOUT_SECS)
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(filter) = env_value(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = env_value(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }

        config
    }

    /// Where logs are written: the explicit file, or
    /// `<cache dir>/rollcall/rollcall.log`.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::cache_dir().map(|dir| dir.join("rollcall").join("rollcall.log"))
        })
    }

    /// Absolute URL for a path on the backend, e.g. `/scan`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
