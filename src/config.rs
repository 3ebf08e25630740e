//! Runtime configuration.
//!
//! Defaults can be overridden through the environment ([`ClientConfig::from_env`])
//! and then by command-line flags. Call [`ClientConfig::validate`] before use.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `ARBKEYS_URL` | backend base URL | `http://127.0.0.1:8000` |
//! | `ARBKEYS_EXCHANGES` | comma-separated exchange ids | `binance,kucoin,mexc,okx,gateio,bybit` |
//! | `ARBKEYS_POLL_SECS` | status refresh interval | `5` |
//! | `ARBKEYS_TIMEOUT_SECS` | per-request timeout | transport default |
//! | `ARBKEYS_LOG` | tracing filter directive | `info` |
//! | `ARBKEYS_LOG_FILE` | log file path | `<data dir>/arbkeys/arbkeys.log` |

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::exchange::is_valid_exchange_id;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_EXCHANGES: [&str; 6] = ["binance", "kucoin", "mexc", "okx", "gateio", "bybit"];
pub const DEFAULT_POLL_SECS: u64 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_URL: &str = "ARBKEYS_URL";
pub const ENV_EXCHANGES: &str = "ARBKEYS_EXCHANGES";
pub const ENV_POLL_SECS: &str = "ARBKEYS_POLL_SECS";
pub const ENV_TIMEOUT_SECS: &str = "ARBKEYS_TIMEOUT_SECS";
pub const ENV_LOG: &str = "ARBKEYS_LOG";
pub const ENV_LOG_FILE: &str = "ARBKEYS_LOG_FILE";

/// Errors from building or validating a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("backend URL must start with http:// or https://, got '{0}'")]
    InvalidUrl(String),

    #[error("at least one exchange must be configured")]
    NoExchanges,

    #[error("invalid exchange id '{0}': use lowercase letters, digits, '_' or '-'")]
    InvalidExchange(String),

    #[error("{name} must be a whole number of seconds >= 1, got '{value}'")]
    InvalidSeconds { name: &'static str, value: String },
}

/// Configuration for the client and its timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash
    pub base_url: String,
    /// Exchanges shown in the form, in display order
    pub exchanges: Vec<String>,
    /// Interval of the status reconciler and the health monitor
    pub poll_interval: Duration,
    /// Per-request timeout; `None` keeps the transport default
    pub request_timeout: Option<Duration>,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Log file override
    pub log_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            exchanges: DEFAULT_EXCHANGES.iter().map(|e| e.to_string()).collect(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            request_timeout: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the exchange list.
    pub fn with_exchanges<I, S>(mut self, exchanges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exchanges = exchanges.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
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

    /// Build a configuration from the `ARBKEYS_*` environment variables.
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = env_var(ENV_URL) {
            config = config.with_base_url(url);
        }
        if let Some(list) = env_var(ENV_EXCHANGES) {
            config = config.with_exchanges(parse_exchange_list(&list));
        }
        if let Some(secs) = env_var(ENV_POLL_SECS) {
            config.poll_interval = parse_seconds(ENV_POLL_SECS, &secs)?;
        }
        if let Some(secs) = env_var(ENV_TIMEOUT_SECS) {
            config.request_timeout = Some(parse_seconds(ENV_TIMEOUT_SECS, &secs)?);
        }
        if let Some(filter) = env_var(ENV_LOG) {
            config.log_filter = filter;
        }
        if let Some(path) = env_var(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidUrl(self.base_url.clone()));
        }

        if self.exchanges.is_empty() {
            return Err(ConfigError::NoExchanges);
        }
        if let Some(bad) = self.exchanges.iter().find(|e| !is_valid_exchange_id(e)) {
            return Err(ConfigError::InvalidExchange(bad.clone()));
        }

        if self.poll_interval < Duration::from_secs(1) {
            return Err(ConfigError::InvalidSeconds {
                name: ENV_POLL_SECS,
                value: format!("{:?}", self.poll_interval),
            });
        }
        Ok(())
    }

    /// Resolved log file path, if one can be determined.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::data_local_dir().map(|d| d.join("arbkeys").join("arbkeys.log")))
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a comma-separated list, trimming and lowercasing each id.
pub fn parse_exchange_list(list: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for id in list.split(',').map(|s| s.trim().to_lowercase()) {
        if !id.is_empty() && !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

fn parse_seconds(name: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs >= 1 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidSeconds {
            name,
            value: value.to_string(),
        }),
    }
}
