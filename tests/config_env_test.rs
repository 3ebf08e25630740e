//! Environment-driven configuration tests.
//!
//! These mutate process environment variables, so they run serially.

use arbkeys::config::{
    ClientConfig, ConfigError, DEFAULT_BASE_URL, ENV_EXCHANGES, ENV_LOG, ENV_LOG_FILE,
    ENV_POLL_SECS, ENV_TIMEOUT_SECS, ENV_URL,
};
use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;

const ALL_VARS: [&str; 6] = [
    ENV_URL,
    ENV_EXCHANGES,
    ENV_POLL_SECS,
    ENV_TIMEOUT_SECS,
    ENV_LOG,
    ENV_LOG_FILE,
];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_unset_environment_gives_defaults() {
    clear_env();
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
#[serial]
fn test_every_variable_is_read() {
    clear_env();
    std::env::set_var(ENV_URL, "http://10.0.0.5:9000/");
    std::env::set_var(ENV_EXCHANGES, " Binance, kraken ,binance,");
    std::env::set_var(ENV_POLL_SECS, "10");
    std::env::set_var(ENV_TIMEOUT_SECS, "3");
    std::env::set_var(ENV_LOG, "arbkeys=debug");
    std::env::set_var(ENV_LOG_FILE, "/tmp/arbkeys-test.log");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.base_url, "http://10.0.0.5:9000");
    assert_eq!(config.exchanges, vec!["binance", "kraken"]);
    assert_eq!(config.poll_interval, Duration::from_secs(10));
    assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
    assert_eq!(config.log_filter, "arbkeys=debug");
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/arbkeys-test.log")));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_blank_variables_keep_defaults() {
    clear_env();
    std::env::set_var(ENV_URL, "   ");
    std::env::set_var(ENV_EXCHANGES, "");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.exchanges, ClientConfig::default().exchanges);
}

#[test]
#[serial]
fn test_bad_interval_is_reported() {
    clear_env();
    std::env::set_var(ENV_POLL_SECS, "often");

    let err = ClientConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(
        err,
        ConfigError::InvalidSeconds {
            name: ENV_POLL_SECS,
            value: "often".to_string(),
        }
    );
}

#[test]
#[serial]
fn test_invalid_url_fails_validation() {
    clear_env();
    std::env::set_var(ENV_URL, "localhost:8000");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));
}
