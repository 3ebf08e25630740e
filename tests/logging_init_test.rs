//! Global logger installation.
//!
//! Kept in its own test binary: the global subscriber can only be set once
//! per process.

use arbkeys::config::ClientConfig;
use arbkeys::logging::{init_logging, LoggingError};

#[test]
fn test_init_logging_writes_to_configured_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("arbkeys.log");
    let config = ClientConfig::new()
        .with_log_file(&path)
        .with_log_filter("debug");

    let installed = init_logging(&config).unwrap();
    assert_eq!(installed, path);

    tracing::info!(exchange = "binance", "Credentials saved");
    tracing::debug!(target: "hyper", "connection pooled");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Logging initialized"));
    assert!(contents.contains("Credentials saved"));
    assert!(contents.contains("binance"));
    assert!(!contents.contains("connection pooled"));

    assert!(matches!(
        init_logging(&config),
        Err(LoggingError::AlreadyInstalled)
    ));
}
