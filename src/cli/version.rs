//! Version and help output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn help_text() -> String {
    format!(
        "arbkeys {VERSION}
Manage exchange API credentials on an arbitrage dashboard backend.

USAGE:
    arbkeys [OPTIONS]

OPTIONS:
    --url <URL>     Backend base URL (overrides ARBKEYS_URL)
    --status        Print stored credential status and exit
    -V, --version   Print version and exit
    -h, --help      Print this help and exit

ENVIRONMENT:
    ARBKEYS_URL, ARBKEYS_EXCHANGES, ARBKEYS_POLL_SECS,
    ARBKEYS_TIMEOUT_SECS, ARBKEYS_LOG, ARBKEYS_LOG_FILE"
    )
}
