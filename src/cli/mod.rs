//! Command-line interface.
//!
//! The dispatcher runs before the TUI starts:
//!
//! ```ignore
//! use arbkeys::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&args.command, &config).await {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod status;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand};
pub use status::{format_status_table, handle_status_command};
pub use version::{help_text, VERSION};

use color_eyre::Result;

use crate::config::ClientConfig;

/// Run a non-TUI command.
///
/// Returns `None` for [`CliCommand::RunTui`].
pub async fn run_cli_command(command: &CliCommand, config: &ClientConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("arbkeys {}", VERSION);
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", help_text());
            Some(Ok(()))
        }
        CliCommand::Status => Some(handle_status_command(config).await),
        CliCommand::RunTui => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_tui_returns_none() {
        let config = ClientConfig::default();
        assert!(run_cli_command(&CliCommand::RunTui, &config).await.is_none());
    }
}
