//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the stored credential status and exit
    Status,
    /// Run the TUI application (default)
    RunTui,
}

/// Everything parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--url` override for the backend base URL
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("unknown argument '{0}' (try --help)")]
    Unknown(String),
}

/// Parse command-line arguments. The first item is the program name.
///
/// ```
/// use arbkeys::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["arbkeys".to_string(), "--status".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Status);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::RunTui;
    let mut url = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => command = CliCommand::Version,
            "--help" | "-h" => command = CliCommand::Help,
            "--status" => {
                if command == CliCommand::RunTui {
                    command = CliCommand::Status;
                }
            }
            "--url" => {
                let value = args.next().ok_or(ArgsError::MissingValue("--url"))?;
                url = Some(value);
            }
            other => match other.strip_prefix("--url=") {
                Some("") => return Err(ArgsError::MissingValue("--url")),
                Some(value) => url = Some(value.to_string()),
                None => return Err(ArgsError::Unknown(other.to_string())),
            },
        }
        if matches!(command, CliCommand::Version | CliCommand::Help) {
            break;
        }
    }

    Ok(CliArgs { command, url })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ArgsError> {
        let mut all = vec!["arbkeys".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            parse(&[]),
            Ok(CliArgs {
                command: CliCommand::RunTui,
                url: None
            })
        );
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
    }

    #[test]
    fn test_parse_status_with_url() {
        let args = parse(&["--status", "--url", "http://10.0.0.2:8000"]).unwrap();
        assert_eq!(args.command, CliCommand::Status);
        assert_eq!(args.url.as_deref(), Some("http://10.0.0.2:8000"));

        let args = parse(&["--url=http://h:1"]).unwrap();
        assert_eq!(args.command, CliCommand::RunTui);
        assert_eq!(args.url.as_deref(), Some("http://h:1"));
    }

    #[test]
    fn test_help_wins_over_later_arguments() {
        assert_eq!(parse(&["--help", "--bogus"]).unwrap().command, CliCommand::Help);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(&["--url"]), Err(ArgsError::MissingValue("--url")));
        assert_eq!(parse(&["--url="]), Err(ArgsError::MissingValue("--url")));
        assert_eq!(
            parse(&["--unknown"]),
            Err(ArgsError::Unknown("--unknown".to_string()))
        );
    }
}
