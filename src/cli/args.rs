//! Command-line argument parsing for rollcall.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the dashboard (default)
    RunTui(TuiOptions),
    /// An argument could not be understood
    Invalid(String),
}

/// Flags that tweak the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TuiOptions {
    /// Overrides `ROLLCALL_BASE_URL`
    pub base_url: Option<String>,
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use rollcall::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["rollcall".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = TuiOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--base-url" => match args.next() {
                Some(url) if !url.starts_with('-') => options.base_url = Some(url),
                _ => return CliCommand::Invalid("--base-url needs a URL".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--base-url=") {
                    options.base_url = Some(url.to_string());
                } else {
                    return CliCommand::Invalid(format!("unknown argument '{}'", other));
                }
            }
        }
    }

    CliCommand::RunTui(options)
}
