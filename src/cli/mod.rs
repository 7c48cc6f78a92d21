//! CLI module for rollcall.
//!
//! Parses command-line flags before the terminal is taken over:
//!
//! ```ignore
//! use rollcall::cli::{parse_args, run_cli_command};
//!
//! let Some(options) = run_cli_command(parse_args(std::env::args()))? else {
//!     return Ok(()); // --version or --help was printed
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, TuiOptions};
pub use version::{version_line, USAGE, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `Ok(Some(options))` - Start the dashboard with these options
/// * `Ok(None)` - Output was printed; exit successfully
/// * `Err(e)` - The arguments were not understood
pub fn run_cli_command(command: CliCommand) -> Result<Option<TuiOptions>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Ok(None)
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(None)
        }
        CliCommand::Invalid(message) => Err(eyre!("{}\n\n{}", message, USAGE)),
        CliCommand::RunTui(options) => Ok(Some(options)),
    }
}
