//! Version and usage output.

/// The current version of rollcall, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: rollcall [--base-url <url>]

Terminal dashboard for the attendance backend's employees and clubs.

Options:
  --base-url <url>  Backend origin (default: $ROLLCALL_BASE_URL or http://localhost:8000)
  -h, --help        Print this help
  -V, --version     Print the version

Environment:
  ROLLCALL_BASE_URL      Backend origin
  ROLLCALL_TIMEOUT_SECS  Request timeout in seconds (default: 10)
  ROLLCALL_LOG           Log filter (default: info)
  ROLLCALL_LOG_FILE      Log file (default: <cache dir>/rollcall/rollcall.log)";

/// The `--version` line.
pub fn version_line() -> String {
    format!("rollcall {}", VERSION)
}
