//! Tracing subscriber setup.
//!
//! The terminal belongs to the dashboard, so log output goes to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Filter used when the configured one does not parse.
const FALLBACK_FILTER: &str = "info";

/// Install the global subscriber. Returns the file being written to, or
/// `None` when no log location could be determined.
pub fn init(config: &Config) -> Result<Option<PathBuf>> {
    let Some(path) = config.log_path() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to install tracing subscriber: {}", e))?;

    Ok(Some(path))
}

/// Parse a filter directive, falling back to `info`.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Open `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("cannot create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("cannot open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_creates_directories_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rollcall.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_bad_filter_falls_back() {
        assert_eq!(build_filter("debug").to_string(), "debug");
        assert_eq!(build_filter("rollcall=loudest").to_string(), FALLBACK_FILTER);
    }
}
