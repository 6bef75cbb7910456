//! Diagnostic logging
//!
//! The card owns the terminal, so log lines go to a file instead of stderr.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "weather_card=info";
const LOG_FILE_NAME: &str = "weather-card.log";

/// Log file used when none is given on the command line
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// `RUST_LOG` if set, otherwise info for this crate only
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`
pub fn init(path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::other(format!("logging already initialized: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_in_temp_dir() {
        let path = default_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn log_file_is_created() {
        let path = std::env::temp_dir().join("weather-card-logging-test.log");
        let _ = std::fs::remove_file(&path);

        open_log_file(&path).unwrap();

        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
