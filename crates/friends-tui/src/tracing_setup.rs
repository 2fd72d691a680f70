use anyhow::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Log file path; the terminal is busy drawing so logs only go to a file
pub const LOG_FILE_ENV: &str = "FRIENDS_LOG_FILE";

/// Install file logging when `FRIENDS_LOG_FILE` is set. Returns the log path.
pub fn init_tracing() -> Result<Option<String>> {
    let Ok(log_path) = std::env::var(LOG_FILE_ENV) else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(Some(log_path))
}
