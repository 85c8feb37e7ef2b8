//! Logging system with daily rotation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Prefix of every log file written by the rolling appender.
const LOG_FILE_PREFIX: &str = "page-template-filters";

/// Initialize the logging system.
pub fn init(config: &Config) -> Result<()> {
    prepare_log_dir(&config.log_path)?;

    // Create rolling file appender with daily rotation
    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, &config.log_path, LOG_FILE_PREFIX);

    // Use local timezone for timestamps
    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    // Set up subscriber with file output
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(timer),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    tracing::debug!("Logging to {}", config.log_path.display());
    Ok(())
}

/// Create the log directory if needed and drop stale log files from it.
fn prepare_log_dir(log_path: &Path) -> Result<()> {
    fs::create_dir_all(log_path).with_context(|| {
        format!("Failed to create log directory: {}", log_path.display())
    })?;
    cleanup_old_logs(log_path)
}

/// Clean up log files older than 2 days.
pub fn cleanup_old_logs(log_path: &Path) -> Result<()> {
    let two_days = Duration::from_secs(2 * 24 * 60 * 60);
    cleanup_logs_modified_before(log_path, SystemTime::now() - two_days)
}

fn cleanup_logs_modified_before(log_path: &Path, cutoff: SystemTime) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(log_path)? {
        let entry = entry?;
        let path = entry.path();

        // Only process log files
        if !path.is_file() {
            continue;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };

        if !filename.starts_with(LOG_FILE_PREFIX) {
            continue;
        }

        // Check modification time
        if let Ok(metadata) = entry.metadata() {
            if let Ok(modified) = metadata.modified() {
                if modified < cutoff {
                    let _ = fs::remove_file(&path);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_only_touches_own_logs() {
        let dir = std::env::temp_dir().join(format!(
            "page-template-filters-logs-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let own = dir.join(format!("{}.2026-01-01", LOG_FILE_PREFIX));
        let other = dir.join("unrelated.log");
        fs::write(&own, "old").unwrap();
        fs::write(&other, "keep").unwrap();

        let cutoff = SystemTime::now() + Duration::from_secs(60);
        cleanup_logs_modified_before(&dir, cutoff).unwrap();

        assert!(!own.exists());
        assert!(other.exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_prepare_creates_nested_log_dir() {
        let root = std::env::temp_dir().join(format!(
            "page-template-filters-logdir-{}",
            std::process::id()
        ));
        let log_path = root.join("nested").join("logs");

        prepare_log_dir(&log_path).unwrap();
        assert!(log_path.is_dir());

        // Existing directory is fine
        prepare_log_dir(&log_path).unwrap();

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_cleanup_missing_directory() {
        let dir = std::env::temp_dir().join("page-template-filters-no-such-dir");
        assert!(cleanup_old_logs(&dir).is_ok());
    }
}
