//! Logging Infrastructure
//!
//! - console output, pretty in development and JSON in production
//! - daily rotating application logs under `logs/app` (deleted after 14 days)
//! - daily security logs under `logs/security` (kept)

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Application logs older than this are removed
pub const APP_LOG_RETENTION_DAYS: i64 = 14;

const APP_LOG_PREFIX: &str = "suite-server";

/// Remove application log files older than the retention window
///
/// Returns the number of deleted files.
pub fn cleanup_old_logs(log_dir: &Path, today: chrono::NaiveDate) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }
    let cutoff = today - chrono::Duration::days(APP_LOG_RETENTION_DAYS);

    let mut deleted = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // suite-server.YYYY-MM-DD
        let Some(date) = name
            .strip_prefix(APP_LOG_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        else {
            continue;
        };
        if date < cutoff {
            fs::remove_file(&path)?;
            deleted += 1;
        }
    }
    Ok(deleted)
}

/// Initialize the logging system
///
/// `RUST_LOG` wins over `level` when set. With `log_dir`, application and
/// security events are also written to daily files.
///
/// # Examples
/// ```no_run
/// // Development, console only
/// suite_server::init_logger_with_file("debug", false, None)?;
///
/// // Production, console + files
/// suite_server::init_logger_with_file("info", true, Some("/var/lib/samia/suite/logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = resolve_filter(level, std::env::var("RUST_LOG").ok().as_deref());

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(console_layer);

    let Some(dir) = log_dir else {
        registry.try_init()?;
        return Ok(());
    };

    let log_dir = Path::new(dir);
    let app_log_dir = log_dir.join("app");
    let security_log_dir = log_dir.join("security");
    fs::create_dir_all(&app_log_dir)?;
    fs::create_dir_all(&security_log_dir)?;

    let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, APP_LOG_PREFIX);
    let app_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(app_log))
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() != "security"
        }));

    let security_log = RollingFileAppender::new(Rotation::DAILY, security_log_dir, "security");
    let security_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::sync::Mutex::new(security_log))
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() == "security"
        }));

    registry.with(app_layer).with(security_layer).try_init()?;

    tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));
    Ok(())
}

/// `RUST_LOG` directives when set and valid, `level` otherwise
fn resolve_filter(level: &str, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

/// Console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Runs every hour
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        let today = chrono::Utc::now().date_naive();
        match cleanup_old_logs(&log_dir, today) {
            Ok(0) => {}
            Ok(deleted) => tracing::info!(deleted, "Deleted old log files"),
            Err(e) => tracing::error!(error = %e, "Failed to cleanup old logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn rust_log_overrides_the_configured_level() {
        let filter = resolve_filter("info", Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = resolve_filter("warn", None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = resolve_filter("warn", Some("  "));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn cleanup_removes_only_expired_app_logs() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app");
        fs::create_dir_all(&app).unwrap();
        for name in [
            "suite-server.2026-01-01",
            "suite-server.2026-01-20",
            "notes.txt",
        ] {
            fs::write(app.join(name), b"x").unwrap();
        }

        let today = chrono::NaiveDate::from_ymd_opt(2026, 1, 21).unwrap();
        assert_eq!(cleanup_old_logs(dir.path(), today).unwrap(), 1);
        assert!(!app.join("suite-server.2026-01-01").exists());
        assert!(app.join("suite-server.2026-01-20").exists());
        assert!(app.join("notes.txt").exists());
    }

    #[test]
    fn cleanup_without_directory_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(cleanup_old_logs(dir.path(), chrono::Utc::now().date_naive()).unwrap(), 0);
    }
}
