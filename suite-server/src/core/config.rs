use std::path::PathBuf;

use chrono_tz::Tz;

/// Default business timezone (all sites are in northern Morocco)
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Africa::Casablanca;

/// Node configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/samia/suite | data and log directory |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development / staging / production |
/// | TIMEZONE | Africa/Casablanca | business day timezone |
/// | LOG_LEVEL | info | tracing filter when RUST_LOG is unset |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/samia HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Holds `database/` and `logs/`
    pub work_dir: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    /// Timezone used to compute "today"
    pub timezone: Tz,
    pub log_level: String,
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/samia/suite".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| match tz.parse::<Tz>() {
                    Ok(tz) => Some(tz),
                    Err(e) => {
                        tracing::warn!("Invalid TIMEZONE '{}': {}, using default", tz, e);
                        None
                    }
                })
                .unwrap_or(DEFAULT_TIMEZONE),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the work dir and port, keeping everything else
    ///
    /// Mostly used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("suite.redb")
    }

    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create `database/` and `logs/` under the work dir
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths() {
        let config = Config::with_overrides("/tmp/samia", 4000);
        assert_eq!(config.http_port, 4000);
        assert_eq!(config.database_path(), PathBuf::from("/tmp/samia/database/suite.redb"));
        assert_eq!(config.logs_dir(), PathBuf::from("/tmp/samia/logs"));
    }

    #[test]
    fn work_dir_structure_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        config.ensure_work_dir_structure().unwrap();
        assert!(config.database_dir().is_dir());
        assert!(config.logs_dir().is_dir());
    }
}
