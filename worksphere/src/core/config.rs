use std::path::PathBuf;

use crate::assignment::ZoneAccess;

/// Board configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./work_dir | Directory holding the board database |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Directory for rolling file logs |
/// | ENVIRONMENT | development | development / production (JSON console logs) |
/// | SEED_SAMPLE_STAFF | false | Start a fresh board with two sample employees |
/// | UNLISTED_ZONE_ACCESS | allow | Access for zones without an explicit rule (allow / deny) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/worksphere LOG_LEVEL=debug worksphere board
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory, holds `worksphere.redb`
    pub work_dir: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
    /// Seed a fresh board with sample employees
    pub seed_sample_staff: bool,
    /// Fallback access for zones the eligibility table has no rule for
    pub unlisted_zone_access: ZoneAccess,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            seed_sample_staff: std::env::var("SEED_SAMPLE_STAFF")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            unlisted_zone_access: std::env::var("UNLISTED_ZONE_ACCESS")
                .ok()
                .and_then(|v| parse_zone_access(&v))
                .unwrap_or(ZoneAccess::Unrestricted),
        }
    }

    /// Config rooted at a custom work directory
    ///
    /// Mostly used by tests.
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(crate::storage::DB_FILE_NAME)
    }

    /// Production switches console logs to JSON
    pub fn is_production(&self) -> bool {
        self.environment.trim().eq_ignore_ascii_case("production")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_zone_access(value: &str) -> Option<ZoneAccess> {
    match value.trim().to_ascii_lowercase().as_str() {
        "allow" | "unrestricted" => Some(ZoneAccess::Unrestricted),
        "deny" | "closed" => Some(ZoneAccess::closed()),
        other => {
            tracing::warn!(value = other, "Unknown UNLISTED_ZONE_ACCESS, using allow");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zone_access() {
        assert_eq!(parse_zone_access("allow"), Some(ZoneAccess::Unrestricted));
        assert_eq!(parse_zone_access(" DENY "), Some(ZoneAccess::closed()));
        assert_eq!(parse_zone_access("maybe"), None);
    }

    #[test]
    fn test_db_path() {
        let mut config = Config::from_env();
        config.work_dir = "/tmp/board".into();
        assert_eq!(config.db_path(), PathBuf::from("/tmp/board/worksphere.redb"));
    }

    #[test]
    fn test_is_production() {
        let mut config = Config::from_env();
        config.environment = "development".into();
        assert!(!config.is_production());
        config.environment = " Production ".into();
        assert!(config.is_production());
    }
}
