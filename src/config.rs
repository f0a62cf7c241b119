use std::path::PathBuf;
use std::time::Duration;

use crate::common::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_SESSION_TTL_HOURS: u64 = 24;
const SECS_PER_HOUR: u64 = 60 * 60;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    /// JSON seed to load instead of the bundled demo content.
    pub seed_path: Option<PathBuf>,
    pub admin_username: String,
    pub admin_password: String,
    pub session_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let session_ttl = match get("ORGPRESS_SESSION_TTL_HOURS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .and_then(|hours| hours.checked_mul(SECS_PER_HOUR))
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidValue {
                    key: "ORGPRESS_SESSION_TTL_HOURS",
                    value: raw,
                })?,
            None => Duration::from_secs(DEFAULT_SESSION_TTL_HOURS * SECS_PER_HOUR),
        };

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            seed_path: get("ORGPRESS_SEED_PATH").map(PathBuf::from),
            admin_username: get("ORGPRESS_ADMIN_USERNAME")
                .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: get("ORGPRESS_ADMIN_PASSWORD")
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
            session_ttl,
        })
    }

    pub fn uses_default_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}
