//! Environment credentials and TOML settings.
//!
//! Secrets come from the process environment only (a `.env` file is honored
//! by the binary before startup). Everything else lives in
//! `~/.config/homewatch/config.toml`; a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;

pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Returns `~/.config/homewatch[-dev]/` based on HOMEWATCH_ENV.
///
/// Set HOMEWATCH_ENV=dev to use a separate development directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HOMEWATCH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("homewatch-dev")
    } else {
        base_dir.join("homewatch")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

/// API tokens and the destination chat, read once at startup.
///
/// Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Read all three variables from the environment.
    ///
    /// Every variable must be set and non-empty. A deployment without
    /// credentials cannot complete a single cycle, so startup refuses
    /// instead of looping on guaranteed failures.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var(PRACTICUM_TOKEN_VAR).ok(),
            std::env::var(TELEGRAM_TOKEN_VAR).ok(),
            std::env::var(TELEGRAM_CHAT_ID_VAR).ok(),
        )
    }

    fn require(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => {
                tracing::error!("missing required environment variable {name}");
                Err(ConfigError::MissingEnv(name))
            }
        }
    }

    pub(crate) fn from_parts(
        practicum_token: Option<String>,
        telegram_token: Option<String>,
        telegram_chat_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            practicum_token: Self::require(practicum_token, PRACTICUM_TOKEN_VAR)?,
            telegram_token: Self::require(telegram_token, TELEGRAM_TOKEN_VAR)?,
            telegram_chat_id: Self::require(telegram_chat_id, TELEGRAM_CHAT_ID_VAR)?,
        })
    }
}

/// Application settings.
///
/// Serialized to/from TOML at `~/.config/homewatch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Status API endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Telegram Bot API base URL.
    #[serde(default = "default_telegram_api_base")]
    pub telegram_api_base: String,
    /// Seconds to sleep between poll cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// How far back the first fetch window reaches, in days.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
    /// Timeout for outbound HTTP requests, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Log file path; unset disables the file sink.
    #[serde(default = "default_log_file")]
    pub log_file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}
fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}
fn default_poll_interval_secs() -> u64 {
    600
}
fn default_lookback_days() -> i64 {
    15
}
fn default_request_timeout_secs() -> u64 {
    30
}
fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from("homewatch.log"))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            telegram_api_base: default_telegram_api_base(),
            poll_interval_secs: default_poll_interval_secs(),
            lookback_days: default_lookback_days(),
            request_timeout_secs: default_request_timeout_secs(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Load from the default location or return defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the
    /// file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_dir()?.join("config.toml");
        Self::load_from(&path)
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// The endpoint as a parsed URL.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidValue {
            key: "endpoint".to_string(),
            message: e.to_string(),
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Lookback window seeding the first fetch cursor.
    pub fn lookback(&self) -> chrono::Duration {
        chrono::Duration::days(self.lookback_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings.poll_interval_secs, 600);
        assert_eq!(settings.lookback_days, 15);
        assert!(settings.endpoint.contains("homework_statuses"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "poll_interval_secs = 30").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.poll_interval_secs, 30);
        assert_eq!(settings.request_timeout_secs, 30);
        assert_eq!(settings.log_file, Some(PathBuf::from("homewatch.log")));
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "poll_interval_secs = \"soon\"").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let settings = Settings {
            endpoint: "not a url".to_string(),
            ..Settings::default()
        };
        assert!(settings.endpoint_url().is_err());
    }

    #[test]
    fn credentials_require_every_variable() {
        let all = Credentials::from_parts(
            Some("practicum".into()),
            Some("telegram".into()),
            Some("42".into()),
        );
        assert!(all.is_ok());

        let missing = Credentials::from_parts(Some("practicum".into()), None, Some("42".into()));
        assert!(matches!(missing, Err(ConfigError::MissingEnv(name)) if name == TELEGRAM_TOKEN_VAR));

        let empty = Credentials::from_parts(
            Some("practicum".into()),
            Some("telegram".into()),
            Some("  ".into()),
        );
        assert!(matches!(empty, Err(ConfigError::MissingEnv(name)) if name == TELEGRAM_CHAT_ID_VAR));
    }
}
