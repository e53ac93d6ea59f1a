//! hwbot configuration system.
//!
//! Non-secret knobs live in `~/.hwbot/config.toml`; every key is optional
//! and falls back to a default. Credentials are deliberately NOT part of the
//! file: they come from the process environment (see [`Credentials`]).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HwBotError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HwBotConfig {
    #[serde(default)]
    pub practicum: PracticumConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub watcher: WatcherConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl HwBotConfig {
    /// Load config from the default path (~/.hwbot/config.toml).
    /// A missing file is not an error: all keys have defaults.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HwBotError::Config(format!("failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| HwBotError::Config(format!("failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the hwbot home directory (~/.hwbot).
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hwbot")
    }
}

/// Homework API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticumConfig {
    /// Endpoint for homework statuses.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Timeout for one status request, seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".into()
}
fn default_request_timeout() -> u64 {
    30
}

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Telegram channel configuration (the bot token itself is a credential).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Timeout for one sendMessage call, seconds.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,
}

fn default_send_timeout() -> u64 {
    10
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            send_timeout_secs: default_send_timeout(),
        }
    }
}

/// Poll loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Seconds between poll cycles.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Where the cursor starts on boot.
    #[serde(default)]
    pub start_from: StartFrom,
}

fn default_poll_interval() -> u64 {
    600
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            start_from: StartFrom::default(),
        }
    }
}

/// Initial cursor policy.
///
/// `Epoch` replays the full homework history on the first cycle, so the bot
/// reports the latest known status right after boot. `Now` stays silent
/// until the next status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartFrom {
    #[default]
    Epoch,
    Now,
}

impl StartFrom {
    /// The cursor value this policy starts from.
    pub fn initial_cursor(self) -> i64 {
        match self {
            StartFrom::Epoch => 0,
            StartFrom::Now => chrono::Utc::now().timestamp(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directory for the daily-rolling log file.
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

fn default_log_dir() -> String {
    "~/.hwbot/logs".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
        }
    }
}

/// The three required credentials, resolved from the environment once at
/// startup. All three must be non-empty before the loop may start.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Read `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN`, `TELEGRAM_CHAT_ID` from the
    /// environment. Missing variables become empty strings; `check` decides.
    pub fn from_env() -> Self {
        Self {
            practicum_token: std::env::var("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: std::env::var("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: std::env::var("TELEGRAM_CHAT_ID").unwrap_or_default(),
        }
    }

    /// True when every credential is present. Logs each missing name at
    /// error severity before returning, so the operator sees the full list
    /// in one run instead of fixing them one by one.
    pub fn check(&self) -> bool {
        let mut ok = true;
        for (name, value) in [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ] {
            if value.is_empty() {
                tracing::error!("required credential {name} is missing or empty");
                ok = false;
            }
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HwBotConfig::default();
        assert_eq!(
            config.practicum.endpoint,
            "https://practicum.yandex.ru/api/user_api/homework_statuses/"
        );
        assert_eq!(config.practicum.request_timeout_secs, 30);
        assert_eq!(config.telegram.send_timeout_secs, 10);
        assert_eq!(config.watcher.poll_interval_secs, 600);
        assert_eq!(config.watcher.start_from, StartFrom::Epoch);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [practicum]
            endpoint = "https://staging.example/api/"
            request_timeout_secs = 5

            [watcher]
            poll_interval_secs = 60
            start_from = "now"
        "#;

        let config: HwBotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.practicum.endpoint, "https://staging.example/api/");
        assert_eq!(config.practicum.request_timeout_secs, 5);
        assert_eq!(config.watcher.poll_interval_secs, 60);
        assert_eq!(config.watcher.start_from, StartFrom::Now);
        // untouched section keeps its default
        assert_eq!(config.telegram.send_timeout_secs, 10);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: HwBotConfig = toml::from_str("").unwrap();
        assert_eq!(config.watcher.poll_interval_secs, 600);
        assert_eq!(config.log.dir, "~/.hwbot/logs");
    }

    #[test]
    fn test_home_dir() {
        let home = HwBotConfig::home_dir();
        assert!(home.to_string_lossy().contains("hwbot"));
    }

    #[test]
    fn test_start_from_epoch_cursor() {
        assert_eq!(StartFrom::Epoch.initial_cursor(), 0);
    }

    #[test]
    fn test_start_from_now_cursor_is_recent() {
        let cursor = StartFrom::Now.initial_cursor();
        let now = chrono::Utc::now().timestamp();
        assert!((now - cursor).abs() < 5);
    }

    #[test]
    fn test_credentials_check_all_present() {
        let creds = Credentials {
            practicum_token: "pt".into(),
            telegram_token: "tt".into(),
            telegram_chat_id: "42".into(),
        };
        assert!(creds.check());
    }

    #[test]
    fn test_credentials_check_reports_any_missing() {
        let creds = Credentials {
            practicum_token: "pt".into(),
            telegram_token: String::new(),
            telegram_chat_id: "42".into(),
        };
        assert!(!creds.check());

        let creds = Credentials {
            practicum_token: String::new(),
            telegram_token: String::new(),
            telegram_chat_id: String::new(),
        };
        assert!(!creds.check());
    }
}
