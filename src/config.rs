//! Configuration handling: user preferences file and relay credentials

use crate::relay::DEFAULT_ENDPOINT;
use crate::state::Theme;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable names for the relay
pub const SERVICE_ID_VAR: &str = "FOLIO_RELAY_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "FOLIO_RELAY_TEMPLATE_ID";
pub const ACCOUNT_ID_VAR: &str = "FOLIO_RELAY_ACCOUNT_ID";
pub const ACCESS_TOKEN_VAR: &str = "FOLIO_RELAY_ACCESS_TOKEN";
pub const ENDPOINT_VAR: &str = "FOLIO_RELAY_ENDPOINT";

const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 15;
const DEFAULT_TOAST_DURATION_SECS: u64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FolioConfig {
    /// Start in the dark theme
    pub dark_mode: Option<bool>,
    /// Mail relay send endpoint
    pub relay_endpoint: Option<String>,
    /// Upper bound on a single send, in seconds
    pub relay_timeout_secs: Option<u64>,
    /// How long a toast stays on screen, in seconds
    pub toast_duration_secs: Option<u64>,
}

impl FolioConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file; the terminal belongs to the UI while running
    pub fn log_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-tui").map(|dirs| dirs.data_dir().join("logs"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FolioConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode.unwrap_or(false))
    }

    /// Relay endpoint: environment override, then config file, then default
    pub fn relay_endpoint(&self) -> String {
        std::env::var(ENDPOINT_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.relay_endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Send timeout; zero means unset
    pub fn relay_timeout(&self) -> Duration {
        Duration::from_secs(
            self.relay_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_RELAY_TIMEOUT_SECS),
        )
    }

    /// Toast lifetime; zero means unset
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(
            self.toast_duration_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TOAST_DURATION_SECS),
        )
    }
}

/// Relay account identifiers. Supplied by the environment, never shown in the UI.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub account_id: String,
    pub access_token: Option<String>,
}

impl RelayCredentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through a lookup function; empty values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        Ok(Self {
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            account_id: required(ACCOUNT_ID_VAR)?,
            access_token: lookup(ACCESS_TOKEN_VAR).filter(|v| !v.trim().is_empty()),
        })
    }
}

impl fmt::Debug for RelayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCredentials")
            .field("service_id", &"<redacted>")
            .field("template_id", &"<redacted>")
            .field("account_id", &"<redacted>")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn temp_config_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("folio-tui-test-{}", uuid::Uuid::new_v4()))
            .join("config.json")
    }

    mod folio_config {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = FolioConfig::default();
            assert!(config.dark_mode.is_none());
            assert!(config.relay_endpoint.is_none());
            assert_eq!(config.theme(), Theme::Light);
            assert_eq!(config.relay_timeout(), Duration::from_secs(15));
            assert_eq!(config.toast_duration(), Duration::from_secs(5));
        }

        #[test]
        fn test_serialization() {
            let config = FolioConfig {
                dark_mode: Some(true),
                relay_endpoint: Some("http://localhost:8080/send".to_string()),
                relay_timeout_secs: Some(3),
                toast_duration_secs: Some(8),
            };

            let json = serde_json::to_string(&config).unwrap();
            let parsed: FolioConfig = serde_json::from_str(&json).unwrap();

            assert_eq!(parsed.dark_mode, Some(true));
            assert_eq!(
                parsed.relay_endpoint,
                Some("http://localhost:8080/send".to_string())
            );
            assert_eq!(parsed.relay_timeout(), Duration::from_secs(3));
            assert_eq!(parsed.toast_duration(), Duration::from_secs(8));
            assert_eq!(parsed.theme(), Theme::Dark);
        }

        #[test]
        fn test_deserialize_from_empty_json() {
            let parsed: FolioConfig = serde_json::from_str("{}").unwrap();
            assert!(parsed.dark_mode.is_none());
        }

        #[test]
        fn test_deserialize_with_extra_fields() {
            let json = r#"{"dark_mode": true, "unknown_field": "value"}"#;
            let parsed: FolioConfig = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.dark_mode, Some(true));
        }

        #[test]
        fn test_load_from_missing_file_is_default() {
            let config = FolioConfig::load_from(&temp_config_path()).unwrap();
            assert!(config.dark_mode.is_none());
        }

        #[test]
        fn test_save_then_load() {
            let path = temp_config_path();
            let config = FolioConfig {
                dark_mode: Some(true),
                ..Default::default()
            };
            config.save_to(&path).unwrap();

            let loaded = FolioConfig::load_from(&path).unwrap();
            assert_eq!(loaded.dark_mode, Some(true));

            if let Some(dir) = path.parent() {
                let _ = fs::remove_dir_all(dir);
            }
        }

        #[test]
        fn test_load_from_invalid_json_errors() {
            let path = temp_config_path();
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "not json").unwrap();

            assert!(FolioConfig::load_from(&path).is_err());

            let _ = fs::remove_dir_all(path.parent().unwrap());
        }

        #[test]
        fn test_zero_durations_fall_back_to_defaults() {
            let config = FolioConfig {
                relay_timeout_secs: Some(0),
                toast_duration_secs: Some(0),
                ..Default::default()
            };
            assert_eq!(config.relay_timeout(), Duration::from_secs(15));
            assert_eq!(config.toast_duration(), Duration::from_secs(5));
        }

        #[test]
        fn test_config_path_returns_option() {
            let _path = FolioConfig::config_path();
        }

        #[test]
        fn test_log_dir_is_separate_from_config() {
            if let (Some(logs), Some(config)) = (FolioConfig::log_dir(), FolioConfig::config_path()) {
                assert!(logs.ends_with("logs"));
                assert_ne!(Some(logs.as_path()), config.parent());
            }
        }
    }

    mod relay_credentials {
        use super::*;

        #[test]
        fn test_from_lookup_reads_all_vars() {
            let creds = RelayCredentials::from_lookup(lookup_from(&[
                (SERVICE_ID_VAR, "service_x"),
                (TEMPLATE_ID_VAR, "template_y"),
                (ACCOUNT_ID_VAR, "public_z"),
                (ACCESS_TOKEN_VAR, "private_k"),
            ]))
            .unwrap();

            assert_eq!(creds.service_id, "service_x");
            assert_eq!(creds.template_id, "template_y");
            assert_eq!(creds.account_id, "public_z");
            assert_eq!(creds.access_token.as_deref(), Some("private_k"));
        }

        #[test]
        fn test_access_token_is_optional() {
            let creds = RelayCredentials::from_lookup(lookup_from(&[
                (SERVICE_ID_VAR, "s"),
                (TEMPLATE_ID_VAR, "t"),
                (ACCOUNT_ID_VAR, "a"),
            ]))
            .unwrap();
            assert!(creds.access_token.is_none());
        }

        #[test]
        fn test_missing_var_is_reported() {
            let err = RelayCredentials::from_lookup(lookup_from(&[
                (SERVICE_ID_VAR, "s"),
                (ACCOUNT_ID_VAR, "a"),
            ]))
            .unwrap_err();
            assert_eq!(err, ConfigError::MissingVar(TEMPLATE_ID_VAR));
        }

        #[test]
        fn test_blank_var_counts_as_missing() {
            let err = RelayCredentials::from_lookup(lookup_from(&[
                (SERVICE_ID_VAR, "  "),
                (TEMPLATE_ID_VAR, "t"),
                (ACCOUNT_ID_VAR, "a"),
            ]))
            .unwrap_err();
            assert_eq!(err, ConfigError::MissingVar(SERVICE_ID_VAR));
        }

        #[test]
        fn test_debug_redacts_secrets() {
            let creds = RelayCredentials {
                service_id: "service_secret".to_string(),
                template_id: "template_secret".to_string(),
                account_id: "account_secret".to_string(),
                access_token: Some("token_secret".to_string()),
            };
            let debug_str = format!("{creds:?}");
            assert!(debug_str.contains("RelayCredentials"));
            assert!(!debug_str.contains("secret"));
        }
    }
}
