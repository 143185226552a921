use std::path::Path;

use super::types::ClientConfig;
use crate::error::ConfigError;

/// Environment variable holding the session cookie
pub const COOKIE_ENV: &str = "BLASEBALL_COOKIE";

/// Environment variable overriding the feed URL
pub const URL_ENV: &str = "BLASEBALL_URL";

/// Load client configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<ClientConfig, ConfigError> {
    let default_config = include_str!("client_config.json");
    load_config_from_str(default_config)
}

impl ClientConfig {
    /// Apply `BLASEBALL_URL` / `BLASEBALL_COOKIE` if set and non-empty
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(URL_ENV).ok(),
            std::env::var(COOKIE_ENV).ok(),
        );
    }

    /// Replace url and cookie with the given values, ignoring empty ones
    pub fn apply_overrides(&mut self, url: Option<String>, cookie: Option<String>) {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.url = url;
        }
        if let Some(cookie) = cookie.filter(|c| !c.is_empty()) {
            self.cookie = cookie;
        }
    }

    /// Check the configuration is usable for connecting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.url.starts_with("ws://") || self.url.starts_with("wss://")) {
            return Err(ConfigError::InvalidUrl(self.url.clone()));
        }
        if self.cookie.trim().is_empty() {
            return Err(ConfigError::MissingCookie);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_load_default_config() {
        let config = load_default_config().unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.heartbeat_interval(), Some(Duration::from_secs(25)));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = load_config_from_str(r#"{"cookie": "connect.sid=abc"}"#).unwrap();
        assert_eq!(config.url, ClientConfig::default().url);
        assert_eq!(config.cookie, "connect.sid=abc");
        assert_eq!(config.heartbeat_interval_ms, 25_000);
    }

    #[test]
    fn test_zero_heartbeat_disables_pings() {
        let config = load_config_from_str(r#"{"heartbeat_interval_ms": 0}"#).unwrap();
        assert_eq!(config.heartbeat_interval(), None);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            load_config_from_str("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_overrides_skip_empty_values() {
        let mut config = ClientConfig::default();
        config.apply_overrides(Some(String::new()), Some("connect.sid=xyz".to_string()));
        assert_eq!(config.url, ClientConfig::default().url);
        assert_eq!(config.cookie, "connect.sid=xyz");

        config.apply_overrides(Some("ws://localhost:9000/socket.io/".to_string()), None);
        assert_eq!(config.url, "ws://localhost:9000/socket.io/");
        assert_eq!(config.cookie, "connect.sid=xyz");
    }

    #[test]
    fn test_validate() {
        let mut config = ClientConfig::default();
        assert!(matches!(config.validate(), Err(ConfigError::MissingCookie)));

        config.cookie = "connect.sid=abc".to_string();
        assert!(config.validate().is_ok());

        config.url = "https://blaseball.com".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));
    }
}
