//! Bridge configuration
//!
//! Every field has a default, so an empty JSON object or an empty
//! environment yields a working configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::BridgeError;

/// Default telemetry refresh period.
pub const DEFAULT_REFRESH_PERIOD_MS: u64 = 100;

/// Environment variable overriding the refresh period in milliseconds.
pub const ENV_REFRESH_MS: &str = "TELLO_REFRESH_MS";
/// Environment variable forcing the display locale.
pub const ENV_LOCALE: &str = "TELLO_LOCALE";
/// Environment variable enabling argument validation (`true`/`false`/`1`/`0`).
pub const ENV_VALIDATE_ARGS: &str = "TELLO_VALIDATE_ARGS";

/// Runtime configuration of a [`TelloExtension`](crate::TelloExtension).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Telemetry refresh period in milliseconds (default: 100).
    pub refresh_period_ms: u64,
    /// Locale tag used instead of the host's ambient locale.
    pub locale: Option<String>,
    /// Reject out-of-range command arguments instead of forwarding them.
    pub validate_arguments: bool,
    /// Opaque icon reference for the category menu.
    pub menu_icon_uri: String,
    /// Opaque icon reference shown on each block.
    pub block_icon_uri: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            refresh_period_ms: DEFAULT_REFRESH_PERIOD_MS,
            locale: None,
            validate_arguments: false,
            menu_icon_uri: String::new(),
            block_icon_uri: String::new(),
        }
    }
}

impl BridgeConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BridgeError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `TELLO_*` environment variables.
    pub fn from_env() -> Result<Self, BridgeError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BridgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_REFRESH_MS) {
            config.refresh_period_ms = value.trim().parse().map_err(|_| {
                BridgeError::Config(format!("invalid value for {ENV_REFRESH_MS}: {value}"))
            })?;
        }

        if let Some(value) = lookup(ENV_LOCALE) {
            if !value.is_empty() {
                config.locale = Some(value);
            }
        }

        if let Some(value) = lookup(ENV_VALIDATE_ARGS) {
            config.validate_arguments = match value.trim() {
                "1" | "true" => true,
                "0" | "false" => false,
                other => {
                    return Err(BridgeError::Config(format!(
                        "invalid value for {ENV_VALIDATE_ARGS}: {other}"
                    )))
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.refresh_period_ms == 0 {
            return Err(BridgeError::Config(
                "refresh_period_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_millis(self.refresh_period_ms)
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.refresh_period_ms, 100);
        assert_eq!(config.refresh_period(), Duration::from_millis(100));
        assert!(config.locale.is_none());
        assert!(!config.validate_arguments);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = BridgeConfig::from_json(r#"{"locale": "ja"}"#).unwrap();
        assert_eq!(config.locale.as_deref(), Some("ja"));
        assert_eq!(config.refresh_period_ms, 100);
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "refresh_period_ms": 250,
            "locale": "zh-cn",
            "validate_arguments": true,
            "menu_icon_uri": "data:image/png;base64,AAAA",
            "block_icon_uri": "data:image/png;base64,BBBB"
        }"#;
        let config = BridgeConfig::from_json(json).unwrap();
        assert_eq!(config.refresh_period(), Duration::from_millis(250));
        assert!(config.validate_arguments);
        assert_eq!(config.block_icon_uri, "data:image/png;base64,BBBB");
    }

    #[test]
    fn test_from_json_rejects_zero_period() {
        let result = BridgeConfig::from_json(r#"{"refresh_period_ms": 0}"#);
        assert!(matches!(result, Err(BridgeError::Config(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        match BridgeConfig::from_json("not json").unwrap_err() {
            BridgeError::Config(msg) => assert!(msg.contains("JSON parse error")),
            other => panic!("Expected Config error, got: {other:?}"),
        }
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = BridgeConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, BridgeConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = BridgeConfig::from_lookup(lookup_from(&[
            (ENV_REFRESH_MS, "50"),
            (ENV_LOCALE, "ja-Hira"),
            (ENV_VALIDATE_ARGS, "1"),
        ]))
        .unwrap();
        assert_eq!(config.refresh_period_ms, 50);
        assert_eq!(config.locale.as_deref(), Some("ja-Hira"));
        assert!(config.validate_arguments);
    }

    #[test]
    fn test_from_lookup_bad_values() {
        assert!(BridgeConfig::from_lookup(lookup_from(&[(ENV_REFRESH_MS, "fast")])).is_err());
        assert!(BridgeConfig::from_lookup(lookup_from(&[(ENV_REFRESH_MS, "0")])).is_err());
        assert!(BridgeConfig::from_lookup(lookup_from(&[(ENV_VALIDATE_ARGS, "yes")])).is_err());
    }

    #[test]
    fn test_from_lookup_empty_locale_ignored() {
        let config = BridgeConfig::from_lookup(lookup_from(&[(ENV_LOCALE, "")])).unwrap();
        assert!(config.locale.is_none());
    }
}
