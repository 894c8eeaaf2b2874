//! CLI configuration.

use std::path::PathBuf;

use crossrate_fx::{ConverterConfig, RoundingMode};
use tracing::warn;

/// Main CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the JSON quote file.
    pub quotes_path: PathBuf,
    /// Converter settings.
    pub converter: ConverterConfig,
    /// Log level.
    pub log_level: String,
    /// Emit logs as JSON.
    pub log_json: bool,
    /// Environment variables whose values could not be parsed, with the value.
    pub rejected_env: Vec<(String, String)>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            quotes_path: PathBuf::from("data/quotes.json"),
            converter: ConverterConfig::default(),
            log_level: "warn".to_string(),
            log_json: false,
            rejected_env: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("CROSSRATE_QUOTES_PATH") {
            config.quotes_path = PathBuf::from(path);
        }

        if let Some(places) = lookup("CROSSRATE_DECIMAL_PLACES") {
            match places.parse() {
                Ok(places) => config.converter.decimal_places = places,
                Err(_) => config.reject("CROSSRATE_DECIMAL_PLACES", places),
            }
        }

        if let Some(mode) = lookup("CROSSRATE_ROUNDING") {
            match mode.parse::<RoundingMode>() {
                Ok(mode) => config.converter.rounding = mode,
                Err(_) => config.reject("CROSSRATE_ROUNDING", mode),
            }
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = level;
        }

        if let Some(json) = lookup("LOG_JSON") {
            config.log_json = matches!(json.as_str(), "1" | "true" | "yes");
        }

        config
    }

    fn reject(&mut self, key: &str, value: String) {
        self.rejected_env.push((key.to_string(), value));
    }

    /// Warn about environment values that were ignored. Call once logging is up.
    pub fn log_rejected_env(&self) {
        for (key, value) in &self.rejected_env {
            warn!(key = %key, value = %value, "Ignoring unparseable environment value");
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.quotes_path.as_os_str().is_empty() {
            return Err("Quotes path cannot be empty".to_string());
        }

        self.converter.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.converter.decimal_places, 6);
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("CROSSRATE_QUOTES_PATH", "/tmp/q.json"),
            ("CROSSRATE_DECIMAL_PLACES", "4"),
            ("CROSSRATE_ROUNDING", "half-even"),
            ("LOG_JSON", "true"),
        ]));

        assert_eq!(config.quotes_path, PathBuf::from("/tmp/q.json"));
        assert_eq!(config.converter.decimal_places, 4);
        assert_eq!(config.converter.rounding, RoundingMode::HalfEven);
        assert!(config.log_json);
        assert!(config.rejected_env.is_empty());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_unparseable_env_keeps_default() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("CROSSRATE_DECIMAL_PLACES", "six"),
            ("CROSSRATE_ROUNDING", "half-down"),
        ]));

        assert_eq!(config.converter.decimal_places, 6);
        assert_eq!(config.converter.rounding, RoundingMode::HalfUp);
        assert_eq!(
            config.rejected_env,
            vec![
                ("CROSSRATE_DECIMAL_PLACES".to_string(), "six".to_string()),
                ("CROSSRATE_ROUNDING".to_string(), "half-down".to_string()),
            ]
        );
        config.log_rejected_env();
    }

    #[test]
    fn test_invalid_config() {
        let mut config = CliConfig::default();
        config.converter.decimal_places = 29;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.quotes_path = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
