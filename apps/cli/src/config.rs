use homestead_core::constants::DISPLAY_DECIMAL_PRECISION;
use homestead_core::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub currency_symbol: String,
    pub display_decimals: u32,
    /// Fixes the assistant's fallback replies when set.
    pub chat_seed: Option<u64>,
    pub seed_demo_data: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            display_decimals: DISPLAY_DECIMAL_PRECISION,
            chat_seed: None,
            seed_demo_data: true,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; missing keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let currency_symbol = lookup("HH_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol);
        let display_decimals = match lookup("HH_DISPLAY_DECIMALS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|d| *d <= 8)
                .ok_or_else(|| invalid("HH_DISPLAY_DECIMALS", &raw))?,
            None => defaults.display_decimals,
        };
        let chat_seed = match lookup("HH_CHAT_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| invalid("HH_CHAT_SEED", &raw))?,
            ),
            None => None,
        };
        let seed_demo_data = match lookup("HH_SEED_DEMO_DATA") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| invalid("HH_SEED_DEMO_DATA", &raw))?,
            None => defaults.seed_demo_data,
        };
        let log_format = match lookup("HH_LOG_FORMAT") {
            Some(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(raw) if raw.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(raw) => return Err(invalid("HH_LOG_FORMAT", &raw)),
            None => defaults.log_format,
        };

        Ok(Self {
            currency_symbol,
            display_decimals,
            chat_seed,
            seed_demo_data,
            log_format,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, raw: &str) -> Error {
    Error::InvalidConfigValue(format!("{}={}", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.display_decimals, 2);
        assert_eq!(config.chat_seed, None);
        assert!(config.seed_demo_data);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HH_CURRENCY_SYMBOL", "$"),
            ("HH_DISPLAY_DECIMALS", "0"),
            ("HH_CHAT_SEED", "42"),
            ("HH_SEED_DEMO_DATA", "off"),
            ("HH_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.display_decimals, 0);
        assert_eq!(config.chat_seed, Some(42));
        assert!(!config.seed_demo_data);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_invalid_values() {
        for (key, value) in [
            ("HH_DISPLAY_DECIMALS", "two"),
            ("HH_DISPLAY_DECIMALS", "12"),
            ("HH_CHAT_SEED", "-1"),
            ("HH_SEED_DEMO_DATA", "maybe"),
            ("HH_LOG_FORMAT", "xml"),
        ] {
            let err = Config::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert!(
                matches!(err, Error::InvalidConfigValue(ref msg) if msg.starts_with(key)),
                "{} should be rejected",
                key
            );
        }
    }
}
