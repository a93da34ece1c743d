//! Loadable logger configuration

use super::category::Category;
use super::format_flags::FormatFlags;
use serde::{Deserialize, Serialize};

/// Filter, format and prefix in a form that can be read from a config file.
///
/// Missing fields take the [`Logger::new`](crate::Logger::new) defaults.
/// Categories and flags are written as names, e.g.
/// `{"filter": "info|warn|error", "format": "date|time", "prefix": "api: "}`.
///
/// ```
/// use rust_category_logger::{Category, FormatFlags, Logger, LoggerConfig};
///
/// let config = LoggerConfig {
///     filter: Category::ERROR | Category::FATAL,
///     format: FormatFlags::DATE | FormatFlags::TIME,
///     ..LoggerConfig::default()
/// };
/// let logger = Logger::builder().config(config).build();
/// assert_eq!(logger.filter(), Category::ERROR | Category::FATAL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub filter: Category,
    pub format: FormatFlags,
    pub prefix: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            filter: Category::ALL,
            format: FormatFlags::DEFAULT,
            prefix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.filter, Category::ALL);
        assert_eq!(config.format, FormatFlags::TIME | FormatFlags::PREFIX);
        assert!(config.prefix.is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"filter": "info|net", "prefix": "svc: "}"#).expect("deserialize");
        assert_eq!(config.filter, Category::INFO | Category::NET);
        assert_eq!(config.format, FormatFlags::DEFAULT);
        assert_eq!(config.prefix, "svc: ");
    }

    #[test]
    fn test_deserialize_rejects_unknown_category() {
        let result = serde_json::from_str::<LoggerConfig>(r#"{"filter": "info|verbose"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("verbose"), "error was {}", err);
    }

    #[test]
    fn test_serialize() {
        let config = LoggerConfig {
            filter: Category::ERROR,
            format: FormatFlags::NONE,
            prefix: "x".to_string(),
        };
        let json = serde_json::to_string(&config).expect("serialize");
        assert_eq!(json, r#"{"filter":"ERROR","format":"NONE","prefix":"x"}"#);

        let back: LoggerConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
