use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the catalog JSON (array of verse rows).
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub pretty: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog: None,
            log_filter: default_log_filter(),
            pretty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog.is_none());
        assert_eq!(config.log_filter, "warn");
        assert!(!config.pretty);
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "catalog": "data/bible_cht.json",
            "log_filter": "bibleref=debug",
            "pretty": true
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("data/bible_cht.json")));
        assert_eq!(config.log_filter, "bibleref=debug");
        assert!(config.pretty);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_json::from_str(r#"{"pretty": true}"#).unwrap();
        assert!(config.pretty);
        assert!(config.catalog.is_none());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_deserialize_empty_object() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.log_filter, "warn");
    }
}
