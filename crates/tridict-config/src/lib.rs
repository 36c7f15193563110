use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
pub use self::error::ConfigError;

pub mod dictionary;
pub mod error;

fn default_limit() -> usize {
    5
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,

    /// Results kept per ranked lookup, 0 keeps everything
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            limit: default_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Defaults overridden by `TRIDICT_DB`, `TRIDICT_LIMIT` and `TRIDICT_LOG`.
    pub fn new() -> Result<Self, ConfigError> {
        Config::default().with_env()
    }

    /// Apply the `TRIDICT_*` environment overrides on top of `self`.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_vars(|key| env::var(key).ok())
    }

    /// Read a JSON config; missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        Ok(config)
    }

    fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(path) = var("TRIDICT_DB").filter(|v| !v.is_empty()) {
            self.dictionary.path = Some(PathBuf::from(path));
        }

        if let Some(limit) = var("TRIDICT_LIMIT") {
            self.limit = limit.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "TRIDICT_LIMIT".to_string(),
                value: limit.clone(),
            })?;
        }

        if let Some(level) = var("TRIDICT_LOG").filter(|v| !v.is_empty()) {
            self.log_level = level;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::default().with_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.limit, 5);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.dictionary.path, None);
        assert_eq!(config.dictionary.search_paths.len(), 3);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::default().with_vars(vars(&[
            ("TRIDICT_DB", "/tmp/words.db"),
            ("TRIDICT_LIMIT", "12"),
            ("TRIDICT_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.dictionary.path, Some(PathBuf::from("/tmp/words.db")));
        assert_eq!(config.limit, 12);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn bad_limit_is_rejected() {
        let err = Config::default().with_vars(vars(&[("TRIDICT_LIMIT", "lots")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value } => {
                assert_eq!(key, "TRIDICT_LIMIT");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn partial_json_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"limit": 0, "dictionary": {"home_dir_name": ".dict"}}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.limit, 0);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.dictionary.home_dir_name, ".dict");
        assert_eq!(config.dictionary.search_paths, DictionaryConfig::default().search_paths);
    }

    #[test]
    fn environment_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"limit": 3, "log_level": "info", "dictionary": {"path": "from-file.db"}}"#).unwrap();

        let config = Config::from_file(&path)
            .unwrap()
            .with_vars(vars(&[("TRIDICT_DB", "from-env.db"), ("TRIDICT_LIMIT", "9")]))
            .unwrap();

        assert_eq!(config.dictionary.path, Some(PathBuf::from("from-env.db")));
        assert_eq!(config.limit, 9);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn malformed_json_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ limit: ").unwrap();

        assert!(matches!(Config::from_file(&path), Err(ConfigError::Json(_))));
        assert!(matches!(
            Config::from_file(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
