use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILENAME: &str = "products.json";
const DEFAULT_CURRENCY_SYMBOL: &str = "$";

pub const KEYS: [&str; 3] = ["data-file", "on-storage-error", "currency-symbol"];

/// What to do when the data file can't be read or written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageErrorPolicy {
    /// Report the error and abort the operation.
    #[default]
    Fail,
    /// Log the error; reads come back empty and failed writes are dropped.
    Degrade,
}

impl fmt::Display for StorageErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageErrorPolicy::Fail => write!(f, "fail"),
            StorageErrorPolicy::Degrade => write!(f, "degrade"),
        }
    }
}

impl std::str::FromStr for StorageErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Ok(StorageErrorPolicy::Fail),
            "degrade" => Ok(StorageErrorPolicy::Degrade),
            other => Err(format!(
                "Invalid policy '{}': expected 'fail' or 'degrade'",
                other
            )),
        }
    }
}

/// Configuration for stockpile, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockConfig {
    /// Explicit location of the products file. Defaults to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub on_storage_error: StorageErrorPolicy,

    /// Symbol printed in front of prices in tables
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            on_storage_error: StorageErrorPolicy::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "on-storage-error" => Some(self.on_storage_error.to_string()),
            "currency-symbol" => Some(self.currency_symbol.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "on-storage-error" => {
                self.on_storage_error = value.parse()?;
                Ok(())
            }
            "currency-symbol" => {
                self.currency_symbol = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// Resolve where products live: explicit override first (flag or
    /// environment), then the configured path, then the data directory default.
    pub fn data_file(&self, override_path: Option<PathBuf>, data_dir: &Path) -> PathBuf {
        override_path
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| data_dir.join(DEFAULT_DATA_FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockConfig::default();
        assert_eq!(config.data_file, None);
        assert_eq!(config.on_storage_error, StorageErrorPolicy::Fail);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = StockConfig::load(dir.path()).unwrap();
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("conf");

        let mut config = StockConfig::default();
        config.set("on-storage-error", "degrade").unwrap();
        config.set("currency-symbol", "€").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = StockConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.on_storage_error, StorageErrorPolicy::Degrade);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"on_storage_error":"degrade"}"#,
        )
        .unwrap();

        let loaded = StockConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.on_storage_error, StorageErrorPolicy::Degrade);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_policy() {
        let mut config = StockConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("on-storage-error", "ignore").is_err());
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_blank_data_file_clears_it() {
        let mut config = StockConfig::default();
        config.set("data-file", "/tmp/stock.json").unwrap();
        assert_eq!(config.get("data-file").unwrap(), "/tmp/stock.json");
        config.set("data-file", "").unwrap();
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_data_file_resolution_order() {
        let data_dir = Path::new("/data");
        let mut config = StockConfig::default();
        assert_eq!(
            config.data_file(None, data_dir),
            PathBuf::from("/data/products.json")
        );

        config.data_file = Some(PathBuf::from("/configured.json"));
        assert_eq!(
            config.data_file(None, data_dir),
            PathBuf::from("/configured.json")
        );
        assert_eq!(
            config.data_file(Some(PathBuf::from("/flag.json")), data_dir),
            PathBuf::from("/flag.json")
        );
    }
}
