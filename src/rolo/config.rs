use crate::error::{Result, RoloError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOK_FILE: &str = "book.json";
const DEFAULT_PAGE_SIZE: usize = 4;

/// Configuration for rolo, stored next to the book in config.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// File name of the persisted book inside the data directory.
    #[serde(default = "default_book_file")]
    pub book_file: String,

    /// Contacts per page for `show all`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_book_file() -> String {
    DEFAULT_BOOK_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            book_file: default_book_file(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RoloError::Io)?;
        let config: RoloConfig =
            serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RoloError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RoloError::Serialization)?;
        fs::write(config_path, content).map_err(RoloError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_classic_book() {
        let config = RoloConfig::default();
        assert_eq!(config.book_file, "book.json");
        assert_eq!(config.page_size, 4);
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(config, RoloConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = RoloConfig {
            book_file: "work.json".to_string(),
            page_size: 10,
        };
        config.save(dir.path()).unwrap();

        let loaded = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"page_size": 2}"#).unwrap();

        let loaded = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 2);
        assert_eq!(loaded.book_file, "book.json");
    }
}
