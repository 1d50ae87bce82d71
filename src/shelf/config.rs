use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "books.txt";

pub const KEYS: &[&str] = &["data-file", "autoload", "autosave"];

/// Configuration for shelf, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Catalog file used by load/save when no other path is given.
    /// Relative paths resolve against the config directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Load the catalog file when the menu starts
    #[serde(default = "default_autoload")]
    pub autoload: bool,

    /// Save the catalog file when the menu exits
    #[serde(default)]
    pub autosave: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_autoload() -> bool {
    true
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            autoload: default_autoload(),
            autosave: false,
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "autoload" => Some(self.autoload.to_string()),
            "autosave" => Some(self.autosave.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.to_string();
            }
            "autoload" => self.autoload = parse_bool(key, value)?,
            "autosave" => self.autosave = parse_bool(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// The catalog file, resolved against `config_dir` when relative.
    pub fn data_path(&self, config_dir: &Path) -> PathBuf {
        let path = Path::new(&self.data_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            config_dir.join(path)
        }
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("Invalid value for {}: {} (expected true or false)", key, other)),
    }
}
