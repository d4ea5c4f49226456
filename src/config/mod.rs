pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, FileLoggingConfigItem, RefreshIntervalConfigItem, TypingDelayConfigItem,
};
use crate::core::types::Seconds;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    FileLoggingEnabled,
    TypingDelay,
    RefreshInterval,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
    #[serde(default)]
    pub typing_delay: TypingDelayConfigItem,
    #[serde(default)]
    pub refresh_interval: RefreshIntervalConfigItem,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
}

impl Config {
    /// Loads the config at `path`; a missing file yields the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::domain(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text).map_err(|e| {
            Error::domain(format!("Invalid JSON in '{}': {}", path.display(), e))
        })?;
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// Path the config was read from, `None` when running on defaults.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }
    pub fn typing_delay(&self) -> Seconds {
        *self.data.typing_delay.get_value()
    }
    pub fn refresh_interval(&self) -> Seconds {
        *self.data.refresh_interval.get_value()
    }

    /// `(key, description, value)` for every config key, in declaration order.
    pub fn rows(&self) -> Vec<(String, String, String)> {
        ConfigKey::iter()
            .map(|key| {
                let (description, value) = match key {
                    ConfigKey::FileLoggingEnabled => (
                        self.data.file_logging_enabled.description(),
                        self.data.file_logging_enabled.get_value().to_string(),
                    ),
                    ConfigKey::TypingDelay => (
                        self.data.typing_delay.description(),
                        self.data.typing_delay.get_value().to_string(),
                    ),
                    ConfigKey::RefreshInterval => (
                        self.data.refresh_interval.description(),
                        self.data.refresh_interval.get_value().to_string(),
                    ),
                };
                (key.to_string(), description.to_string(), value)
            })
            .collect()
    }
}
