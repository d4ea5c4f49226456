use crate::core::types::{Bool, Seconds};
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(false),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingDelayConfigItem {
    pub value: Seconds,
    pub description: String,
}

impl Default for TypingDelayConfigItem {
    fn default() -> Self {
        Self {
            value: Seconds::clamped(0.01),
            description: "Pause between typed characters, in seconds.".into(),
        }
    }
}

impl ConfigItem<Seconds> for TypingDelayConfigItem {
    fn get_value(&self) -> &Seconds {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshIntervalConfigItem {
    pub value: Seconds,
    pub description: String,
}

impl Default for RefreshIntervalConfigItem {
    fn default() -> Self {
        Self {
            value: Seconds::clamped(1.0),
            description: "Time between screen redraws, in seconds.".into(),
        }
    }
}

impl ConfigItem<Seconds> for RefreshIntervalConfigItem {
    fn get_value(&self) -> &Seconds {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
