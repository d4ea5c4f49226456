use std::path::PathBuf;

pub const CONFIG_ENV: &str = "TERMSAVER_CONFIG";
pub const LOGS_ENV: &str = "TERMSAVER_LOGS";

/// Filesystem locations the application reads from or writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves paths through `lookup`, which maps an environment variable name
    /// to its value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut paths = Self::defaults(get("HOME"));
        if let Some(config) = get(CONFIG_ENV) {
            paths.config_path = PathBuf::from(config);
        }
        if let Some(logs) = get(LOGS_ENV) {
            paths.logs_dir = PathBuf::from(logs);
        }
        paths
    }

    fn defaults(home: Option<String>) -> Self {
        match home {
            Some(home) => {
                let base = PathBuf::from(home).join(".config").join("termsaver");
                Self {
                    config_path: base.join("config.json"),
                    logs_dir: base.join("logs"),
                }
            }
            None => Self {
                config_path: PathBuf::from("termsaver.json"),
                logs_dir: PathBuf::from("logs"),
            },
        }
    }
}
