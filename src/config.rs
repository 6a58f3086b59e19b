use crate::error::{MenuFixError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default menu document, used when a subcommand gets no --file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menus_path: Option<PathBuf>,
    /// Directory run reports land in; defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MenuFixError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("menu-fix").join("config.json"))
    }

    /// Document path precedence: explicit flag, configured default, then
    /// ./menus.json.
    pub fn resolve_document(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.menus_path.clone())
            .unwrap_or_else(|| PathBuf::from("menus.json"))
    }

    /// Report path precedence: explicit flag, configured report directory,
    /// then the working directory.
    pub fn resolve_report(&self, flag: Option<PathBuf>, file_name: &str) -> PathBuf {
        if let Some(path) = flag {
            return path;
        }
        match &self.report_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}
