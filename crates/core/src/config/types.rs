use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::link::DEFAULT_PROPERTY;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Folders to exclude from batch operations (relative to vault_root).
    /// These folders and their contents are skipped when a scope expands.
    #[serde(default)]
    pub excluded_folders: Vec<String>,
    /// Property filled when the command line does not name one.
    #[serde(default)]
    pub default_property: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// A profile with every path expanded and every default applied.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    pub excluded_folders: Vec<PathBuf>,
    pub default_property: String,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    /// Built-in configuration used when no config file exists: current
    /// directory as the vault root, no exclusions, stock property name.
    fn default() -> Self {
        Self {
            active_profile: "default".to_string(),
            vault_root: PathBuf::from("."),
            excluded_folders: Vec::new(),
            default_property: DEFAULT_PROPERTY.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}
