use crate::errors::{AppError, AppResult};
use crate::models::TypeFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SETTINGS_FILE_NAME: &str = "settings.yaml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrySettings {
    pub log_level: String,
    pub log_format: LogFormat,
    pub default_filter_type: TypeFilter,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
            default_filter_type: TypeFilter::All,
        }
    }
}

pub fn load_settings(config_dir: &Path) -> AppResult<RegistrySettings> {
    let path = config_dir.join(SETTINGS_FILE_NAME);
    if !path.exists() {
        return Ok(RegistrySettings::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    if raw.trim().is_empty() {
        return Ok(RegistrySettings::default());
    }
    serde_yaml::from_str(&raw)
        .map_err(|error| AppError::Config(format!("{}: {}", path.display(), error)))
}
