//! Global volo configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{VoloError, VoloResult};

static DEFAULT_SCHEDULE_PATH: &str = "~/.local/share/volo/events.json";

/// Global configuration at ~/.config/volo/config.toml
///
/// Only locates the schedule file for now; per-invocation overrides go
/// through the CLI's --file flag instead of this file.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct VoloConfig {
    /// Path to the schedule file. `~` is expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_file: Option<PathBuf>,
}

impl VoloConfig {
    pub fn config_path() -> VoloResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| VoloError::Config("Could not determine config directory".into()))?
            .join("volo");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> VoloResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: VoloConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| VoloError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| VoloError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/volo/config.toml
    pub fn save(&self) -> VoloResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| VoloError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| VoloError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> VoloResult<()> {
        let contents = format!(
            "\
# volo configuration

# Where the event schedule lives:
# schedule_file = \"{}\"
",
            DEFAULT_SCHEDULE_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                VoloError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| VoloError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the schedule file path: the configured path (tilde
    /// expanded) or the platform data directory default.
    pub fn schedule_path(&self) -> VoloResult<PathBuf> {
        if let Some(path) = &self.schedule_file {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            return Ok(PathBuf::from(expanded));
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| VoloError::Config("Could not determine data directory".into()))?;

        Ok(data_dir.join("volo").join("events.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_path_is_under_the_data_dir() {
        let config = VoloConfig::default();
        let path = config.schedule_path().unwrap();
        assert!(path.ends_with("volo/events.json"));
    }

    #[test]
    fn configured_schedule_path_expands_tilde() {
        let config = VoloConfig {
            schedule_file: Some(PathBuf::from("~/events/schedule.json")),
        };
        let path = config.schedule_path().unwrap();
        assert!(path.ends_with("events/schedule.json"));
        assert!(!path.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn absolute_schedule_path_is_kept_as_is() {
        let config = VoloConfig {
            schedule_file: Some(PathBuf::from("/tmp/volo/schedule.json")),
        };
        let path = config.schedule_path().unwrap();
        assert_eq!(path, PathBuf::from("/tmp/volo/schedule.json"));
    }
}
