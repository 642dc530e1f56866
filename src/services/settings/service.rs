use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::DndConfig;

const CONFIG_FILE: &str = "dnd.toml";

pub struct SettingsService;

impl SettingsService {
    /// Platform config location, e.g. `~/.config/scheduler-dnd/dnd.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Ken24T", "scheduler-dnd")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Parse and validate a configuration from TOML text.
    /// Unset keys fall back to their defaults.
    pub fn parse(text: &str) -> Result<DndConfig> {
        let config: DndConfig =
            toml::from_str(text).context("Failed to parse drag-and-drop settings")?;
        config
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(config)
    }

    /// Load settings from `path`; a missing file yields defaults
    pub fn load(path: &Path) -> Result<DndConfig> {
        if !path.exists() {
            log::info!("No settings at {:?}, using defaults", path);
            return Ok(DndConfig::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let config = Self::parse(&text)?;
        log::debug!("Loaded settings from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Load from the platform config location, or defaults when there is none
    pub fn load_default() -> Result<DndConfig> {
        match Self::default_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(DndConfig::default()),
        }
    }

    /// Write settings as TOML, creating parent directories
    pub fn save(path: &Path, config: &DndConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        let text = toml::to_string_pretty(config).context("Failed to serialize settings")?;
        fs::write(path, text).with_context(|| format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }
}
