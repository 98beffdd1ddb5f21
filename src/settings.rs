//! User preferences loaded from `settings.json`.
//!
//! Only preferences live here (sizes, startup selection, RNG seed). Masks are
//! session state and are never written to disk.

use crate::catalog::Catalog;
use crate::constants::{
    APP_DIR_NAME, DEFAULT_ALGORITHM, DEFAULT_MAZE_SIZE, DEFAULT_MAZE_SIZES, MAX_GRID_SIZE,
    SETTINGS_FILE_NAME,
};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sizes offered by the size picker
    pub sizes: Vec<usize>,
    /// Size selected at startup
    pub default_size: usize,
    /// Algorithm selected at startup (catalog name)
    pub default_algorithm: String,
    /// Initial state of the "apply mask" toggle
    pub apply_mask: bool,
    /// Fixed RNG seed for reproducible mazes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_MAZE_SIZES.to_vec(),
            default_size: DEFAULT_MAZE_SIZE,
            default_algorithm: DEFAULT_ALGORITHM.to_string(),
            apply_mask: false,
            seed: None,
        }
    }
}

/// `<config_dir>/mazemask/settings.json`, if the platform has a config dir
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from the default location, falling back to defaults on any failure.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            tracing::debug!("No config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.sizes.is_empty() {
            return Err(SettingsError::Invalid("no maze sizes configured".into()));
        }
        if let Some(bad) = self.sizes.iter().find(|s| **s == 0 || **s > MAX_GRID_SIZE) {
            return Err(format!("maze size {bad} outside 1..={MAX_GRID_SIZE}").into());
        }
        if !self.sizes.contains(&self.default_size) {
            return Err(format!("default size {} not in sizes", self.default_size).into());
        }
        if self.catalog().algorithm_by_name(&self.default_algorithm).is_none() {
            return Err(format!("unknown default algorithm {:?}", self.default_algorithm).into());
        }
        Ok(())
    }

    /// Catalog built from these settings' size list
    pub fn catalog(&self) -> Catalog {
        Catalog::with_sizes(self.sizes.clone())
    }
}
