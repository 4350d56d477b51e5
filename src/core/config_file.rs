//! User configuration file handling
//!
//! Manages settings from ~/.config/glyph-desmos/settings.json

use crate::formula::FormulaStyle;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/glyph-desmos/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    /// Divisor applied to font units (built-in default: 1500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalization: Option<f64>,
    /// Name of the quadratic Bezier helper in the target graph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quadratic_fn: Option<String>,
    /// Name of the cubic Bezier helper in the target graph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cubic_fn: Option<String>,
    /// Print the helper definitions before the glyph formulas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emit_helpers: Option<bool>,
}

impl ConfigFile {
    /// Get the path to the glyph-desmos config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("glyph-desmos")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    ///
    /// A missing or unreadable default file is not an error; the built-in
    /// defaults apply.
    pub fn load() -> Option<Self> {
        match Self::load_from(&Self::config_path()) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        }
    }

    /// Load configuration from an explicit path. `Ok(None)` if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        debug!("Loaded user settings from {:?}", path);
        Ok(Some(config))
    }

    /// Save configuration to the given path
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Settings matching the built-in defaults, written out in full
    pub fn example() -> Self {
        let style = FormulaStyle::default();
        Self {
            normalization: Some(style.normalization),
            quadratic_fn: Some(style.quadratic_fn),
            cubic_fn: Some(style.cubic_fn),
            emit_helpers: Some(false),
        }
    }

    /// Overlay the configured values on a formula style
    pub fn apply_to(&self, style: &mut FormulaStyle) {
        if let Some(normalization) = self.normalization {
            style.normalization = normalization;
        }
        if let Some(name) = &self.quadratic_fn {
            style.quadratic_fn = name.clone();
        }
        if let Some(name) = &self.cubic_fn {
            style.cubic_fn = name.clone();
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The config directory itself
    /// 2. A settings.json file with default values (unless one exists)
    /// 3. A logs/ directory for --log-file output
    pub fn initialize_config_directory(config_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        Self::initialize_settings_file(&settings_path)?;
        Ok(settings_path)
    }

    /// Write the default settings to `path` unless a file is already there
    pub fn initialize_settings_file(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            println!("Settings file already exists: {:?}", path);
            return Ok(());
        }
        Self::example()
            .save_to(path)
            .with_context(|| format!("Failed to write settings file {}", path.display()))?;
        println!("Created settings file: {:?}", path);
        Ok(())
    }
}
