//! Gallery configuration persisted between runs.
//!
//! One JSON file holding the selected theme. Missing file means defaults;
//! an unknown theme identifier falls back to light rather than failing
//! startup.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use fieldwork_ui::ThemeName;

const CONFIG_FILE: &str = "gallery.json";

/// On-disk settings for the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Selected theme identifier (`light`, `dark`, `black`).
    pub theme: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Light.as_str().to_string(),
        }
    }
}

impl GalleryConfig {
    /// Config carrying the given theme.
    pub fn with_theme(theme: ThemeName) -> Self {
        Self {
            theme: theme.as_str().to_string(),
        }
    }

    /// Parsed theme, falling back to light on unknown identifiers.
    pub fn theme_name(&self) -> ThemeName {
        self.theme.parse().unwrap_or_else(|err| {
            tracing::warn!("{}, falling back to light", err);
            ThemeName::Light
        })
    }
}

/// Default directory for the config file.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fieldwork")
}

fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Load the config from `dir`, or defaults when no file exists yet.
pub fn load(dir: &Path) -> Result<GalleryConfig> {
    let path = config_path(dir);
    if !path.exists() {
        return Ok(GalleryConfig::default());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config at {}", path.display()))?;
    Ok(config)
}

/// Persist the config under `dir`, creating the directory when missing.
pub fn save(dir: &Path, config: &GalleryConfig) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating config dir {}", dir.display()))?;
    let path = config_path(dir);
    let raw = serde_json::to_string_pretty(config)?;
    fs::write(&path, raw).with_context(|| format!("writing config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = load(dir.path()).unwrap();
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.theme_name(), ThemeName::Light);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let config = GalleryConfig::with_theme(ThemeName::Black);
        save(dir.path(), &config).unwrap();

        let loaded = load(dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.theme_name(), ThemeName::Black);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        save(&nested, &GalleryConfig::default()).unwrap();
        assert!(nested.join(CONFIG_FILE).exists());
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        let config = GalleryConfig {
            theme: "solarized".to_string(),
        };
        assert_eq!(config.theme_name(), ThemeName::Light);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        assert!(load(dir.path()).is_err());
    }
}
