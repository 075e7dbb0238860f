use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::Coordinates;

/// A named place with its coordinates, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl SavedLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// [default_location]
    /// name = "Berlin"
    /// latitude = 52.52
    /// longitude = 13.41
    pub default_location: Option<SavedLocation>,
}

impl Config {
    /// Return the saved default location, with a hint when none is set yet.
    pub fn require_default_location(&self) -> Result<&SavedLocation> {
        self.default_location.as_ref().ok_or_else(|| {
            anyhow!(
                "No default location configured.\n\
                 Hint: run `skycast configure` first, or pass --lat/--lon."
            )
        })
    }

    pub fn set_default_location(&mut self, location: SavedLocation) {
        self.default_location = Some(location);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_default_location_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.require_default_location().unwrap_err();

        assert!(err.to_string().contains("No default location configured"));
    }

    #[test]
    fn set_and_read_back_default_location() {
        let mut cfg = Config::default();

        cfg.set_default_location(SavedLocation {
            name: "Berlin".into(),
            latitude: 52.52,
            longitude: 13.41,
        });

        let loc = cfg
            .require_default_location()
            .expect("default location must exist");
        assert_eq!(loc.name, "Berlin");

        let coords = loc.coordinates();
        assert!((coords.latitude - 52.52).abs() < 1e-9);
        assert!((coords.longitude - 13.41).abs() < 1e-9);
    }

    #[test]
    fn toml_roundtrip_preserves_the_location() {
        let mut cfg = Config::default();
        cfg.set_default_location(SavedLocation {
            name: "Sydney".into(),
            latitude: -33.87,
            longitude: 151.21,
        });

        let toml = toml::to_string_pretty(&cfg).expect("config serializes");
        let back: Config = toml::from_str(&toml).expect("config parses");

        let loc = back
            .require_default_location()
            .expect("location survives the roundtrip");
        assert_eq!(loc.name, "Sydney");
        assert!((loc.latitude + 33.87).abs() < 1e-9);
        assert!((loc.longitude - 151.21).abs() < 1e-9);
    }

    #[test]
    fn empty_config_parses_to_default() {
        let cfg: Config = toml::from_str("").expect("empty config is valid");
        assert!(cfg.default_location.is_none());
    }
}
