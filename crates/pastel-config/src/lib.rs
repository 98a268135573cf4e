//! Configuration for pastel.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/pastel` on Linux). Missing files and missing keys fall back
//! to defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use pastel_core::{AnimationSelector, AnimationVariant};
use serde::{Deserialize, Serialize};
use tracing::debug;

const CONFIG_FILE: &str = "config.toml";

/// Errors raised while reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no configuration directory could be determined")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// User settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Raw animation selector: 0 off, 1 floating symbols, 2 colored.
    /// Unknown values behave as off.
    pub background_animation: i32,
    /// Opacity of the menu background.
    pub alpha: f32,
    /// Game whose background is shown, if any.
    pub game_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background_animation: AnimationVariant::FloatingSymbols.selector(),
            alpha: 1.0,
            game_path: None,
        }
    }
}

impl AnimationSelector for Config {
    fn animation_selector(&self) -> i32 {
        self.background_animation
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "pastel")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, using defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// The configured animation variant.
    pub fn animation(&self) -> AnimationVariant {
        self.animation_variant()
    }

    /// Select the next animation variant.
    pub fn cycle_animation(&mut self) {
        self.background_animation = self.animation().next().selector();
    }

    /// Empty path when no game is selected.
    pub fn game_path(&self) -> &Path {
        self.game_path.as_deref().unwrap_or(Path::new(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.animation(), AnimationVariant::FloatingSymbols);
        assert_eq!(config.alpha, 1.0);
        assert_eq!(config.game_path(), Path::new(""));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "background_animation = 2\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.animation(), AnimationVariant::FloatingSymbolsColored);
        assert_eq!(config.alpha, 1.0);
    }

    #[test]
    fn test_unknown_selector_is_off() {
        let config = Config {
            background_animation: 99,
            ..Default::default()
        };
        assert_eq!(config.animation(), AnimationVariant::Off);
        assert_eq!(config.animation_selector(), 99);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            background_animation: 0,
            alpha: 0.5,
            game_path: Some(PathBuf::from("/games/demo.iso")),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "background_animation = \"lots\"\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_cycle_animation() {
        let mut config = Config::default();
        config.cycle_animation();
        assert_eq!(config.animation(), AnimationVariant::FloatingSymbolsColored);
        config.cycle_animation();
        assert_eq!(config.animation(), AnimationVariant::Off);

        config.background_animation = 42;
        config.cycle_animation();
        assert_eq!(config.animation(), AnimationVariant::FloatingSymbols);
    }
}
