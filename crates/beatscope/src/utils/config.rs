//! Configuration file management.
//!
//! Handles loading and saving user preferences to `~/.beatscope.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_VOLUME: f32 = 1.0;
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 400;

const CONFIG_TEMPLATE: &str = r#"# beatscope configuration file

# Output volume, 0.0 - 1.0 (auto-saved when changed with Up/Down)
# volume = 1.0

# Window size in pixels (default: 800 x 400)
# window_width = 800
# window_height = 400

# Pick a random style whenever a track finishes loading (default: true)
# random_style_on_load = true

# Last opened file (auto-saved)
# last_file = "/path/to/track.mp3"
"#;

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Config {
    pub volume: Option<f32>,
    pub window_width: Option<u32>,
    pub window_height: Option<u32>,
    pub random_style_on_load: Option<bool>,
    pub last_file: Option<PathBuf>,
}

impl Config {
    fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".beatscope.toml"))
    }

    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, writing the commented template first if it is missing
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            match fs::write(path, CONFIG_TEMPLATE) {
                Ok(()) => log::info!("Created config template at {:?}", path),
                Err(e) => log::warn!("Could not write config template {:?}: {}", path, e),
            }
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse TOML, falling back to defaults on malformed input
    pub fn parse(content: &str) -> Self {
        toml::from_str(content).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed config: {}", e);
            Self::default()
        })
    }

    pub fn save(&self) {
        if let Some(path) = Self::path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        match toml::to_string(self) {
            Ok(content) => match fs::write(path, &content) {
                Ok(()) => log::debug!("Config saved to {:?}", path),
                Err(e) => log::warn!("Could not save config {:?}: {}", path, e),
            },
            Err(e) => log::warn!("Could not serialize config: {}", e),
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume.unwrap_or(DEFAULT_VOLUME).clamp(0.0, 1.0)
    }

    pub fn window_size(&self) -> (u32, u32) {
        (
            self.window_width.unwrap_or(DEFAULT_WIDTH).max(1),
            self.window_height.unwrap_or(DEFAULT_HEIGHT).max(1),
        )
    }

    pub fn random_style_on_load(&self) -> bool {
        self.random_style_on_load.unwrap_or(true)
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = Some(volume.clamp(0.0, 1.0));
        self.save();
    }

    pub fn set_last_file(&mut self, path: &Path) {
        self.last_file = Some(path.to_path_buf());
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let config = Config::parse(CONFIG_TEMPLATE);
        assert_eq!(config, Config::default());
        assert_eq!(config.volume(), 1.0);
        assert_eq!(config.window_size(), (800, 400));
        assert!(config.random_style_on_load());
    }

    #[test]
    fn test_values_are_read_and_clamped() {
        let config = Config::parse("volume = 3.5\nwindow_width = 1024\nrandom_style_on_load = false\n");
        assert_eq!(config.volume(), 1.0);
        assert_eq!(config.window_size(), (1024, 400));
        assert!(!config.random_style_on_load());
    }

    #[test]
    fn test_malformed_falls_back() {
        assert_eq!(Config::parse("volume = \"loud\""), Config::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("beatscope-config-{}.toml", std::process::id()));
        let config = Config {
            volume: Some(0.4),
            last_file: Some(PathBuf::from("/music/track.flac")),
            ..Config::default()
        };
        config.save_to(&path);
        let loaded = Config::load_from(&path);
        fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gets_template() {
        let path = std::env::temp_dir().join(format!("beatscope-template-{}.toml", std::process::id()));
        fs::remove_file(&path).ok();
        let loaded = Config::load_from(&path);
        let written = fs::read_to_string(&path).unwrap_or_default();
        fs::remove_file(&path).ok();
        assert_eq!(loaded, Config::default());
        assert!(written.starts_with("# beatscope configuration file"));
    }
}
