use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Operational options loaded from
/// `<config_dir>/haptic-playground/config.toml`. Missing file or missing
/// keys fall back to defaults; the ten playback parameters are never
/// persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address of the OSC haptic/audio renderer.
    pub engine_addr: String,
    /// When false, playback goes to the null engine.
    pub engine_enabled: bool,
    /// Quiescence window between the last slider change and playback.
    pub debounce_ms: u64,
    /// Log level filter: off, error, warn, info, debug, trace.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine_addr: "127.0.0.1:57120".to_string(),
            engine_enabled: true,
            debounce_ms: 50,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("haptic-playground").join("config.toml"))
    }

    /// Load from the default location; any failure falls back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("invalid config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(path, contents)
    }
}
