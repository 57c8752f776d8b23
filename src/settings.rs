//! User settings stored as settings.json in the app data directory

use crate::types::KeyMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Demo
    pub key_mode: KeyMode,
    pub show_build_counts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            key_mode: KeyMode::Stable,
            show_build_counts: true,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "list-performance-demo-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("roundtrip");
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(640.0),
            window_h: Some(480.0),
            key_mode: KeyMode::Positional,
            show_build_counts: false,
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = scratch_dir("corrupt");
        std::fs::write(dir.join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = scratch_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{ "key_mode": "positional" }"#).unwrap();
        let loaded = Settings::load(&dir);
        assert_eq!(loaded.key_mode, KeyMode::Positional);
        assert!(loaded.show_build_counts);
        assert_eq!(loaded.window_w, None);
        std::fs::remove_dir_all(&dir).ok();
    }
}
