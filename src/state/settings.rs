use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXPORT_FILE_NAME, DEFAULT_PLAYER_HEIGHT, DEFAULT_PLAYER_WIDTH, DEFAULT_SEGMENT_SPAN_SECONDS,
    DEFAULT_VIDEO_ID, SEGMENT_POLL_INTERVAL_MS,
};

const SETTINGS_FILE_NAME: &str = "settings.json";

/// User-adjustable application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// Video shown before anything is loaded
    #[serde(default = "default_video_id")]
    pub default_video_id: String,
    /// Length of a newly added segment in seconds
    #[serde(default = "default_span_seconds")]
    pub default_span_seconds: f64,
    /// Period of the segment boundary check
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_player_width")]
    pub player_width: f64,
    #[serde(default = "default_player_height")]
    pub player_height: f64,
    /// File name suggested when exporting
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_video_id() -> String {
    DEFAULT_VIDEO_ID.to_string()
}

fn default_span_seconds() -> f64 {
    DEFAULT_SEGMENT_SPAN_SECONDS
}

fn default_poll_interval_ms() -> u64 {
    SEGMENT_POLL_INTERVAL_MS
}

fn default_player_width() -> f64 {
    DEFAULT_PLAYER_WIDTH
}

fn default_player_height() -> f64 {
    DEFAULT_PLAYER_HEIGHT
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_video_id: default_video_id(),
            default_span_seconds: default_span_seconds(),
            poll_interval_ms: default_poll_interval_ms(),
            player_width: default_player_width(),
            player_height: default_player_height(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl AppSettings {
    /// Load `settings.json` from `folder`. A missing file yields defaults.
    pub fn load(folder: &Path) -> io::Result<Self> {
        let path = folder.join(SETTINGS_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(&path)?;
        let settings = serde_json::from_str(&json)?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is unusable.
    pub fn load_or_default(folder: &Path) -> Self {
        match Self::load(folder) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(folder = %folder.display(), %err, "ignoring unreadable settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, folder: &Path) -> io::Result<()> {
        fs::create_dir_all(folder)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(folder.join(SETTINGS_FILE_NAME), json)?;
        Ok(())
    }

    /// Poll interval, never below 10 ms.
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load(dir.path()).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.default_video_id, "dQw4w9WgXcQ");
        assert_eq!(settings.default_span_seconds, 10.0);
        assert_eq!(settings.poll_interval_ms, 100);
        assert_eq!(settings.export_file_name, "timestamps.json");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), r#"{"default_span_seconds": 4.5}"#).unwrap();
        let settings = AppSettings::load(dir.path()).unwrap();
        assert_eq!(settings.default_span_seconds, 4.5);
        assert_eq!(settings.player_width, 640.0);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), "{ nope").unwrap();
        assert!(AppSettings::load(dir.path()).is_err());
        assert_eq!(AppSettings::load_or_default(dir.path()), AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = AppSettings::default();
        settings.poll_interval_ms = 50;
        settings.save(dir.path()).unwrap();
        assert_eq!(AppSettings::load(dir.path()).unwrap(), settings);
    }

    #[test]
    fn test_poll_interval_has_floor() {
        let settings = AppSettings {
            poll_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(settings.poll_interval(), std::time::Duration::from_millis(10));
    }
}
