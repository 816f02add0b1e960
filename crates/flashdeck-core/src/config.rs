use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 80.0;
pub const DEFAULT_LONG_PRESS_MS: u64 = 600;
pub const DEFAULT_DRAG_ENGAGE_DISTANCE: f32 = 3.0;
pub const DEFAULT_FEEDBACK_ACTIVATION: f32 = 50.0;
pub const DEFAULT_FEEDBACK_FULL: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the persisted deck and settings documents.
    pub data_dir: Option<PathBuf>,
    pub swipe_threshold: f32,
    pub long_press_ms: u64,
    /// Distance a pressed pointer must travel before it counts as a drag.
    pub drag_engage_distance: f32,
    pub feedback_activation: f32,
    pub feedback_full: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            drag_engage_distance: DEFAULT_DRAG_ENGAGE_DISTANCE,
            feedback_activation: DEFAULT_FEEDBACK_ACTIVATION,
            feedback_full: DEFAULT_FEEDBACK_FULL,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/flashdeck/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("flashdeck/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("flashdeck\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Self::default(),
        }
    }

    /// Read a config file, falling back to defaults when it is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str::<Self>(&content) {
                    return config.sanitized();
                }
            }
        }
        Self::default()
    }

    /// Replace out-of-range gesture tuning with the defaults.
    ///
    /// Distances must be finite and non-negative, and the feedback ramp must
    /// end strictly after it starts.
    pub fn sanitized(mut self) -> Self {
        if !is_distance(self.swipe_threshold) {
            self.swipe_threshold = DEFAULT_SWIPE_THRESHOLD;
        }
        if !is_distance(self.drag_engage_distance) {
            self.drag_engage_distance = DEFAULT_DRAG_ENGAGE_DISTANCE;
        }
        let ramp_ok = is_distance(self.feedback_activation)
            && self.feedback_full.is_finite()
            && self.feedback_full > self.feedback_activation;
        if !ramp_ok {
            self.feedback_activation = DEFAULT_FEEDBACK_ACTIVATION;
            self.feedback_full = DEFAULT_FEEDBACK_FULL;
        }
        self
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|data| data.join("flashdeck"))
            .unwrap_or_else(|| PathBuf::from(".flashdeck"))
    }
}

fn is_distance(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
