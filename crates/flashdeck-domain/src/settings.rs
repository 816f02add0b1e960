use serde::{Deserialize, Serialize};

pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 64;
pub const MIN_PANEL_OPACITY: f32 = 0.1;
pub const MAX_PANEL_OPACITY: f32 = 1.0;

const DARK_PANEL: &str = "#1f2937";
const LIGHT_TEXT: &str = "#ffffff";
const DARK_TEXT: &str = "#1f2937";

/// Persisted card appearance preferences.
///
/// Missing fields in a stored document fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub font_family: String,
    pub font_size: u32,
    pub panel_color: String,
    pub panel_opacity: f32,
    pub text_color: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_family: "Microsoft YaHei, sans-serif".to_string(),
            font_size: 24,
            panel_color: "#ffffff".to_string(),
            panel_opacity: 0.9,
            text_color: DARK_TEXT.to_string(),
        }
    }
}

impl AppSettings {
    /// Clamp numeric fields into the ranges the form allows.
    pub fn clamped(mut self) -> Self {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self.panel_opacity = if self.panel_opacity.is_nan() {
            MAX_PANEL_OPACITY
        } else {
            self.panel_opacity.clamp(MIN_PANEL_OPACITY, MAX_PANEL_OPACITY)
        };
        self
    }

    /// Pick a panel color; text switches to light only on the dark panel.
    pub fn with_panel_color(mut self, color: impl Into<String>) -> Self {
        self.panel_color = color.into();
        self.text_color = if self.panel_color == DARK_PANEL {
            LIGHT_TEXT.to_string()
        } else {
            DARK_TEXT.to_string()
        };
        self
    }
}
