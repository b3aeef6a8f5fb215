//! User settings for Markpad
//!
//! All user-configurable options, with serde support for JSON
//! persistence. Values loaded from disk pass through
//! [`Settings::sanitize`] so a hand-edited config file cannot put the
//! editor into a broken state.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    /// Display label for the settings menu.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark, Theme::System]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// User-configurable editor options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color theme.
    pub theme: Theme,
    /// Editor font size in points.
    pub font_size: f32,
    /// Spaces inserted per Tab press.
    pub tab_size: usize,
    /// Soft-wrap long lines.
    pub word_wrap: bool,
    /// Show the command toolbar above the editor.
    pub show_toolbar: bool,
    /// Focus the editing surface on startup.
    pub auto_focus: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: 14.0,
            tab_size: 2,
            word_wrap: true,
            show_toolbar: true,
            auto_focus: true,
        }
    }
}

impl Settings {
    pub const MIN_FONT_SIZE: f32 = 8.0;
    pub const MAX_FONT_SIZE: f32 = 32.0;
    pub const MIN_TAB_SIZE: usize = 1;
    pub const MAX_TAB_SIZE: usize = 8;

    /// Clamp all numeric fields into their valid ranges.
    pub fn sanitize(&mut self) {
        self.font_size = self.font_size.clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);
        self.tab_size = self.tab_size.clamp(Self::MIN_TAB_SIZE, Self::MAX_TAB_SIZE);
    }

    /// Parse settings from JSON and sanitize out-of-range values.
    pub fn from_json_sanitized(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.font_size, 14.0);
        assert_eq!(settings.tab_size, 2);
        assert!(settings.word_wrap);
        assert!(settings.show_toolbar);
        assert!(settings.auto_focus);
    }

    #[test]
    fn test_sanitize_clamps_ranges() {
        let mut settings = Settings {
            font_size: 2.0,
            tab_size: 40,
            ..Settings::default()
        };
        settings.sanitize();
        assert_eq!(settings.font_size, Settings::MIN_FONT_SIZE);
        assert_eq!(settings.tab_size, Settings::MAX_TAB_SIZE);
    }

    #[test]
    fn test_from_json_sanitized() {
        let settings = Settings::from_json_sanitized(r#"{"tab_size": 0}"#).unwrap();
        assert_eq!(settings.tab_size, Settings::MIN_TAB_SIZE);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json_sanitized(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_size, 14.0);
        assert!(settings.show_toolbar);
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = Settings {
            theme: Theme::System,
            font_size: 18.0,
            tab_size: 4,
            word_wrap: false,
            show_toolbar: false,
            auto_focus: false,
        };
        let json = serde_json::to_string(&original).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let result = Settings::from_json_sanitized(r#"{"theme": "dark", "future_knob": 1}"#);
        assert!(result.is_ok());
    }
}
