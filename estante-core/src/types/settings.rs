//! Reader display preferences

use serde::{Deserialize, Serialize};

/// Smallest accepted font size in px
pub const FONT_SIZE_MIN: u8 = 12;

/// Largest accepted font size in px
pub const FONT_SIZE_MAX: u8 = 24;

/// Default font size in px
pub const FONT_SIZE_DEFAULT: u8 = 16;

/// Session-scoped display preferences, shared across all books
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReaderSettings {
    /// Font size in px, within [FONT_SIZE_MIN, FONT_SIZE_MAX]
    pub font_size: u8,

    /// Reading surface theme, independent of the global UI theme
    pub theme: ReaderTheme,

    /// Typeface family
    pub font_family: FontFamily,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
            theme: ReaderTheme::Light,
            font_family: FontFamily::Serif,
        }
    }
}

impl ReaderSettings {
    /// Last-write-wins merge: fields present in the patch replace the
    /// current values, absent fields are retained
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        Self {
            font_size: patch.font_size.unwrap_or(self.font_size),
            theme: patch.theme.unwrap_or(self.theme),
            font_family: patch.font_family.unwrap_or(self.font_family),
        }
    }
}

/// Partial update for [`ReaderSettings`]; absent fields are untouched
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ReaderTheme>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
}

impl SettingsPatch {
    /// Whether the patch names no fields at all
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none() && self.theme.is_none() && self.font_family.is_none()
    }
}

/// Color scheme of the reading surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReaderTheme {
    #[default]
    Light,
    Dark,
    Sepia,
}

/// Typeface family for chapter text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    Serif,
    SansSerif,
    Monospace,
}
