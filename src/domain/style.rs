//! Style customizations applied uniformly across templates.
//!
//! Font family and font size are closed sets in the editor, but values from
//! other sources (event streams, preset files) are stored verbatim. Both enums
//! therefore carry a `Custom` variant and (de)serialize as plain strings.
//!
//! # Preset Format
//!
//! ```toml
//! name = "ocean"
//! primary_color = "#0ea5e9"
//! font_family = "Merriweather, serif"
//! font_size = "large"
//! spacing = 1.2
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use super::error::{CvforgeError, Result};

/// Accent color of a blank resume.
pub const DEFAULT_PRIMARY_COLOR: &str = "#9b87f5";

/// Lower bound of the spacing slider.
pub const MIN_SPACING: f64 = 0.5;

/// Upper bound of the spacing slider.
pub const MAX_SPACING: f64 = 2.0;

/// Slider step.
pub const SPACING_STEP: f64 = 0.1;

/// Font stacks offered by the style editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    Merriweather,
    Poppins,
    PlayfairDisplay,
    Monospace,
    /// Any other stack, stored as given.
    Custom(String),
}

impl FontFamily {
    /// Every known stack, in editor order.
    pub const KNOWN: [Self; 6] = [
        Self::Inter,
        Self::Roboto,
        Self::Merriweather,
        Self::Poppins,
        Self::PlayfairDisplay,
        Self::Monospace,
    ];

    /// The CSS-style font stack string.
    #[must_use]
    pub fn stack(&self) -> &str {
        match self {
            Self::Inter => "Inter, sans-serif",
            Self::Roboto => "Roboto, sans-serif",
            Self::Merriweather => "Merriweather, serif",
            Self::Poppins => "Poppins, sans-serif",
            Self::PlayfairDisplay => "Playfair Display, serif",
            Self::Monospace => "monospace",
            Self::Custom(stack) => stack,
        }
    }

    /// Human-readable label shown in pickers.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Inter => "Inter (Sans-serif)",
            Self::Roboto => "Roboto (Sans-serif)",
            Self::Merriweather => "Merriweather (Serif)",
            Self::Poppins => "Poppins (Sans-serif)",
            Self::PlayfairDisplay => "Playfair Display (Serif)",
            Self::Monospace => "Monospace",
            Self::Custom(stack) => stack,
        }
    }
}

impl From<String> for FontFamily {
    fn from(value: String) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.stack() == value)
            .unwrap_or(Self::Custom(value))
    }
}

impl From<&str> for FontFamily {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<FontFamily> for String {
    fn from(value: FontFamily) -> Self {
        value.stack().to_string()
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stack())
    }
}

/// Relative text size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Unrecognized size, stored as given. Consumers pick their own fallback.
    Custom(String),
}

impl FontSize {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Custom(value) => value,
        }
    }

    /// Display size in pixels; `None` for custom values.
    #[must_use]
    pub const fn px(&self) -> Option<u8> {
        match self {
            Self::Small => Some(10),
            Self::Medium => Some(12),
            Self::Large => Some(14),
            Self::Custom(_) => None,
        }
    }
}

impl From<String> for FontSize {
    fn from(value: String) -> Self {
        match value.as_str() {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for FontSize {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<FontSize> for String {
    fn from(value: FontSize) -> Self {
        value.as_str().to_string()
    }
}

/// User-adjustable presentation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleCustomizations {
    pub primary_color: String,
    pub font_family: FontFamily,
    pub font_size: FontSize,
    /// Line spacing multiplier. The editor keeps it in
    /// `[MIN_SPACING, MAX_SPACING]`; the store does not clamp.
    pub spacing: f64,
}

impl Default for StyleCustomizations {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            font_family: FontFamily::default(),
            font_size: FontSize::default(),
            spacing: 1.0,
        }
    }
}

impl StyleCustomizations {
    /// Shallow-merges a partial update. Fields absent from `patch` are kept.
    pub fn merge(&mut self, patch: &StylePatch) {
        if let Some(color) = &patch.primary_color {
            self.primary_color.clone_from(color);
        }
        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
        if let Some(size) = &patch.font_size {
            self.font_size = size.clone();
        }
        if let Some(spacing) = patch.spacing {
            self.spacing = spacing;
        }
    }
}

/// Partial style update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePatch {
    pub primary_color: Option<String>,
    pub font_family: Option<FontFamily>,
    pub font_size: Option<FontSize>,
    pub spacing: Option<f64>,
}

/// A named style loaded from a TOML file.
///
/// Every field is optional; applying a preset only touches what it names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StylePreset {
    pub name: Option<String>,
    pub primary_color: Option<String>,
    pub font_family: Option<FontFamily>,
    pub font_size: Option<FontSize>,
    pub spacing: Option<f64>,
}

impl StylePreset {
    /// Parses a preset from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CvforgeError::Style`] on invalid TOML or unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| CvforgeError::Style(format!("Failed to parse style preset: {e}")))
    }

    /// Loads a preset from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CvforgeError::Style`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CvforgeError::Style(format!("Failed to read style preset: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Converts the preset into a store-level partial update.
    #[must_use]
    pub fn to_patch(&self) -> StylePatch {
        StylePatch {
            primary_color: self.primary_color.clone(),
            font_family: self.font_family.clone(),
            font_size: self.font_size.clone(),
            spacing: self.spacing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_known_font_stack_round_trips() {
        for family in FontFamily::KNOWN {
            assert_eq!(FontFamily::from(family.stack()), family);
        }
        assert_eq!(
            FontFamily::from("Comic Sans MS"),
            FontFamily::Custom("Comic Sans MS".to_string())
        );
    }

    #[test]
    fn test_font_size_px() {
        assert_eq!(FontSize::Small.px(), Some(10));
        assert_eq!(FontSize::Medium.px(), Some(12));
        assert_eq!(FontSize::Large.px(), Some(14));
        assert_eq!(FontSize::from("huge").px(), None);
        assert_eq!(FontSize::from("huge").as_str(), "huge");
    }

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let mut style = StyleCustomizations::default();
        style.merge(&StylePatch {
            primary_color: Some("#ff0000".to_string()),
            ..StylePatch::default()
        });
        assert_eq!(style.primary_color, "#ff0000");
        assert_eq!(style.font_family, FontFamily::Inter);
        assert_eq!(style.font_size, FontSize::Medium);
        assert!((style.spacing - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_uses_plain_strings() {
        let json = serde_json::to_value(StyleCustomizations::default()).unwrap();
        assert_eq!(json["fontFamily"], "Inter, sans-serif");
        assert_eq!(json["fontSize"], "medium");
        assert_eq!(json["primaryColor"], DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_preset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "name = \"ocean\"\nprimary_color = \"#0ea5e9\"\nfont_family = \"Merriweather, serif\"\nfont_size = \"large\""
        )
        .unwrap();

        let preset = StylePreset::from_file(file.path()).unwrap();
        assert_eq!(preset.name.as_deref(), Some("ocean"));

        let patch = preset.to_patch();
        assert_eq!(patch.font_family, Some(FontFamily::Merriweather));
        assert_eq!(patch.font_size, Some(FontSize::Large));
        assert_eq!(patch.spacing, None);
    }

    #[test]
    fn test_preset_rejects_unknown_keys() {
        let err = StylePreset::from_toml("colour = \"red\"").unwrap_err();
        assert!(matches!(err, CvforgeError::Style(_)));
    }
}
