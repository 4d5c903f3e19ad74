//! Color palettes for board rendering
//!
//! A palette fixes the four colors applied uniformly across one render:
//! background, text, accent, and border. A small closed set of named palettes
//! is built in; custom palettes can be supplied via a TOML stylesheet.
//! Unknown palette names resolve to the `classic` palette rather than failing,
//! since every drawing step downstream assumes a palette is available.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// The four colors applied uniformly across one render
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Palette {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub border: String,
}

impl Palette {
    fn new(background: &str, text: &str, accent: &str, border: &str) -> Self {
        Self {
            background: background.to_string(),
            text: text.to_string(),
            accent: accent.to_string(),
            border: border.to_string(),
        }
    }

    /// The default palette used when a requested name is unknown
    pub fn classic() -> Self {
        Self::new("#f8fafc", "#1f2937", "#3b82f6", "#e5e7eb")
    }

    /// Look up a built-in palette by name
    pub fn builtin(name: &str) -> Option<Self> {
        let palette = match name {
            "classic" => Self::classic(),
            "dark" => Self::new("#1f2937", "#f9fafb", "#60a5fa", "#374151"),
            "warm" => Self::new("#fef7ed", "#9a3412", "#ea580c", "#fed7aa"),
            "cool" => Self::new("#f0f9ff", "#164e63", "#0891b2", "#e0f2fe"),
            "colorful" => Self::new("#ffffff", "#1f2937", "#2563eb", "#e5e7eb"),
            "monochrome" => Self::new("#ffffff", "#1f2937", "#374151", "#e5e7eb"),
            "two_color" => Self::new("#ffffff", "#1f2937", "#2563eb", "#e5e7eb"),
            _ => return None,
        };
        Some(palette)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

/// A stylesheet adding custom named palettes on top of the built-in set
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Custom palettes: name -> palette
    pub palettes: HashMap<String, Palette>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    palettes: HashMap<String, Palette>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            palettes: parsed.palettes,
        })
    }

    /// Resolve a palette name to concrete colors.
    ///
    /// Resolution order: this stylesheet's custom palettes, then the built-in
    /// set, then the `classic` palette. The final fallback is a silent
    /// recovery (logged, not surfaced as an error).
    pub fn resolve(&self, name: &str) -> Palette {
        if let Some(palette) = self.palettes.get(name) {
            return palette.clone();
        }
        if let Some(palette) = Palette::builtin(name) {
            return palette;
        }
        log::warn!("unknown color scheme '{}', using classic", name);
        Palette::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_palettes() {
        assert!(Palette::builtin("classic").is_some());
        assert!(Palette::builtin("dark").is_some());
        assert!(Palette::builtin("warm").is_some());
        assert!(Palette::builtin("cool").is_some());
        assert!(Palette::builtin("not-a-real-palette").is_none());
    }

    #[test]
    fn test_classic_values() {
        let classic = Palette::classic();
        assert_eq!(classic.background, "#f8fafc");
        assert_eq!(classic.text, "#1f2937");
        assert_eq!(classic.accent, "#3b82f6");
        assert_eq!(classic.border, "#e5e7eb");
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_classic() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("not-a-real-palette"), Palette::classic());
    }

    #[test]
    fn test_custom_palette_overrides_builtin() {
        let toml_str = r##"
[metadata]
name = "School Brand"

[palettes.classic]
background = "#000000"
text = "#ffffff"
accent = "#ff0000"
border = "#333333"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("should parse");
        assert_eq!(stylesheet.name, Some("School Brand".to_string()));
        assert_eq!(stylesheet.resolve("classic").background, "#000000");
        // Other built-ins are untouched
        assert_eq!(stylesheet.resolve("dark").background, "#1f2937");
    }

    #[test]
    fn test_parse_toml_without_metadata() {
        let toml_str = r##"
[palettes.brand]
background = "#ffffff"
text = "#111111"
accent = "#0044cc"
border = "#dddddd"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("should parse");
        assert_eq!(stylesheet.name, None);
        assert_eq!(stylesheet.resolve("brand").accent, "#0044cc");
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_str(invalid);
        assert!(result.is_err());
    }
}
