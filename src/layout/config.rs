//! Configuration for board layout

use serde::{Deserialize, Serialize};

/// The four base font sizes used across a board, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub title: f64,
    pub main: f64,
    pub sub: f64,
    pub small: f64,
}

impl FontSizes {
    /// Scale all four sizes by a uniform multiplier
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            title: self.title * multiplier,
            main: self.main * multiplier,
            sub: self.sub * multiplier,
            small: self.small * multiplier,
        }
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 48.0,
            main: 32.0,
            sub: 24.0,
            small: 18.0,
        }
    }
}

/// Four-sided inset around the board content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Uniform padding on all four sides
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(60.0)
    }
}

/// Vertical spacing constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Gap between sections
    pub section: f64,
    /// Advance per wrapped text line
    pub line: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            section: 40.0,
            line: 32.0,
        }
    }
}

/// Text size class selected per render request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    /// Multiplier applied uniformly to all four base font sizes
    pub fn multiplier(&self) -> f64 {
        match self {
            TextSize::Small => 0.8,
            TextSize::Medium => 1.0,
            TextSize::Large => 1.2,
        }
    }

    /// Parse a size name, defaulting to `Medium` for unknown values
    pub fn from_name(name: &str) -> Self {
        match name {
            "small" => TextSize::Small,
            "large" => TextSize::Large,
            _ => TextSize::Medium,
        }
    }
}

/// Panel arrangement selected per render request.
///
/// `Standard` is both an explicit choice and the fallback sequence for
/// unrecognized template names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    ProblemSolving,
    FormulaExplanation,
    DiagramFocused,
    StepByStep,
    #[default]
    Standard,
}

impl Template {
    /// Parse a template name, falling back to the standard single-column
    /// sequence for unrecognized values
    pub fn from_name(name: &str) -> Self {
        match name {
            "problem_solving" => Template::ProblemSolving,
            "formula_explanation" => Template::FormulaExplanation,
            "diagram_focused" => Template::DiagramFocused,
            "step_by_step" => Template::StepByStep,
            _ => Template::Standard,
        }
    }
}

/// Configuration options for board layout
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Base font-size table before text-size scaling
    pub font_size: FontSizes,
    /// Inset around the content area
    pub padding: Padding,
    /// Section and line spacing
    pub spacing: Spacing,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            font_size: FontSizes::default(),
            padding: Padding::default(),
            spacing: Spacing::default(),
        }
    }
}

impl BoardConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the padding on all four sides
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the base font-size table
    pub fn with_font_sizes(mut self, font_size: FontSizes) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the section and line spacing
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Apply a text-size class, scaling all four font sizes
    pub fn scaled(mut self, text_size: TextSize) -> Self {
        self.font_size = self.font_size.scaled(text_size.multiplier());
        self
    }

    /// Width of the content area between left and right padding
    pub fn content_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.width, 1920.0);
        assert_eq!(config.height, 1080.0);
        assert_eq!(config.font_size.title, 48.0);
        assert_eq!(config.font_size.main, 32.0);
        assert_eq!(config.font_size.sub, 24.0);
        assert_eq!(config.font_size.small, 18.0);
        assert_eq!(config.padding.left, 60.0);
        assert_eq!(config.spacing.section, 40.0);
        assert_eq!(config.spacing.line, 32.0);
    }

    #[test]
    fn test_content_width() {
        let config = BoardConfig::default();
        assert_eq!(config.content_width(), 1800.0);
    }

    #[test]
    fn test_text_size_multipliers() {
        assert_eq!(TextSize::Small.multiplier(), 0.8);
        assert_eq!(TextSize::Medium.multiplier(), 1.0);
        assert_eq!(TextSize::Large.multiplier(), 1.2);
    }

    #[test]
    fn test_scaled_applies_to_all_four_sizes() {
        let config = BoardConfig::default().scaled(TextSize::Large);
        assert_eq!(config.font_size.title, 48.0 * 1.2);
        assert_eq!(config.font_size.main, 32.0 * 1.2);
        assert_eq!(config.font_size.sub, 24.0 * 1.2);
        assert_eq!(config.font_size.small, 18.0 * 1.2);

        let config = BoardConfig::default().scaled(TextSize::Small);
        assert_eq!(config.font_size.main, 32.0 * 0.8);
    }

    #[test]
    fn test_template_from_name_fallback() {
        assert_eq!(
            Template::from_name("problem_solving"),
            Template::ProblemSolving
        );
        assert_eq!(Template::from_name("step_by_step"), Template::StepByStep);
        assert_eq!(Template::from_name("no_such_layout"), Template::Standard);
        assert_eq!(Template::from_name(""), Template::Standard);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoardConfig::new()
            .with_canvas_size(1200.0, 800.0)
            .with_padding(Padding::uniform(40.0));
        assert_eq!(config.width, 1200.0);
        assert_eq!(config.padding.top, 40.0);
    }
}
