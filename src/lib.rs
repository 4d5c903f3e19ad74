//! Chalkboard - stylized teaching-board rendering
//!
//! This library turns a structured lesson-content document into a fixed-size
//! instructional "blackboard" SVG: a title band, one or more content panels,
//! and a highlighted teaching-points callout, arranged by one of a small set
//! of templates.
//!
//! # Example
//!
//! ```rust
//! use chalkboard::{render, BoardContent, BoardOptions};
//!
//! let content = BoardContent::new("Fractions")
//!     .with_main_content(vec!["Numerator over denominator".to_string()]);
//! let svg = render(&content, &BoardOptions::new()).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Fractions"));
//! ```

pub mod content;
pub mod layout;
pub mod renderer;
pub mod stylesheet;

pub use content::BoardContent;
pub use layout::{BoardConfig, FontSizes, Padding, Spacing, Template, TextSize};
pub use renderer::{render_board, svg_data_uri, BoardOptions, SvgConfig};
pub use stylesheet::{Palette, Stylesheet, StylesheetError};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Any failure during the board pass; no partial output accompanies it
    #[error("board rendering failed: {0}")]
    Render(String),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Board layout configuration
    pub board: BoardConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet supplying custom palettes
    pub stylesheet: Stylesheet,
    /// Footer date label; defaults to today's date when `None`
    pub generated_on: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            svg: SvgConfig::default(),
            stylesheet: Stylesheet::default(),
            generated_on: None,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board layout configuration
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }

    /// Set the stylesheet for palette resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Pin the footer date label (useful for reproducible output)
    pub fn with_generated_on(mut self, date: impl Into<String>) -> Self {
        self.generated_on = Some(date.into());
        self
    }
}

/// Render a content document to SVG with default configuration
///
/// This is the main entry point for the library.
///
/// # Example
///
/// ```rust
/// use chalkboard::{render, BoardContent, BoardOptions, Template};
///
/// let content = BoardContent::new("Pythagoras")
///     .with_main_content(vec!["a^2 + b^2 = c^2".to_string()]);
/// let options = BoardOptions::new().with_template(Template::FormulaExplanation);
///
/// let svg = render(&content, &options).unwrap();
/// assert!(svg.contains("a^2 + b^2 = c^2"));
/// ```
pub fn render(content: &BoardContent, options: &BoardOptions) -> Result<String, RenderError> {
    render_with_config(content, options, &RenderConfig::default())
}

/// Render a content document to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use chalkboard::{render_with_config, BoardConfig, BoardContent, BoardOptions, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_board(BoardConfig::new().with_canvas_size(1200.0, 800.0))
///     .with_generated_on("2026-01-01");
///
/// let svg = render_with_config(&BoardContent::new("T"), &BoardOptions::new(), &config).unwrap();
/// assert!(svg.contains(r#"width="1200""#));
/// ```
pub fn render_with_config(
    content: &BoardContent,
    options: &BoardOptions,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    renderer::render_board(content, options, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_content() -> BoardContent {
        BoardContent::new("Sample Lesson")
            .with_main_content(vec!["first point".into(), "second point".into()])
            .with_sub_content(vec!["a supporting detail".into()])
            .with_teaching_points(vec!["check understanding".into()])
    }

    #[test]
    fn test_render_produces_complete_svg() {
        let svg = render(&sample_content(), &BoardOptions::new()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Sample Lesson"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = RenderConfig::default().with_generated_on("2026-01-01");
        let options = BoardOptions::new();
        let a = render_with_config(&sample_content(), &options, &config).unwrap();
        let b = render_with_config(&sample_content(), &options, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_all_templates() {
        for template in [
            Template::ProblemSolving,
            Template::FormulaExplanation,
            Template::DiagramFocused,
            Template::StepByStep,
            Template::Standard,
        ] {
            let options = BoardOptions::new().with_template(template);
            let svg = render(&sample_content(), &options).unwrap();
            assert!(svg.contains("<svg"), "template {:?} failed", template);
        }
    }

    #[test]
    fn test_render_empty_content() {
        let svg = render(&BoardContent::new(""), &BoardOptions::new()).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_custom_stylesheet_palette() {
        let stylesheet = Stylesheet::from_str(
            r##"
[palettes.brand]
background = "#101010"
text = "#fafafa"
accent = "#ff3366"
border = "#2a2a2a"
"##,
        )
        .unwrap();
        let config = RenderConfig::new().with_stylesheet(stylesheet);
        let options = BoardOptions::new().with_color_scheme("brand");
        let svg = render_with_config(&sample_content(), &options, &config).unwrap();
        assert!(svg.contains("#101010"));
        assert!(svg.contains("#ff3366"));
    }
}
