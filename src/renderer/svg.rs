//! SVG generation for boards
//!
//! `SvgBuilder` accumulates elements for a fixed-size canvas and serializes
//! them once at the end of a render pass. Each render call owns its builder
//! exclusively; nothing is shared between passes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::layout::FontSizes;
use crate::stylesheet::Palette;

use super::SvgConfig;

/// Horizontal anchoring of a text element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// The four font classes emitted in the board's style block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextClass {
    Title,
    Main,
    Sub,
    Small,
}

impl TextClass {
    fn suffix(&self) -> &'static str {
        match self {
            TextClass::Title => "title",
            TextClass::Main => "main",
            TextClass::Sub => "sub",
            TextClass::Small => "small",
        }
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    width: f64,
    height: f64,
    styles: Vec<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a builder for a canvas of the given size
    pub fn new(width: f64, height: f64, config: SvgConfig) -> Self {
        Self {
            config,
            width,
            height,
            styles: vec![],
            elements: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Emit the font classes for the four text sizes.
    ///
    /// Classes carry font properties only; fill is always set per element so
    /// that panel-specific colors cannot be shadowed by the style block.
    pub fn add_text_classes(&mut self, fonts: &FontSizes) {
        let prefix = self.prefix();
        let family = "'Noto Sans JP', 'Hiragino Sans', 'Yu Gothic', sans-serif";
        let classes = [
            ("title", fonts.title, "bold"),
            ("main", fonts.main, "normal"),
            ("sub", fonts.sub, "bold"),
            ("small", fonts.small, "normal"),
        ];
        let mut css = String::new();
        for (suffix, size, weight) in classes {
            css.push_str(&format!(
                ".{prefix}{suffix} {{ font-family: {family}; font-weight: {weight}; font-size: {size}px; }}\n"
            ));
        }
        self.styles.push(css);
    }

    /// Fill the whole canvas with the palette background
    pub fn add_background(&mut self, palette: &Palette) {
        self.elements.push(format!(
            r#"{}<rect width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            self.width,
            self.height,
            palette.background
        ));
    }

    /// Add a rectangle with fill and stroke
    pub fn add_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) {
        self.elements.push(format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            self.indent_str(),
            x,
            y,
            w,
            h,
            fill,
            stroke,
            stroke_width
        ));
    }

    /// Add a filled circle
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"{}<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.indent_str(),
            cx,
            cy,
            r,
            fill
        ));
    }

    /// Add a stroked line
    pub fn add_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        stroke_width: f64,
    ) {
        self.elements.push(format!(
            r#"{}<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            self.indent_str(),
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width
        ));
    }

    /// Add a text element in one of the four font classes.
    ///
    /// `extra` is appended verbatim as attributes (leading space included by
    /// the caller), e.g. ` font-weight="bold"`.
    pub fn add_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        class: TextClass,
        fill: &str,
        anchor: TextAnchor,
        extra: &str,
    ) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}{}" x="{}" y="{}" fill="{}" text-anchor="{}"{}>{}</text>"#,
            self.indent_str(),
            prefix,
            class.suffix(),
            x,
            y,
            fill,
            anchor.as_str(),
            extra,
            escape_xml(text)
        ));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str(style);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Encode an SVG document as a `data:` URI suitable for an `<img>` source
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_build_empty_canvas() {
        let builder = SvgBuilder::new(1920.0, 1080.0, SvgConfig::default());
        let svg = builder.build();
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"width="1920" height="1080""#));
        assert!(svg.contains(r#"viewBox="0 0 1920 1080""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_text_classes_in_style_block() {
        let mut builder = SvgBuilder::new(100.0, 100.0, SvgConfig::default());
        builder.add_text_classes(&FontSizes::default());
        let svg = builder.build();
        assert!(svg.contains(".bb-title"));
        assert!(svg.contains("font-size: 48px"));
        assert!(svg.contains(".bb-small"));
        assert!(svg.contains("font-size: 18px"));
    }

    #[test]
    fn test_add_text_escapes_content() {
        let mut builder = SvgBuilder::new(100.0, 100.0, SvgConfig::default());
        builder.add_text(
            "a < b",
            10.0,
            20.0,
            TextClass::Main,
            "#111111",
            TextAnchor::Start,
            "",
        );
        let svg = builder.build();
        assert!(svg.contains("a &lt; b"));
        assert!(svg.contains(r#"class="bb-main""#));
        assert!(svg.contains(r#"text-anchor="start""#));
    }

    #[test]
    fn test_class_prefix_is_configurable() {
        let mut builder =
            SvgBuilder::new(100.0, 100.0, SvgConfig::default().without_class_prefix());
        builder.add_text(
            "x",
            0.0,
            0.0,
            TextClass::Sub,
            "#000",
            TextAnchor::Middle,
            "",
        );
        let svg = builder.build();
        assert!(svg.contains(r#"class="sub""#));
    }

    #[test]
    fn test_background_uses_palette() {
        let mut builder = SvgBuilder::new(100.0, 100.0, SvgConfig::default());
        builder.add_background(&Palette::classic());
        let svg = builder.build();
        assert!(svg.contains(r##"fill="#f8fafc""##));
    }

    #[test]
    fn test_data_uri_round_trips() {
        let uri = svg_data_uri("<svg/>");
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        let encoded = uri.trim_start_matches("data:image/svg+xml;base64,");
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"<svg/>");
    }
}
