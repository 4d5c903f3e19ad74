//! Cursor-threaded drawing primitives
//!
//! Every drawer takes the current vertical cursor and returns the cursor for
//! the next primitive. None of them hold state between calls and none of
//! them can fail; the top-level pass in `board` owns the single failure
//! boundary.

use crate::layout::{measure_text, wrap_text, BoardConfig};
use crate::stylesheet::Palette;

use super::svg::{SvgBuilder, TextAnchor, TextClass};

// Fixed emphasis colors, independent of the selected palette
const CALLOUT_FILL: &str = "#fef3c7";
const CALLOUT_BORDER: &str = "#f59e0b";
const CALLOUT_TEXT: &str = "#92400e";
const FORMULA_FILL: &str = "#f3f4f6";
const PROBLEM_FILL: &str = "#eff6ff";
const ANSWER_FILL: &str = "#dcfce7";
const ANSWER_BORDER: &str = "#059669";
const PLACEHOLDER_FILL: &str = "#f9fafb";
const MUTED_TEXT: &str = "#9ca3af";

/// Answer box width is fixed regardless of canvas size
const ANSWER_BOX_WIDTH: f64 = 400.0;

/// Resolved configuration and palette shared by the drawers in one pass
pub struct PanelContext<'a> {
    /// Board configuration with font sizes already scaled
    pub config: &'a BoardConfig,
    pub palette: &'a Palette,
}

/// Draw the centered title with an accent underline sized to the measured
/// title width. Returns the cursor below the title band.
pub fn draw_title(svg: &mut SvgBuilder, ctx: &PanelContext, title: &str, y: f64) -> f64 {
    let fonts = &ctx.config.font_size;
    let x = ctx.config.width / 2.0;

    svg.add_text(
        title,
        x,
        y + fonts.title,
        TextClass::Title,
        &ctx.palette.accent,
        TextAnchor::Middle,
        "",
    );

    let underline_y = y + fonts.title + 10.0;
    let half = measure_text(title, fonts.title) / 2.0;
    svg.add_line(
        x - half,
        underline_y,
        x + half,
        underline_y,
        &ctx.palette.accent,
        4.0,
    );

    y + fonts.title + 30.0
}

/// Draw a titled panel: a heading plus a numbered list of word-wrapped items.
///
/// `max_width` defaults to the full content width. Each wrapped line advances
/// the cursor by one line spacing, each item by one additional line spacing
/// after its last line.
pub fn draw_section(
    svg: &mut SvgBuilder,
    ctx: &PanelContext,
    heading: &str,
    items: &[String],
    x: f64,
    y: f64,
    max_width: Option<f64>,
) -> f64 {
    let fonts = &ctx.config.font_size;
    let spacing = &ctx.config.spacing;
    let width = max_width.unwrap_or_else(|| ctx.config.content_width());

    svg.add_text(
        heading,
        x,
        y + fonts.sub,
        TextClass::Sub,
        &ctx.palette.accent,
        TextAnchor::Start,
        "",
    );
    let mut cursor = y + fonts.sub + 20.0;

    for (index, item) in items.iter().enumerate() {
        let prefix = format!("{}. ", index + 1);
        let prefix_width = measure_text(&prefix, fonts.main);
        svg.add_text(
            &prefix,
            x,
            cursor + fonts.main,
            TextClass::Main,
            &ctx.palette.text,
            TextAnchor::Start,
            "",
        );

        let lines = wrap_text(item, width - prefix_width, fonts.main);
        for (line_index, line) in lines.iter().enumerate() {
            svg.add_text(
                line,
                x + prefix_width,
                cursor + fonts.main + line_index as f64 * spacing.line,
                TextClass::Main,
                &ctx.palette.text,
                TextAnchor::Start,
                "",
            );
        }

        // An empty item still occupies one line slot for its number
        cursor += lines.len().max(1) as f64 * spacing.line + spacing.line;
    }

    cursor
}

/// Draw the highlighted teaching-points callout.
///
/// The box is sized before any text is drawn: one bulleted line per item plus
/// the heading margin. An empty list draws nothing and returns `y` unchanged.
pub fn draw_teaching_points(
    svg: &mut SvgBuilder,
    ctx: &PanelContext,
    points: &[String],
    y: f64,
) -> f64 {
    if points.is_empty() {
        return y;
    }

    let fonts = &ctx.config.font_size;
    let spacing = &ctx.config.spacing;
    let box_height = points.len() as f64 * (fonts.small + spacing.line) + 40.0;
    let box_width = ctx.config.content_width();

    svg.add_rect(
        ctx.config.padding.left,
        y,
        box_width,
        box_height,
        CALLOUT_FILL,
        CALLOUT_BORDER,
        2.0,
    );

    let mut cursor = y + 20.0;
    svg.add_text(
        "Teaching Points",
        ctx.config.padding.left + 20.0,
        cursor + fonts.sub,
        TextClass::Sub,
        CALLOUT_BORDER,
        TextAnchor::Start,
        "",
    );
    cursor += fonts.sub + 15.0;

    for point in points {
        svg.add_text(
            &format!("• {}", point),
            ctx.config.padding.left + 40.0,
            cursor + fonts.small,
            TextClass::Small,
            CALLOUT_TEXT,
            TextAnchor::Start,
            "",
        );
        cursor += fonts.small + spacing.line;
    }

    cursor + 20.0
}

/// Draw the emphasized formula box: fixed 80px height, full content width,
/// content centered and unwrapped (long formulas overflow by design).
pub fn draw_formula_box(svg: &mut SvgBuilder, ctx: &PanelContext, formula: &str, y: f64) -> f64 {
    let box_height = 80.0;
    let box_width = ctx.config.content_width();
    let x = ctx.config.padding.left;
    let title_size = ctx.config.font_size.title;

    svg.add_rect(
        x,
        y,
        box_width,
        box_height,
        FORMULA_FILL,
        &ctx.palette.accent,
        3.0,
    );
    svg.add_text(
        formula,
        ctx.config.width / 2.0,
        y + box_height / 2.0 + title_size * 0.3,
        TextClass::Title,
        &ctx.palette.accent,
        TextAnchor::Middle,
        &format!(r#" style="font-size: {}px""#, title_size * 0.8),
    );

    y + box_height
}

/// Draw the problem statement box: fixed 100px height, full content width,
/// content word-wrapped to the inner width.
pub fn draw_problem_box(svg: &mut SvgBuilder, ctx: &PanelContext, problem: &str, y: f64) -> f64 {
    let box_height = 100.0;
    let box_width = ctx.config.content_width();
    let x = ctx.config.padding.left;
    let fonts = &ctx.config.font_size;

    svg.add_rect(
        x,
        y,
        box_width,
        box_height,
        PROBLEM_FILL,
        &ctx.palette.accent,
        3.0,
    );

    let lines = wrap_text(problem, box_width - 40.0, fonts.main);
    for (index, line) in lines.iter().enumerate() {
        svg.add_text(
            line,
            x + 20.0,
            y + 30.0 + index as f64 * ctx.config.spacing.line,
            TextClass::Main,
            &ctx.palette.text,
            TextAnchor::Start,
            "",
        );
    }

    y + box_height
}

/// Draw the answer box: fixed 60px height, 400px wide, right-aligned against
/// the right padding. Content is drawn unwrapped.
pub fn draw_answer_box(svg: &mut SvgBuilder, ctx: &PanelContext, answer: &str, y: f64) -> f64 {
    let box_height = 60.0;
    let x = ctx.config.width - ctx.config.padding.right - ANSWER_BOX_WIDTH;

    svg.add_rect(
        x,
        y,
        ANSWER_BOX_WIDTH,
        box_height,
        ANSWER_FILL,
        ANSWER_BORDER,
        3.0,
    );
    svg.add_text(
        &format!("Answer: {}", answer),
        x + ANSWER_BOX_WIDTH / 2.0,
        y + box_height / 2.0 + 8.0,
        TextClass::Main,
        ANSWER_BORDER,
        TextAnchor::Middle,
        r#" style="font-weight: bold""#,
    );

    y + box_height
}

/// Draw a numbered step sequence: an accent circle with the 1-based index,
/// wrapped step text to its right. Each step advances by at least 50px.
pub fn draw_steps(svg: &mut SvgBuilder, ctx: &PanelContext, steps: &[String], y: f64) -> f64 {
    let fonts = &ctx.config.font_size;
    let spacing = &ctx.config.spacing;
    let circle_radius = 20.0;
    let circle_x = ctx.config.padding.left + circle_radius;
    let mut cursor = y;

    for (index, step) in steps.iter().enumerate() {
        let circle_y = cursor + circle_radius;
        svg.add_circle(circle_x, circle_y, circle_radius, &ctx.palette.accent);
        svg.add_text(
            &(index + 1).to_string(),
            circle_x,
            circle_y + 6.0,
            TextClass::Small,
            "#ffffff",
            TextAnchor::Middle,
            r#" style="font-weight: bold""#,
        );

        let text_x = circle_x + circle_radius + 20.0;
        let lines = wrap_text(
            step,
            ctx.config.width - text_x - ctx.config.padding.right,
            fonts.main,
        );
        for (line_index, line) in lines.iter().enumerate() {
            svg.add_text(
                line,
                text_x,
                cursor + 30.0 + line_index as f64 * spacing.line,
                TextClass::Main,
                &ctx.palette.text,
                TextAnchor::Start,
                "",
            );
        }

        cursor += (lines.len() as f64 * spacing.line + 20.0).max(50.0);
    }

    cursor
}

/// Draw the diagram placeholder region with a centered caption
pub fn draw_diagram_placeholder(
    svg: &mut SvgBuilder,
    ctx: &PanelContext,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) {
    svg.add_rect(x, y, width, height, PLACEHOLDER_FILL, &ctx.palette.border, 2.0);
    svg.add_text(
        "Diagram area",
        x + width / 2.0,
        y + height / 2.0,
        TextClass::Main,
        MUTED_TEXT,
        TextAnchor::Middle,
        "",
    );
}

/// Draw the right-aligned footer line inside the bottom padding
pub fn draw_footer(svg: &mut SvgBuilder, ctx: &PanelContext, label: &str) {
    let footer_y = ctx.config.height - ctx.config.padding.bottom + 30.0;
    svg.add_text(
        label,
        ctx.config.width - ctx.config.padding.right,
        footer_y,
        TextClass::Small,
        MUTED_TEXT,
        TextAnchor::End,
        "",
    );
}
