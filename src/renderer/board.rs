//! Top-level board pass and template dispatch
//!
//! Exactly one template sequence runs per render. Each sequence is a fixed,
//! hand-specified composition of the panel drawers; the vertical cursor is
//! the only state threaded between steps.

use chrono::Local;

use crate::content::BoardContent;
use crate::layout::{Template, TextSize};
use crate::{RenderConfig, RenderError};

use super::panels::{
    draw_answer_box, draw_diagram_placeholder, draw_footer, draw_formula_box, draw_problem_box,
    draw_section, draw_steps, draw_teaching_points, draw_title, PanelContext,
};
use super::svg::SvgBuilder;

// Section headings are fixed labels, not content
const HEADING_MAIN: &str = "Key Points";
const HEADING_SUB: &str = "Details & Supplements";
const HEADING_PROBLEMS: &str = "Problems & Key Points";
const HEADING_SOLUTIONS: &str = "Solutions & Explanations";
const HEADING_EXPLANATION: &str = "Explanation";
const HEADING_NOTES: &str = "Notes & Cautions";

/// Per-request rendering options
#[derive(Debug, Clone, Default)]
pub struct BoardOptions {
    /// Panel arrangement to use
    pub template: Template,
    /// Text size class scaling all four font sizes
    pub text_size: TextSize,
    /// Palette name; unknown names fall back to `classic`
    pub color_scheme: String,
}

impl BoardOptions {
    pub fn new() -> Self {
        Self {
            template: Template::Standard,
            text_size: TextSize::Medium,
            color_scheme: "classic".to_string(),
        }
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn with_text_size(mut self, text_size: TextSize) -> Self {
        self.text_size = text_size;
        self
    }

    pub fn with_color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = scheme.into();
        self
    }
}

/// Render a content document to a complete SVG board.
///
/// All-or-nothing: a degenerate drawing region fails before anything is
/// drawn, and no partial document is ever returned.
pub fn render_board(
    content: &BoardContent,
    options: &BoardOptions,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let board = config.board.clone().scaled(options.text_size);

    if !(board.width > 0.0 && board.height > 0.0)
        || !board.width.is_finite()
        || !board.height.is_finite()
    {
        return Err(RenderError::Render(format!(
            "invalid canvas size {}x{}",
            board.width, board.height
        )));
    }
    if board.content_width() <= 0.0
        || board.height - board.padding.top - board.padding.bottom <= 0.0
    {
        return Err(RenderError::Render(
            "padding leaves no drawable content area".to_string(),
        ));
    }

    let palette = config.stylesheet.resolve(&options.color_scheme);
    log::debug!(
        "rendering {:?} board at {}x{}",
        options.template,
        board.width,
        board.height
    );

    let mut svg = SvgBuilder::new(board.width, board.height, config.svg.clone());
    svg.add_text_classes(&board.font_size);
    svg.add_background(&palette);

    let ctx = PanelContext {
        config: &board,
        palette: &palette,
    };

    let mut cursor = board.padding.top;
    cursor = draw_title(&mut svg, &ctx, &content.title, cursor);
    cursor += board.spacing.section;

    match options.template {
        Template::ProblemSolving => render_problem_solving(&mut svg, &ctx, content, cursor),
        Template::FormulaExplanation => render_formula_explanation(&mut svg, &ctx, content, cursor),
        Template::DiagramFocused => render_diagram_focused(&mut svg, &ctx, content, cursor),
        Template::StepByStep => render_step_by_step(&mut svg, &ctx, content, cursor),
        Template::Standard => render_standard(&mut svg, &ctx, content, cursor),
    };

    let date = config
        .generated_on
        .clone()
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    draw_footer(&mut svg, &ctx, &format!("Generated {} · chalkboard", date));

    Ok(svg.build())
}

/// Two-column layout: main content left, secondary content right at the same
/// starting y, callout below the taller column.
fn render_problem_solving(
    svg: &mut SvgBuilder,
    ctx: &PanelContext,
    content: &BoardContent,
    start_y: f64,
) -> f64 {
    let config = ctx.config;
    let left_x = config.padding.left;
    let right_x = config.width / 2.0 + 20.0;
    let column_width = config.width / 2.0 - config.padding.right - 20.0;

    let left_end = draw_section(
        svg,
        ctx,
        HEADING_PROBLEMS,
        &content.main_content,
        left_x,
        start_y,
        Some(column_width),
    );
    let right_end = draw_section(
        svg,
        ctx,
        HEADING_SOLUTIONS,
        &content.sub_content,
        right_x,
        start_y,
        Some(column_width),
    );

    let cursor = left_end.max(right_end) + config.spacing.section;
    draw_teaching_points(svg, ctx, &content.teaching_points, cursor)
}

/// Formula box up top, then the full point lists, then the callout
fn render_formula_explanation(
    svg: &mut SvgBuilder,
    ctx: &PanelContext,
    content: &BoardContent,
    start_y: f64,
) -> f64 {
    let config = ctx.config;
    let formula = content.main_content.first().map(String::as_str).unwrap_or("");

    let mut cursor = draw_formula_box(svg, ctx, formula, start_y);
    cursor += config.spacing.section;

    cursor = draw_section(
        svg,
        ctx,
        HEADING_MAIN,
        &content.main_content,
        config.padding.left,
        cursor,
        None,
    );
    cursor += config.spacing.section;

    cursor = draw_section(
        svg,
        ctx,
        HEADING_SUB,
        &content.sub_content,
        config.padding.left,
        cursor,
        None,
    );
    cursor += config.spacing.section;

    draw_teaching_points(svg, ctx, &content.teaching_points, cursor)
}

/// Diagram placeholder left, explanation right, notes below
fn render_diagram_focused(
    svg: &mut SvgBuilder,
    ctx: &PanelContext,
    content: &BoardContent,
    start_y: f64,
) -> f64 {
    let config = ctx.config;
    let area_width = config.width * 0.6;
    let area_height = config.height * 0.4;

    draw_diagram_placeholder(
        svg,
        ctx,
        config.padding.left,
        start_y,
        area_width,
        area_height,
    );

    let text_x = config.padding.left + area_width + 40.0;
    let text_width = config.width - area_width - config.padding.right - 60.0;
    draw_section(
        svg,
        ctx,
        HEADING_EXPLANATION,
        &content.main_content,
        text_x,
        start_y,
        Some(text_width),
    );

    let cursor = start_y + area_height + config.spacing.section;
    draw_section(
        svg,
        ctx,
        HEADING_NOTES,
        &content.sub_content,
        config.padding.left,
        cursor,
        None,
    )
}

/// Problem box, numbered solution steps, answer box
fn render_step_by_step(
    svg: &mut SvgBuilder,
    ctx: &PanelContext,
    content: &BoardContent,
    start_y: f64,
) -> f64 {
    let config = ctx.config;
    let problem = content.main_content.first().map(String::as_str).unwrap_or("");

    let mut cursor = draw_problem_box(svg, ctx, problem, start_y);
    cursor += config.spacing.section;

    cursor = draw_steps(svg, ctx, &content.sub_content, cursor);
    cursor += config.spacing.section;

    // The last main item doubles as the final answer when one exists beyond
    // the problem statement
    if content.main_content.len() > 1 {
        if let Some(answer) = content.main_content.last() {
            cursor = draw_answer_box(svg, ctx, answer, cursor);
        }
    }

    cursor
}

/// Single-column default: main panel, secondary panel, callout
fn render_standard(
    svg: &mut SvgBuilder,
    ctx: &PanelContext,
    content: &BoardContent,
    start_y: f64,
) -> f64 {
    let config = ctx.config;

    let mut cursor = draw_section(
        svg,
        ctx,
        HEADING_MAIN,
        &content.main_content,
        config.padding.left,
        start_y,
        None,
    );
    cursor += config.spacing.section;

    cursor = draw_section(
        svg,
        ctx,
        HEADING_SUB,
        &content.sub_content,
        config.padding.left,
        cursor,
        None,
    );
    cursor += config.spacing.section;

    draw_teaching_points(svg, ctx, &content.teaching_points, cursor)
}
