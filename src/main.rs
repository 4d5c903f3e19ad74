//! Chalkboard CLI
//!
//! Usage:
//!   chalkboard [OPTIONS] [FILE]
//!
//! Reads a JSON content document (title, mainContent, subContent,
//! teachingPoints), renders a board, and writes SVG to stdout or a file.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use chalkboard::{
    render_with_config, svg_data_uri, BoardConfig, BoardContent, BoardOptions, RenderConfig,
    Stylesheet, Template, TextSize,
};

#[derive(Parser)]
#[command(name = "chalkboard")]
#[command(about = "Render lesson content into a stylized teaching-board SVG")]
struct Cli {
    /// Input content document, JSON (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Board template: problem_solving, formula_explanation,
    /// diagram_focused, step_by_step (anything else: standard)
    #[arg(short, long, default_value = "standard")]
    template: String,

    /// Text size: small, medium, large
    #[arg(long, default_value = "medium")]
    text_size: String,

    /// Color scheme name (unknown names fall back to classic)
    #[arg(short, long, default_value = "classic")]
    color_scheme: String,

    /// Stylesheet file adding custom palettes (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1920.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1080.0)]
    height: f64,

    /// Emit a base64 data: URI instead of raw SVG
    #[arg(long)]
    data_uri: bool,

    /// Show a sample content document
    #[arg(short, long)]
    example: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.example {
        print_example();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let content: BoardContent = match serde_json::from_str(&source) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error parsing content document: {}", e);
            std::process::exit(1);
        }
    };

    let options = BoardOptions::new()
        .with_template(Template::from_name(&cli.template))
        .with_text_size(TextSize::from_name(&cli.text_size))
        .with_color_scheme(&cli.color_scheme);
    let config = RenderConfig::new()
        .with_board(BoardConfig::new().with_canvas_size(cli.width, cli.height))
        .with_stylesheet(stylesheet);

    let svg = match render_with_config(&content, &options, &config) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let output = if cli.data_uri {
        svg_data_uri(&svg)
    } else {
        svg
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, output) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", output),
    }
}

fn print_intro() {
    println!(
        r#"Chalkboard - render lesson content into a teaching-board SVG

USAGE:
    chalkboard [OPTIONS] [FILE]
    cat content.json | chalkboard

OPTIONS:
    -t, --template       Board template (problem_solving, formula_explanation,
                         diagram_focused, step_by_step, standard)
    --text-size          small, medium, large
    -c, --color-scheme   Palette name (classic, dark, warm, cool, ...)
    -s, --stylesheet     Custom palettes (TOML file)
    -o, --output         Output file (default: stdout)
    --data-uri           Emit a base64 data: URI
    -e, --example        Show a sample content document
    -h, --help           Print help

QUICK START:
    chalkboard --example | chalkboard -t problem_solving > board.svg

Run --example for the expected JSON shape."#
    );
}

fn print_example() {
    println!(
        r#"{{
  "title": "Area of a Triangle",
  "mainContent": [
    "Area = base x height / 2",
    "The height must be perpendicular to the base"
  ],
  "subContent": [
    "Works for any triangle, not just right triangles",
    "Derive it by doubling the triangle into a parallelogram"
  ],
  "teachingPoints": [
    "Have students draw the height before computing",
    "Contrast with the rectangle area formula"
  ]
}}"#
    );
}
