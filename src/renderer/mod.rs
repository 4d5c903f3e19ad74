//! SVG renderer for board output
//!
//! This module turns a content document plus resolved configuration into a
//! complete SVG string, via cursor-threaded panel drawers and an incremental
//! builder.

pub mod board;
pub mod config;
pub mod panels;
pub mod svg;

pub use board::{render_board, BoardOptions};
pub use config::SvgConfig;
pub use svg::{svg_data_uri, SvgBuilder, TextAnchor, TextClass};
