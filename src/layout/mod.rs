//! Board layout: configuration and text measurement
//!
//! Layout decisions (line breaks, panel positions, cursor movement) are
//! deterministic functions of the input content and configuration. The only
//! mutable layout state is the vertical cursor, which is passed into and
//! returned from every drawing primitive rather than stored anywhere.

pub mod config;
pub mod text;

pub use config::{BoardConfig, FontSizes, Padding, Spacing, Template, TextSize};
pub use text::{measure_text, wrap_text};
