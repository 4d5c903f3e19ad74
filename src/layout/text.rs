//! Deterministic text measurement and line wrapping
//!
//! The renderer never touches real font metrics: widths are estimated from
//! character counts so that layout decisions are identical on every run and
//! on every platform. ASCII glyphs advance by 0.6em, everything else is
//! treated as a full-width glyph (1.0em), which matches how CJK teaching
//! material actually sets.

/// Estimated pixel width of `text` at `font_size`
pub fn measure_text(text: &str, font_size: f64) -> f64 {
    text.chars()
        .map(|c| if c.is_ascii() { 0.6 } else { 1.0 })
        .sum::<f64>()
        * font_size
}

/// Greedy word wrap: break `text` into lines whose measured width stays
/// within `max_width`.
///
/// Words are whitespace-delimited. A word that is wider than `max_width` on
/// its own is placed on its own line unmodified; there is no mid-word
/// breaking.
pub fn wrap_text(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if measure_text(&candidate, font_size) > max_width && !current.is_empty() {
            lines.push(current);
            current = word.to_string();
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_ascii() {
        assert_eq!(measure_text("abcde", 10.0), 5.0 * 0.6 * 10.0);
    }

    #[test]
    fn test_measure_fullwidth() {
        // Non-ASCII glyphs advance a full em
        assert_eq!(measure_text("三角形", 10.0), 30.0);
    }

    #[test]
    fn test_measure_empty() {
        assert_eq!(measure_text("", 32.0), 0.0);
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap_text("short text", 1000.0, 32.0);
        assert_eq!(lines, vec!["short text"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        let lines = wrap_text("", 100.0, 32.0);
        assert!(lines.is_empty());

        let lines = wrap_text("   ", 100.0, 32.0);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_wrap_breaks_at_word_boundaries() {
        // Each word is 5 chars = 5 * 0.6 * 10 = 30px; "aaaaa bbbbb" = 66px
        let lines = wrap_text("aaaaa bbbbb ccccc", 70.0, 10.0);
        assert_eq!(lines, vec!["aaaaa bbbbb", "ccccc"]);
    }

    #[test]
    fn test_no_line_exceeds_max_width() {
        let text = "the quick brown fox jumps over the lazy dog and keeps on running";
        let max_width = 120.0;
        let font_size = 10.0;
        for line in wrap_text(text, max_width, font_size) {
            assert!(
                measure_text(&line, font_size) <= max_width,
                "line '{}' exceeds max width",
                line
            );
        }
    }

    #[test]
    fn test_oversized_word_gets_own_line() {
        // 30-char word at 10px = 180px, far wider than 50px
        let long_word = "a".repeat(30);
        let text = format!("tiny {} tail", long_word);
        let lines = wrap_text(&text, 50.0, 10.0);
        assert_eq!(lines, vec!["tiny".to_string(), long_word, "tail".to_string()]);
    }

    #[test]
    fn test_wrap_is_deterministic() {
        let text = "identical inputs must produce identical line breaks every time";
        let a = wrap_text(text, 150.0, 12.0);
        let b = wrap_text(text, 150.0, 12.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrap_non_latin_text() {
        // Non-Latin content wraps like any other string; nothing is
        // substituted or dropped
        let lines = wrap_text("三角形 の 面積", 40.0, 10.0);
        assert!(!lines.is_empty());
        assert_eq!(lines.join(" "), "三角形 の 面積");
    }
}
