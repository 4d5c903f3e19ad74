//! Input document for board rendering
//!
//! A `BoardContent` is the structured result of the upstream material
//! analysis step. It is constructed (or deserialized) once per render and
//! never mutated by the renderer.

use serde::{Deserialize, Serialize};

/// Structured lesson content to lay out on a board.
///
/// Wire format uses the upstream analysis field names (`mainContent`,
/// `subContent`, `teachingPoints`). All four fields must be present; empty
/// lists are valid, missing fields are a deserialization error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BoardContent {
    /// Board title, drawn centered in the title band
    pub title: String,
    /// Primary points, rendered as a numbered list
    pub main_content: Vec<String>,
    /// Secondary points, rendered as a numbered list in a second panel
    pub sub_content: Vec<String>,
    /// Callout items, rendered as a bulleted list in the highlighted panel
    pub teaching_points: Vec<String>,
}

impl BoardContent {
    /// Create content with a title and no points
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            main_content: vec![],
            sub_content: vec![],
            teaching_points: vec![],
        }
    }

    /// Set the main points
    pub fn with_main_content(mut self, items: Vec<String>) -> Self {
        self.main_content = items;
        self
    }

    /// Set the secondary points
    pub fn with_sub_content(mut self, items: Vec<String>) -> Self {
        self.sub_content = items;
        self
    }

    /// Set the teaching points
    pub fn with_teaching_points(mut self, items: Vec<String>) -> Self {
        self.teaching_points = items;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "title": "Quadratic Equations",
            "mainContent": ["Standard form", "Factoring"],
            "subContent": ["Check the discriminant"],
            "teachingPoints": ["Work through an example first"]
        }"#;
        let content: BoardContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.title, "Quadratic Equations");
        assert_eq!(content.main_content.len(), 2);
        assert_eq!(content.sub_content.len(), 1);
        assert_eq!(content.teaching_points.len(), 1);
    }

    #[test]
    fn test_empty_lists_are_valid() {
        let json = r#"{
            "title": "T",
            "mainContent": [],
            "subContent": [],
            "teachingPoints": []
        }"#;
        let content: BoardContent = serde_json::from_str(json).unwrap();
        assert!(content.main_content.is_empty());
        assert!(content.teaching_points.is_empty());
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"{ "title": "T", "mainContent": [], "subContent": [] }"#;
        let result: Result<BoardContent, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let content = BoardContent::new("T")
            .with_main_content(vec!["a".into(), "b".into()])
            .with_teaching_points(vec!["x".into()]);
        assert_eq!(content.main_content, vec!["a", "b"]);
        assert!(content.sub_content.is_empty());
        assert_eq!(content.teaching_points, vec!["x"]);
    }
}
