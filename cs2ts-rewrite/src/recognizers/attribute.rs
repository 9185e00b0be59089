//! Recognizer for attribute lines such as `[Required]`.

use cs2ts_core::Config;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Match, Recognizer, ScanWindow};

static ATTRIBUTE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\[[^\r\n]*\][ \t]*(?:\r?\n|\z)").unwrap());

/// Deletes attribute annotations that sit on their own line, together with
/// the line break ending them.
pub struct AttributeRecognizer;

impl Recognizer for AttributeRecognizer {
    fn name(&self) -> &'static str {
        "attribute"
    }

    fn recognize(&self, window: &ScanWindow<'_>, _config: &Config) -> Option<Match> {
        let found = window
            .captures_from(&ATTRIBUTE_LINE, window.cursor())?
            .get(0)?;
        Some(window.match_at("", found.start(), found.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(text: &str, cursor: usize) -> Option<Match> {
        AttributeRecognizer.recognize(&ScanWindow::new(text, cursor), &Config::default())
    }

    #[test]
    fn test_attribute_line_is_removed() {
        let text = "[Required]\npublic string Name { get; set; }";
        let found = recognize(text, 0).expect("attribute");

        assert_eq!(found, Match::new("", 0, "[Required]\n".len()));
    }

    #[test]
    fn test_indented_attribute_with_arguments() {
        let text = "class A\n    [Range(1, 10)]  \r\n    public int X;";
        let found = recognize(text, 0).expect("attribute");

        assert_eq!(found.start, "class A\n".len());
        assert_eq!(found.len, "    [Range(1, 10)]  \r\n".len());
    }

    #[test]
    fn test_attribute_at_end_of_text() {
        let found = recognize("[Serializable]", 0).expect("attribute");
        assert_eq!(found.len, "[Serializable]".len());
    }

    #[test]
    fn test_inline_brackets_are_not_attributes() {
        assert_eq!(recognize("public int[] Values;\n", 0), None);
        assert_eq!(recognize("var x = items[0];\n", 0), None);
        assert_eq!(recognize("[Key] public int Id;\n", 0), None);
    }

    #[test]
    fn test_cursor_mid_line_is_not_a_line_start() {
        let text = "x [Key]\n";
        assert_eq!(recognize(text, 1), None);
    }
}
