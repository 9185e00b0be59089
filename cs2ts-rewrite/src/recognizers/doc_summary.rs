//! Recognizer for `/// <summary>` doc comment blocks.

use cs2ts_core::Config;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Match, Recognizer, ScanWindow};

/// `/// <summary>` line, interior `///` lines (lazily, so the first closing
/// tag wins), then the `/// </summary>` tag.
static SUMMARY_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"///[ \t]*<summary>[ \t]*\r?\n",
        r"(?P<body>(?:[ \t]*///[^\r\n]*\r?\n)*?)",
        r"[ \t]*///[ \t]*</summary>",
    ))
    .unwrap()
});

static SUMMARY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?P<indent>[ \t]*)///[ \t]?(?P<text>[^\r\n]+)").unwrap());

/// Rewrites a summary block into a `/* ... */` block comment.
///
/// The first content line follows `/*` directly; later lines keep their
/// indentation and start with `*`. Blank comment lines are dropped.
pub struct DocSummaryRecognizer;

impl Recognizer for DocSummaryRecognizer {
    fn name(&self) -> &'static str {
        "doc-summary"
    }

    fn recognize(&self, window: &ScanWindow<'_>, _config: &Config) -> Option<Match> {
        let caps = window.captures_from(&SUMMARY_BLOCK, window.cursor())?;
        let whole = caps.get(0)?;
        let newline = if whole.as_str().contains("\r\n") {
            "\r\n"
        } else {
            "\n"
        };

        let mut comment = String::from("/*");
        let lines = SUMMARY_LINE
            .captures_iter(&caps["body"])
            .filter(|line| !line["text"].trim().is_empty());
        for (i, line) in lines.enumerate() {
            if i > 0 {
                comment.push_str(newline);
                comment.push_str(&line["indent"]);
                comment.push('*');
            }
            comment.push_str(&line["text"]);
        }
        comment.push_str(" */");

        Some(window.match_at(comment, whole.start(), whole.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(text: &str) -> Option<Match> {
        DocSummaryRecognizer.recognize(&ScanWindow::new(text, 0), &Config::default())
    }

    #[test]
    fn test_single_line_summary() {
        let text = "/// <summary>\r\n/// Hello\r\n/// </summary>";
        let found = recognize(text).expect("summary");

        assert_eq!(found.replacement, "/*Hello */");
        assert_eq!(found.start, 0);
        assert_eq!(found.len, text.len());
    }

    #[test]
    fn test_multi_line_summary_keeps_indentation() {
        let text = "    /// <summary>\n    /// First line.\n    /// Second line.\n    /// </summary>\n";
        let found = recognize(text).expect("summary");

        assert_eq!(found.replacement, "/*First line.\n    *Second line. */");
        assert_eq!(found.start, 4);
        assert_eq!(&text[found.start + found.len..], "\n");
    }

    #[test]
    fn test_crlf_is_preserved_between_lines() {
        let text = "/// <summary>\r\n/// One\r\n/// Two\r\n/// </summary>";
        let found = recognize(text).expect("summary");

        assert_eq!(found.replacement, "/*One\r\n*Two */");
    }

    #[test]
    fn test_blank_comment_lines_are_dropped() {
        let text = "/// <summary>\n/// One\n///\n/// Two\n/// </summary>";
        assert_eq!(recognize(text).unwrap().replacement, "/*One\n*Two */");
    }

    #[test]
    fn test_empty_summary() {
        let text = "/// <summary>\n/// </summary>";
        assert_eq!(recognize(text).unwrap().replacement, "/* */");
    }

    #[test]
    fn test_first_closing_tag_ends_block() {
        let text = "/// <summary>\n/// A\n/// </summary>\n/// <remarks>\n/// </summary>";
        let found = recognize(text).expect("summary");

        assert_eq!(found.replacement, "/*A */");
        assert_eq!(found.len, "/// <summary>\n/// A\n/// </summary>".len());
    }

    #[test]
    fn test_extra_spacing_is_kept_in_text() {
        let text = "/// <summary>\n///   indented\n/// </summary>";
        assert_eq!(recognize(text).unwrap().replacement, "/*  indented */");
    }

    #[test]
    fn test_no_summary() {
        assert_eq!(recognize("/// <remarks>\n/// x\n/// </remarks>"), None);
        assert_eq!(recognize("// <summary>\n// x\n// </summary>"), None);
    }
}
