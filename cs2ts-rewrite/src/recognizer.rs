//! Recognizer trait and match records.

use cs2ts_core::Config;
use regex::{Captures, Regex};

/// A recognized span and its replacement.
///
/// `start` is relative to the [`ScanWindow`] the match was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Replacement text
    pub replacement: String,
    /// Byte offset of the span, relative to the window start
    pub start: usize,
    /// Byte length of the consumed span
    pub len: usize,
}

impl Match {
    pub fn new(replacement: impl Into<String>, start: usize, len: usize) -> Self {
        Self {
            replacement: replacement.into(),
            start,
            len,
        }
    }

    /// Offset one past the consumed span, relative to the window start.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// The unscanned suffix of the source text.
///
/// Recognizers see the whole source so that line anchors can look behind
/// the cursor, but only report matches starting at or after it.
#[derive(Debug, Clone, Copy)]
pub struct ScanWindow<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> ScanWindow<'a> {
    pub fn new(source: &'a str, cursor: usize) -> Self {
        Self { source, cursor }
    }

    /// Absolute offset where the window starts.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The text from the cursor to the end.
    pub fn text(&self) -> &'a str {
        &self.source[self.cursor..]
    }

    /// Captures of the leftmost match starting at or after absolute offset `from`.
    pub fn captures_from(&self, regex: &Regex, from: usize) -> Option<Captures<'a>> {
        regex.captures_at(self.source, from.max(self.cursor))
    }

    /// Whether absolute offset `pos` follows a `//` on the same line.
    pub fn in_line_comment(&self, pos: usize) -> bool {
        let line_start = self.source[..pos].rfind('\n').map_or(0, |i| i + 1);
        self.source[line_start..pos].contains("//")
    }

    /// Absolute offset of the character after the one at `pos`.
    pub fn next_char(&self, pos: usize) -> usize {
        pos + self.source[pos..].chars().next().map_or(1, char::len_utf8)
    }

    /// Build a match from an absolute span.
    pub fn match_at(&self, replacement: impl Into<String>, start: usize, end: usize) -> Match {
        Match::new(replacement, start - self.cursor, end - start)
    }
}

/// A stateless matcher for one kind of source construct.
pub trait Recognizer: Send + Sync {
    /// The name of this recognizer.
    fn name(&self) -> &'static str;

    /// Find the earliest match in `window`, with its replacement.
    ///
    /// Matches must consume at least one byte.
    fn recognize(&self, window: &ScanWindow<'_>, config: &Config) -> Option<Match>;
}
