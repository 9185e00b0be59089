//! Rewrite engine.

use std::collections::BTreeMap;

use cs2ts_core::Config;
use tracing::{debug, debug_span, warn};

use crate::{
    Match, Recognizer, ScanWindow,
    recognizers::{
        AttributeRecognizer, AutoPropertyRecognizer, DocSummaryRecognizer,
        PublicMemberRecognizer,
    },
};

/// One applied rewrite, as an absolute byte span of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Name of the recognizer that produced the match
    pub recognizer: &'static str,
    /// Start of the replaced span
    pub start: usize,
    /// End of the replaced span (exclusive)
    pub end: usize,
}

/// Result of a rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    /// The rewritten text
    pub output: String,
    /// Applied rewrites, in source order
    pub steps: Vec<Step>,
}

impl RewriteReport {
    /// Number of applied rewrites per recognizer.
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for step in &self.steps {
            *counts.entry(step.recognizer).or_insert(0) += 1;
        }
        counts
    }
}

/// The rewrite loop.
///
/// Recognizers run in list order; when two report the same start offset
/// the one added first wins.
///
/// # Example
///
/// ```ignore
/// let engine = RewriteEngine::new();
/// let report = engine.run(source, &config);
/// println!("{}", report.output);
/// ```
pub struct RewriteEngine {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl RewriteEngine {
    /// Create an engine with the built-in recognizers: auto-property, doc
    /// summary, attribute, public member.
    pub fn new() -> Self {
        Self::empty()
            .recognizer(AutoPropertyRecognizer)
            .recognizer(DocSummaryRecognizer)
            .recognizer(AttributeRecognizer)
            .recognizer(PublicMemberRecognizer)
    }

    /// Create an engine with no recognizers.
    pub fn empty() -> Self {
        Self {
            recognizers: Vec::new(),
        }
    }

    /// Append a recognizer; it loses ties to those already present.
    pub fn recognizer(mut self, recognizer: impl Recognizer + 'static) -> Self {
        self.recognizers.push(Box::new(recognizer));
        self
    }

    /// Names of the installed recognizers, in priority order.
    pub fn recognizer_names(&self) -> Vec<&'static str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    /// Rewrite `source`, returning only the output text.
    pub fn rewrite(&self, source: &str, config: &Config) -> String {
        self.run(source, config).output
    }

    /// Rewrite `source`, recording every applied match.
    pub fn run(&self, source: &str, config: &Config) -> RewriteReport {
        let _span = debug_span!("rewrite", bytes = source.len()).entered();

        let mut output = String::with_capacity(source.len());
        let mut steps = Vec::new();
        let mut cursor = 0;

        while let Some((recognizer, found)) = self.next_match(source, cursor, config) {
            let start = cursor + found.start;
            let end = cursor + found.end();
            debug_assert!(end <= source.len(), "{} matched past the end", recognizer);

            output.push_str(&source[cursor..start]);
            output.push_str(&found.replacement);
            debug!(recognizer, start, end, "applied match");

            steps.push(Step {
                recognizer,
                start,
                end,
            });
            cursor = end;
        }
        output.push_str(&source[cursor..]);

        debug!(rewrites = steps.len(), "rewrite finished");
        RewriteReport { output, steps }
    }

    /// The earliest match at or after `cursor`, with its recognizer's name.
    fn next_match(
        &self,
        source: &str,
        cursor: usize,
        config: &Config,
    ) -> Option<(&'static str, Match)> {
        let window = ScanWindow::new(source, cursor);
        let mut best: Option<(&'static str, Match)> = None;

        for recognizer in &self.recognizers {
            let Some(found) = recognizer.recognize(&window, config) else {
                continue;
            };
            if found.len == 0 {
                warn!(
                    recognizer = recognizer.name(),
                    at = cursor + found.start,
                    "discarding empty match"
                );
                continue;
            }
            if best.as_ref().is_none_or(|(_, b)| found.start < b.start) {
                best = Some((recognizer.name(), found));
            }
        }

        best
    }
}

impl Default for RewriteEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert C# source text to TypeScript with the built-in recognizers.
///
/// Text no recognizer claims is copied through unchanged, so input nothing
/// matches comes back as is.
pub fn cs2ts(source: &str, config: &Config) -> String {
    RewriteEngine::new().rewrite(source, config)
}
