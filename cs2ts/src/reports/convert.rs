//! Convert command report data structures.

use std::collections::BTreeMap;

use super::output::{Output, Report};

/// Summary of a single conversion.
#[derive(Debug)]
pub struct ConvertReport {
    /// File name, or `<stdin>`.
    pub input_name: String,
    /// Converted text.
    pub output: String,
    /// Applied matches per recognizer name.
    pub counts: BTreeMap<&'static str, usize>,
    /// Source bytes covered by applied matches.
    pub rewritten_bytes: usize,
    /// Length of the input.
    pub source_bytes: usize,
}

impl ConvertReport {
    /// Total number of applied matches.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        if self.counts.is_empty() {
            out.warning(&format!("nothing to convert in {}", self.input_name));
            return;
        }

        out.section(&self.input_name);
        for (recognizer, count) in &self.counts {
            out.key_value_indented(recognizer, &count.to_string());
        }
        out.key_value_indented(
            "rewritten",
            &format!("{} of {} bytes", self.rewritten_bytes, self.source_bytes),
        );
    }
}
