//! Convert operation - rewrite a C# source text.

use cs2ts_core::Config;
use cs2ts_rewrite::RewriteEngine;

use crate::reports::ConvertReport;

/// Execute the convert operation.
///
/// Runs the built-in recognizers over `source` and keeps per-recognizer
/// counts for the summary.
pub fn convert(source: &str, input_name: String, config: &Config) -> ConvertReport {
    let rewrite = RewriteEngine::new().run(source, config);

    ConvertReport {
        input_name,
        counts: rewrite.counts(),
        rewritten_bytes: rewrite.steps.iter().map(|s| s.end - s.start).sum(),
        source_bytes: source.len(),
        output: rewrite.output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_collects_counts() {
        let source = "[Key]\npublic int Id { get; set; }\npublic string Name { get; set; }";
        let report = convert(source, "Model.cs".to_string(), &Config::default());

        assert_eq!(report.output, "Id: number;\nName: string;");
        assert_eq!(report.counts.get("attribute"), Some(&1));
        assert_eq!(report.counts.get("auto-property"), Some(&2));
        assert_eq!(report.total(), 3);
        assert_eq!(report.source_bytes, source.len());
        assert_eq!(report.rewritten_bytes, source.len() - 1);
    }

    #[test]
    fn test_convert_untouched_text() {
        let report = convert("int x = 1;", "<stdin>".to_string(), &Config::default());
        assert_eq!(report.output, "int x = 1;");
        assert_eq!(report.total(), 0);
        assert_eq!(report.rewritten_bytes, 0);
    }
}
