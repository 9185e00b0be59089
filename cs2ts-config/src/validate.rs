//! Validation of parsed settings.

use std::collections::HashSet;

use cs2ts_core::Config;
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Reject postfix lists that cannot mean what the user wrote.
///
/// An empty postfix strips nothing, and a repeated one is always shadowed
/// by its first occurrence.
pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let mut seen = HashSet::new();

    for postfix in &config.trim_postfixes {
        if postfix.is_empty() {
            return Err(ctx.validation_error(
                "trim postfixes cannot be empty strings",
                find_string_span(ctx.src(), "", 1),
            ));
        }

        if !seen.insert(postfix.as_str()) {
            return Err(ctx.validation_error(
                format!("duplicate trim postfix '{postfix}'"),
                find_string_span(ctx.src(), postfix, 2),
            ));
        }
    }

    Ok(())
}

/// Find the span of the `nth` (1-based) quoted occurrence of `value` in the
/// TOML source, quotes included.
pub(crate) fn find_string_span(src: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    let basic = format!("\"{value}\"");
    let literal = format!("'{value}'");

    let mut found: Vec<(usize, usize)> = src
        .match_indices(&basic)
        .chain(src.match_indices(&literal))
        .map(|(pos, text)| (pos, text.len()))
        .collect();
    found.sort_unstable();

    found
        .get(nth.checked_sub(1)?)
        .map(|&(pos, len)| SourceSpan::from((pos, len)))
}
