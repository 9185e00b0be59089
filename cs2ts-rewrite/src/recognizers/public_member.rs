//! Recognizer for public type and member declaration headers.

use cs2ts_core::{Config, NameTrimmer};
use cs2ts_typescript::declaration_keyword;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Match, Recognizer, ScanWindow};

/// `public [modifiers] <keyword> <name><rest> {`, where the brace may sit on
/// the following line. The rest of the header never spans a `;`.
static PUBLIC_MEMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\bpublic\s+(?:(?:abstract|sealed|static|partial)\s+)*",
        r"(?P<keyword>[A-Za-z_][A-Za-z0-9_]*)\s+",
        r"(?P<name>[A-Za-z0-9_]+)(?P<rest>[^{;\r\n]*?)\s*\{",
    ))
    .unwrap()
});

/// Rewrites `public class FooDto {` to `export interface Foo {`.
pub struct PublicMemberRecognizer;

impl Recognizer for PublicMemberRecognizer {
    fn name(&self) -> &'static str {
        "public-member"
    }

    fn recognize(&self, window: &ScanWindow<'_>, config: &Config) -> Option<Match> {
        let mut from = window.cursor();

        while let Some(caps) = window.captures_from(&PUBLIC_MEMBER, from) {
            let whole = caps.get(0)?;
            if window.in_line_comment(whole.start()) {
                from = window.next_char(whole.start());
                continue;
            }

            let replacement = format!(
                "export {} {}{} {{",
                declaration_keyword(&caps["keyword"]),
                NameTrimmer::new(config).trim(&caps["name"]),
                &caps["rest"],
            );
            return Some(window.match_at(replacement, whole.start(), whole.end()));
        }

        None
    }
}
