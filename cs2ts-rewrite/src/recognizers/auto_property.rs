//! Recognizer for auto-implemented and expression-bodied properties.

use cs2ts_core::{Config, property_name};
use cs2ts_types::parse_type;
use cs2ts_typescript::emit_type;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::{Match, Recognizer, ScanWindow};

/// Modifiers, a type token, a name, then `{ get; set; }` or `=> ...;`.
///
/// The type token is only a shape check; the `type` group is parsed
/// properly before anything is rewritten. Generic arguments and expression
/// bodies are matched lazily and never cross a member boundary, so two
/// members on one line are separate candidates.
static AUTO_PROPERTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:(?:public|protected|internal|private)\s+)*",
        r"(?:(?:new|override|virtual|abstract|sealed|static|required|readonly)\s+)*",
        r"(?P<type>[A-Za-z0-9_]+\s*(?:<[^;{}=\r\n]*?>)?\s*\??(?:\[,*\])*)",
        r"\s+(?P<name>[A-Za-z0-9_]+)\s*",
        r"(?:",
        r"\{\s*(?:(?:internal|public|private|protected)\s+)?get\s*;\s*",
        r"(?:(?:(?:internal|public|private|protected)\s+)?(?:set|init)\s*;\s*)?\}",
        r"(?:[ \t]*=[^;\r\n]*;)?",
        r"|=>[^\r\n]*?;",
        r")",
    ))
    .unwrap()
});

/// Rewrites `public int Age { get; set; }` to `Age: number;`.
pub struct AutoPropertyRecognizer;

impl Recognizer for AutoPropertyRecognizer {
    fn name(&self) -> &'static str {
        "auto-property"
    }

    fn recognize(&self, window: &ScanWindow<'_>, config: &Config) -> Option<Match> {
        let mut from = window.cursor();

        while let Some(caps) = window.captures_from(&AUTO_PROPERTY, from) {
            let whole = caps.get(0)?;
            if window.in_line_comment(whole.start()) {
                from = window.next_char(whole.start());
                continue;
            }
            match parse_type(&caps["type"]) {
                Ok(node) => {
                    let replacement = format!(
                        "{}: {};",
                        property_name(&caps["name"], config),
                        emit_type(&node, config)
                    );
                    return Some(window.match_at(replacement, whole.start(), whole.end()));
                }
                Err(err) => {
                    // Leave this span alone and look further on.
                    trace!(at = whole.start(), reason = err.reason(), "skipping malformed property type");
                    from = window.next_char(whole.start());
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(text: &str, config: &Config) -> Option<Match> {
        AutoPropertyRecognizer.recognize(&ScanWindow::new(text, 0), config)
    }

    fn replacement(text: &str) -> Option<String> {
        recognize(text, &Config::default()).map(|m| m.replacement)
    }

    #[test]
    fn test_get_set_property() {
        let found = recognize("public int Age { get; set; }", &Config::default())
            .expect("property");

        assert_eq!(found.replacement, "Age: number;");
        assert_eq!(found.start, 0);
        assert_eq!(found.len, 28);
    }

    #[test]
    fn test_get_only_property() {
        assert_eq!(
            replacement("public List<int> Items { get; }").as_deref(),
            Some("Items: number[];")
        );
    }

    #[test]
    fn test_accessor_modifiers_and_init() {
        assert_eq!(
            replacement("public string Name { get; private set; }").as_deref(),
            Some("Name: string;")
        );
        assert_eq!(
            replacement("public string Name { internal get; init; }").as_deref(),
            Some("Name: string;")
        );
        assert_eq!(
            replacement("public string Name {get;set;}").as_deref(),
            Some("Name: string;")
        );
    }

    #[test]
    fn test_member_modifiers() {
        assert_eq!(
            replacement("public override bool Done { get; }").as_deref(),
            Some("Done: boolean;")
        );
        assert_eq!(
            replacement("protected virtual int? Count { get; set; }").as_deref(),
            Some("Count: number | undefined;")
        );
        assert_eq!(
            replacement("public required string Key { get; init; }").as_deref(),
            Some("Key: string;")
        );
    }

    #[test]
    fn test_expression_bodied_property() {
        let text = r#"public string FullName => First + " " + Last;"#;
        let found = recognize(text, &Config::default()).expect("property");

        assert_eq!(found.replacement, "FullName: string;");
        assert_eq!(found.len, text.len());
    }

    #[test]
    fn test_initializer_is_consumed() {
        let text = "public List<string> Tags { get; set; } = new List<string>();";
        let found = recognize(text, &Config::default()).expect("property");

        assert_eq!(found.replacement, "Tags: string[];");
        assert_eq!(found.len, text.len());
    }

    #[test]
    fn test_generic_and_array_types() {
        assert_eq!(
            replacement("public Dictionary<string, List<int>> Map { get; set; }").as_deref(),
            Some("Map: { [key: string]: number[] };")
        );
        assert_eq!(
            replacement("public int[,] Grid { get; set; }").as_deref(),
            Some("Grid: number[];")
        );
        assert_eq!(
            replacement("public Tuple<List<int[], Tuple<bool, int[]>>[][], bool[]>[] T { get; }")
                .as_deref(),
            Some("T: Tuple<List<number[], Tuple<boolean, number[]>>[][], boolean[]>[];")
        );
    }

    #[test]
    fn test_offset_is_relative_to_window() {
        let text = "xx\n    public int Age { get; }";
        let found = AutoPropertyRecognizer
            .recognize(&ScanWindow::new(text, 2), &Config::default())
            .expect("property");

        assert_eq!(found.start, 5);
    }

    #[test]
    fn test_name_and_type_trimming() {
        let config = Config::new()
            .with_camel_case(true)
            .with_trim_postfixes(["Dto"]);

        let found = recognize("public List<OrderDto> OrderDto { get; set; }", &config)
            .expect("property");
        assert_eq!(found.replacement, "order: Order[];");

        let found = recognize("public int ID { get; set; }", &config).expect("property");
        assert_eq!(found.replacement, "ID: number;");
    }

    #[test]
    fn test_methods_and_fields_do_not_match() {
        assert_eq!(replacement("public int Count() { return 1; }"), None);
        assert_eq!(replacement("public int count;"), None);
        assert_eq!(replacement("public int Age { get { return 1; } }"), None);
    }

    #[test]
    fn test_two_generic_properties_on_one_line() {
        let text = "public List<int> A { get; set; } public List<string> B { get; set; }";
        let found = recognize(text, &Config::default()).expect("property");
        assert_eq!(found.replacement, "A: number[];");
        assert_eq!(found.len, "public List<int> A { get; set; }".len());
    }

    #[test]
    fn test_expression_body_stops_at_first_semicolon() {
        let text = "public int A => 1; public int B => 2;";
        let found = recognize(text, &Config::default()).expect("property");
        assert_eq!(found.replacement, "A: number;");
        assert_eq!(found.len, "public int A => 1;".len());
    }

    #[test]
    fn test_line_comments_are_not_properties() {
        assert_eq!(replacement("// public int A { get; }"), None);
        assert_eq!(replacement("x(); // Map<K,V> x => y;"), None);

        let text = "// public int A { get; }\npublic int B { get; }";
        let found = recognize(text, &Config::default()).expect("property");
        assert_eq!(found.replacement, "B: number;");
    }

    #[test]
    fn test_malformed_type_is_skipped() {
        assert_eq!(replacement("public Foo<int, > Bad { get; }"), None);

        let text = "public Foo<int, > Bad { get; }\npublic int Good { get; }";
        let found = recognize(text, &Config::default()).expect("later property");
        assert_eq!(found.replacement, "Good: number;");
        assert_eq!(found.start, text.find("public int").unwrap());
    }
}
