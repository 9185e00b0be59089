//! Postfix trimming for type and member names.

use crate::{Config, is_abbreviation, lower_first};

/// Strips configured postfixes from identifiers.
///
/// Postfixes are tried in configuration order; the first one the name ends
/// with is removed. In recursive mode the scan restarts on the shortened
/// name until a full pass removes nothing. Postfixes can empty a name
/// entirely (`"Dto"` with postfix `"Dto"`); guarding against that is left
/// to whoever picks the postfixes.
///
/// # Example
///
/// ```
/// use cs2ts_core::{Config, NameTrimmer};
///
/// let config = Config::new().with_trim_postfixes(["Dto", "Model"]).with_recursive_trim(true);
/// assert_eq!(NameTrimmer::new(&config).trim("UserModelDto"), "User");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NameTrimmer<'a> {
    postfixes: &'a [String],
    recursive: bool,
}

impl<'a> NameTrimmer<'a> {
    /// Create a trimmer from the configured postfix policy.
    pub fn new(config: &'a Config) -> Self {
        Self {
            postfixes: &config.trim_postfixes,
            recursive: config.recursive_trim_postfixes,
        }
    }

    /// A trimmer that only strips surrounding whitespace.
    pub fn identity() -> NameTrimmer<'static> {
        NameTrimmer {
            postfixes: &[],
            recursive: false,
        }
    }

    /// Trim surrounding whitespace and configured postfixes from `name`.
    pub fn trim(&self, name: &str) -> String {
        let mut name = name.trim();

        while let Some(stripped) = self.strip_first(name) {
            name = stripped;
            if !self.recursive {
                break;
            }
        }

        name.to_string()
    }

    /// Remove the first matching postfix, if any.
    ///
    /// Empty postfixes never match; stripping nothing would not progress.
    fn strip_first<'n>(&self, name: &'n str) -> Option<&'n str> {
        self.postfixes
            .iter()
            .filter(|postfix| !postfix.is_empty())
            .find_map(|postfix| name.strip_suffix(postfix.as_str()))
    }
}

/// Convert a source property name to its target spelling.
///
/// The name is trimmed, then camel-cased when configured. Names that are
/// entirely upper-case before trimming (`ID`, `URL`) keep their casing.
pub fn property_name(name: &str, config: &Config) -> String {
    let abbreviation = is_abbreviation(name);
    let trimmed = NameTrimmer::new(config).trim(name);

    if config.properties_to_camel_case && !abbreviation {
        lower_first(&trimmed)
    } else {
        trimmed
    }
}
