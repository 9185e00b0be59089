//! Shared identifier helpers.

/// Lower-case the first character (e.g., "FirstName" -> "firstName")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Whether a name reads as an abbreviation (e.g., "ID", "URL2").
///
/// A name counts as one when upper-casing it changes nothing.
pub fn is_abbreviation(s: &str) -> bool {
    s.to_uppercase() == s
}
