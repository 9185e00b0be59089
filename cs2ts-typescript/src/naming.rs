//! TypeScript declaration keywords.

/// Map a C# declaration keyword to the keyword used for the exported
/// TypeScript declaration.
///
/// Data-carrying declarations (`class`, `struct`, `record`) become
/// structural `interface`s; anything else (`enum`, `interface`, ...) keeps
/// its spelling.
pub fn declaration_keyword(keyword: &str) -> &str {
    match keyword {
        "class" | "struct" | "record" => "interface",
        other => other,
    }
}
