//! TypeScript type mapper implementation.

use cs2ts_types::{Container, TypeMapper};

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_base_name(&self, name: &str) -> Option<&'static str> {
        let mapped = match name {
            "byte" | "sbyte" | "short" | "ushort" | "int" | "uint" | "long" | "ulong"
            | "float" | "double" | "decimal" | "Byte" | "SByte" | "Int16" | "UInt16"
            | "Int32" | "UInt32" | "Int64" | "UInt64" | "Single" | "Double" | "Decimal" => {
                "number"
            }
            "bool" | "Boolean" => "boolean",
            "string" | "String" | "char" | "Char" => "string",
            "object" | "Object" | "dynamic" => "any",
            _ => return None,
        };
        Some(mapped)
    }

    fn container(&self, name: &str, arity: usize) -> Option<Container> {
        match (name, arity) {
            (
                "List" | "IList" | "IEnumerable" | "ICollection" | "IReadOnlyList"
                | "IReadOnlyCollection" | "HashSet" | "ISet" | "Collection"
                | "ObservableCollection",
                1,
            ) => Some(Container::Sequence),
            (
                "Dictionary" | "IDictionary" | "IReadOnlyDictionary" | "SortedDictionary"
                | "ConcurrentDictionary",
                2,
            ) => Some(Container::Dictionary),
            ("Nullable", 1) => Some(Container::Nullable),
            _ => None,
        }
    }

    fn render_sequence(&self, element: &str) -> String {
        self.render_array(element, 1)
    }

    fn render_dictionary(&self, key: &str, value: &str) -> String {
        format!("{{ [key: {}]: {} }}", key, value)
    }

    fn render_array(&self, ty: &str, rank: usize) -> String {
        let suffix = "[]".repeat(rank);
        if is_union(ty) {
            format!("({}){}", ty, suffix)
        } else {
            format!("{}{}", ty, suffix)
        }
    }

    fn render_nullable(&self, ty: &str) -> String {
        format!("{} | undefined", ty)
    }
}

/// Whether `ty` has a `|` outside any brackets.
fn is_union(ty: &str) -> bool {
    let mut depth = 0i32;
    for c in ty.chars() {
        match c {
            '{' | '(' | '[' | '<' => depth += 1,
            '}' | ')' | ']' | '>' => depth -= 1,
            '|' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}
