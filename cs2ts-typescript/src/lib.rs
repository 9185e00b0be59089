//! TypeScript target for the cs2ts converter.
//!
//! This crate knows how C# types and declarations are spelled in
//! TypeScript: primitive names, collection shapes, optional values and the
//! declaration keywords used for exported types.
//!
//! # Usage
//!
//! ```
//! use cs2ts_core::Config;
//! use cs2ts_typescript::convert_type;
//!
//! let ts = convert_type("Dictionary<string, List<int>>", &Config::default()).unwrap();
//! assert_eq!(ts, "{ [key: string]: number[] }");
//! ```

mod naming;
mod type_mapper;

use cs2ts_core::{Config, NameTrimmer};
use cs2ts_types::{TypeMapper, TypeNode, parse_type};

pub use naming::declaration_keyword;
pub use type_mapper::TypeScriptTypeMapper;

/// Emit the TypeScript spelling of a parsed type, trimming user type names.
pub fn emit_type(node: &TypeNode, config: &Config) -> String {
    TypeScriptTypeMapper.emit(node, &NameTrimmer::new(config))
}

/// Parse a C# type expression and emit its TypeScript spelling.
///
/// # Errors
///
/// Returns the parse error when `expr` is not a well-formed type expression.
pub fn convert_type(expr: &str, config: &Config) -> cs2ts_types::Result<String> {
    let node = parse_type(expr)?;
    Ok(emit_type(&node, config))
}
