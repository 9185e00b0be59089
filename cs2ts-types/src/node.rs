//! Parsed type expression tree.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{TypeError, parse_type};

/// A parsed source type expression.
///
/// `Dictionary<string, int[]>?[,][]` parses to a node named `Dictionary`
/// with two generic arguments, `is_nullable` set and an array rank of 2.
/// Each bracket pair counts as one rank level whatever commas it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeNode {
    /// Leading identifier, without generic or array syntax
    pub base_name: String,
    /// Generic arguments in declaration order
    pub generic_arguments: Vec<TypeNode>,
    /// Number of trailing `[]` / `[,]` suffixes
    pub array_rank: usize,
    /// Whether a `?` marker precedes the array suffixes
    pub is_nullable: bool,
}

impl TypeNode {
    /// Create a plain named type.
    pub fn named(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            generic_arguments: Vec::new(),
            array_rank: 0,
            is_nullable: false,
        }
    }

    /// Set the generic arguments.
    pub fn with_arguments(mut self, arguments: Vec<TypeNode>) -> Self {
        self.generic_arguments = arguments;
        self
    }

    /// Set the array rank.
    pub fn with_rank(mut self, rank: usize) -> Self {
        self.array_rank = rank;
        self
    }

    /// Mark the type nullable.
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    /// Whether the type has generic arguments.
    pub fn is_generic(&self) -> bool {
        !self.generic_arguments.is_empty()
    }

    /// Whether the type carries array suffixes.
    pub fn is_array(&self) -> bool {
        self.array_rank > 0
    }
}

impl FromStr for TypeNode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s)
    }
}

/// Renders the node back in source syntax, normalising whitespace.
impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_name)?;
        if self.is_generic() {
            f.write_str("<")?;
            for (i, arg) in self.generic_arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }
        if self.is_nullable {
            f.write_str("?")?;
        }
        for _ in 0..self.array_rank {
            f.write_str("[]")?;
        }
        Ok(())
    }
}
