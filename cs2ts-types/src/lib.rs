//! Type expression model for the cs2ts converter.
//!
//! A source type expression such as `Dictionary<string, List<int>>[]` is
//! parsed into a [`TypeNode`] tree, then rendered for a target language by a
//! [`TypeMapper`].
//!
//! # Architecture
//!
//! ```text
//! "List<int>?[]" → parse_type → TypeNode → TypeMapper::emit → "number[][] | undefined"
//! ```

mod error;
mod mapper;
mod node;
mod parse;

pub use error::{Result, TypeError};
pub use mapper::{Container, TypeMapper};
pub use node::TypeNode;
pub use parse::parse_type;
