//! Settings file support for cs2ts.
//!
//! A `cs2ts.toml` file holds the same keys as the editor settings the
//! converter was designed around:
//!
//! ```toml
//! propertiesToCamelCase = true
//! trimPostfixes = ["Dto", "Model"]
//! recursiveTrimPostfixes = false
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod parse;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::{DEFAULT_FILE_NAME, SettingsFile, default_settings_toml};
pub use parse::parse_config;
