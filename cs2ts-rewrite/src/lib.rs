//! Match-driven C# to TypeScript rewriting.
//!
//! The engine scans source text with a fixed, ordered list of recognizers.
//! At each step every recognizer reports its earliest match at or after the
//! cursor; the earliest one wins (ties go to the recognizer listed first),
//! its span is replaced and the cursor moves past it. Text no recognizer
//! claims is copied through unchanged, so arbitrary fragments are safe to
//! convert.
//!
//! # Usage
//!
//! ```
//! use cs2ts_core::Config;
//! use cs2ts_rewrite::cs2ts;
//!
//! let ts = cs2ts("public List<int> Items { get; }", &Config::default());
//! assert_eq!(ts, "Items: number[];");
//! ```

mod engine;
mod recognizer;

pub mod recognizers;

pub use engine::{RewriteEngine, RewriteReport, Step, cs2ts};
pub use recognizer::{Match, Recognizer, ScanWindow};
