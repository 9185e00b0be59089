//! Core configuration and naming utilities for the cs2ts converter.
//!
//! This crate provides the configuration value threaded through every
//! conversion call and the identifier policies (postfix trimming, property
//! casing) shared by the type emitter and the rewrite engine.

mod config;
mod trim;
mod utils;

pub use config::Config;
pub use trim::{NameTrimmer, property_name};
pub use utils::{is_abbreviation, lower_first};
