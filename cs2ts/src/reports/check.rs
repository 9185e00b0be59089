//! Check command report data structures.

use std::path::PathBuf;

use cs2ts_core::Config;

use super::output::{Output, Report};

/// Report data from settings validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the settings file.
    pub config_path: PathBuf,
    /// The settings it resolved to.
    pub config: Config,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        let postfixes = if self.config.trim_postfixes.is_empty() {
            "(none)".to_string()
        } else {
            self.config.trim_postfixes.join(", ")
        };

        out.key_value_indented(
            "propertiesToCamelCase",
            &self.config.properties_to_camel_case.to_string(),
        );
        out.key_value_indented("trimPostfixes", &postfixes);
        out.key_value_indented(
            "recursiveTrimPostfixes",
            &self.config.recursive_trim_postfixes.to_string(),
        );
    }
}
