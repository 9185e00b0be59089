use std::path::PathBuf;

use clap::Args;
use cs2ts_config::{DEFAULT_FILE_NAME, SettingsFile};
use cs2ts_core::Config;
use tracing::debug;

/// Settings file selection plus per-invocation overrides.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Path to the settings file (defaults to ./cs2ts.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lower-case the first character of property names
    #[arg(long)]
    pub camel_case: bool,

    /// Postfix to trim from names; repeat for several (replaces the file's list)
    #[arg(long = "trim-postfix", value_name = "POSTFIX")]
    pub trim_postfix: Vec<String>,

    /// Keep trimming postfixes until none matches
    #[arg(long)]
    pub recursive_trim: bool,
}

impl ConfigArgs {
    /// Load the settings file and apply command line overrides.
    ///
    /// A missing default file means default settings; a missing explicit
    /// `--config` path is an error.
    pub fn resolve(&self) -> cs2ts_config::Result<Config> {
        let config = match &self.config {
            Some(path) => SettingsFile::open(path)?.into_config(),
            None => SettingsFile::open_or_default(DEFAULT_FILE_NAME)?,
        };
        Ok(self.apply(config))
    }

    /// Overlay the command line flags on `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.camel_case {
            config.properties_to_camel_case = true;
        }
        if !self.trim_postfix.is_empty() {
            config.trim_postfixes = self.trim_postfix.clone();
        }
        if self.recursive_trim {
            config.recursive_trim_postfixes = true;
        }
        debug!(?config, "resolved settings");
        config
    }
}
