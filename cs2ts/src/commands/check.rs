use std::path::PathBuf;

use clap::Args;
use cs2ts_config::{DEFAULT_FILE_NAME, SettingsFile};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the settings file (defaults to ./cs2ts.toml)
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = SettingsFile::open(&self.config).unwrap_or_exit();

        let report = ops::check(&file);
        report.render(&mut TerminalOutput::stdout());

        Ok(())
    }
}
