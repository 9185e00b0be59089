use std::path::PathBuf;

use clap::Args;
use cs2ts_config::{DEFAULT_FILE_NAME, SettingsFile};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the settings file (defaults to ./cs2ts.toml)
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub config: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        if self.config.exists() && !self.force {
            eyre::bail!(
                "{} already exists (use --force to overwrite)",
                self.config.display()
            );
        }

        let file = SettingsFile::create(&self.config).unwrap_or_exit();
        println!("Created {}", file.path().display());

        Ok(())
    }
}
