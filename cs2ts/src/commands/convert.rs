use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::Args;
use eyre::{Context, Result};

use super::{ConfigArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConvertCommand {
    /// C# source file to convert (reads stdin when omitted or '-')
    pub input: Option<PathBuf>,

    /// Write the TypeScript to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print how many spans each recognizer rewrote (to stderr)
    #[arg(long)]
    pub summary: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl ConvertCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.resolve().unwrap_or_exit();
        let source = self.read_input()?;

        let report = ops::convert(&source, self.input_name(), &config);

        match &self.output {
            Some(path) => std::fs::write(path, &report.output)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?,
            None => print!("{}", report.output),
        }

        if self.summary {
            report.render(&mut TerminalOutput::stderr());
        }

        Ok(())
    }

    fn stdin_requested(&self) -> bool {
        match &self.input {
            None => true,
            Some(path) => path == Path::new("-"),
        }
    }

    fn input_name(&self) -> String {
        match &self.input {
            Some(path) if !self.stdin_requested() => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if !self.stdin_requested() => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display())),
            _ => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .wrap_err("Failed to read stdin")?;
                Ok(source)
            }
        }
    }
}
