mod check;
mod completions;
mod convert;
mod init;
mod options;
mod type_expr;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::Result;
use init::InitCommand;
pub(crate) use options::ConfigArgs;
use type_expr::TypeCommand;

/// Extension trait for exiting on user-facing errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cs2ts_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for cs2ts_types::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "cs2ts")]
#[command(version)]
#[command(about = "Convert C# class definitions into TypeScript declarations")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Convert(cmd) => cmd.run(),
            Commands::Type(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert C# source text to TypeScript
    Convert(ConvertCommand),

    /// Convert a single type expression
    Type(TypeCommand),

    /// Validate cs2ts.toml and show the resolved settings
    Check(CheckCommand),

    /// Write a default cs2ts.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
