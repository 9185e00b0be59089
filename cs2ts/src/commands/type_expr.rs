use clap::Args;
use cs2ts_types::parse_type;
use cs2ts_typescript::emit_type;
use eyre::{Context, Result};

use super::{ConfigArgs, UnwrapOrExit};

#[derive(Args)]
pub struct TypeCommand {
    /// C# type expression, e.g. "Dictionary<string, List<int>>"
    pub expr: String,

    /// Print the parsed type tree as JSON instead of converting it
    #[arg(long, conflicts_with_all = ["camel_case", "trim_postfix", "recursive_trim"])]
    pub json: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl TypeCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.resolve().unwrap_or_exit();
        let node = parse_type(&self.expr).unwrap_or_exit();

        if self.json {
            let json =
                serde_json::to_string_pretty(&node).wrap_err("Failed to serialize type tree")?;
            println!("{json}");
        } else {
            println!("{}", emit_type(&node, &config));
        }

        Ok(())
    }
}
