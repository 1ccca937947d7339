use cfgen_compiler::{BlueprintExt, DisplayStyle, compile};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::source::SchemaArgs;

#[derive(Args)]
pub struct ShowCommand {
    /// Name of the module to show
    pub module: String,

    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Include descriptions
    #[arg(short, long)]
    pub descriptions: bool,
}

impl ShowCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.schema.config().unwrap_or_exit();
        let loader = self.schema.load(&config).unwrap_or_exit();
        let compilation = compile(&loader, &self.module).unwrap_or_exit();
        let blueprint = &compilation.blueprint;

        if blueprint.tables.is_empty() {
            println!("No tables defined");
            return Ok(());
        }

        let style = if self.descriptions {
            DisplayStyle::WithDescriptions
        } else {
            DisplayStyle::Simple
        };

        println!("{}:", self.module);
        println!("{}", blueprint.display_style(style).indent("  "));
        Ok(())
    }
}
