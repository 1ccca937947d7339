use cfgen_compiler::Pipeline;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    source::SchemaArgs,
};

#[derive(Args)]
pub struct CheckCommand {
    /// Name of the module to check
    pub module: String,

    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.schema.config().unwrap_or_exit();
        let loader = self.schema.load(&config).unwrap_or_exit();

        let pipeline = Pipeline::new();
        let report = ops::check(&pipeline, &loader, &self.module).unwrap_or_exit();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.diagnostics)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
