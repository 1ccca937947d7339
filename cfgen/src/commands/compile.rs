use std::path::PathBuf;

use cfgen_compiler::{Severity, compile};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{ops, source::SchemaArgs};

#[derive(Args)]
pub struct CompileCommand {
    /// Name of the module to compile
    pub module: String,

    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Write the blueprint to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON (overrides [output] pretty in cfgen.toml)
    #[arg(long)]
    pub compact: bool,
}

impl CompileCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.schema.config().unwrap_or_exit();
        let loader = self.schema.load(&config).unwrap_or_exit();
        let compilation = compile(&loader, &self.module).unwrap_or_exit();

        for diag in compilation.diagnostics.iter().filter(|d| d.severity != Severity::Info) {
            eprintln!("{}", diag);
        }

        let pretty = config.output.pretty && !self.compact;
        let json = ops::to_json(&compilation.blueprint, pretty)?;
        ops::write_output(&json, self.output.as_deref())
    }
}
