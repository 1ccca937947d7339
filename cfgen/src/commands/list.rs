use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    source::SchemaArgs,
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.schema.config().unwrap_or_exit();
        let loader = self.schema.load(&config).unwrap_or_exit();

        let report = ops::list(&loader);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
