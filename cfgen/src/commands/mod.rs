mod check;
mod compile;
mod completions;
mod list;
mod show;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use compile::CompileCommand;
use completions::CompletionsCommand;
use eyre::Result;
use list::ListCommand;
use show::ShowCommand;

/// Extension trait for exiting on schema/compiler errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, E>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
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
#[command(name = "cfgen")]
#[command(version)]
#[command(about = "Compile schema modules into table/object blueprints")]
pub(crate) struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Compile(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Show(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a module and write its blueprint as JSON
    Compile(CompileCommand),

    /// Compile a module and report diagnostics without writing output
    Check(CheckCommand),

    /// Print a module's tables, objects and fields as a tree
    Show(ShowCommand),

    /// List the modules found in the schema directories
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
