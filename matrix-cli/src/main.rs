mod commands;
mod output;

use clap::{Parser, Subcommand};
use color_eyre::Result;

#[derive(Parser, Debug)]
#[command(name = "ci-matrix")]
#[command(author, version, about = "Emit JSON build/test matrices for CI workflows", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: commands::generate::GenerateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the build/test matrix (default when no subcommand is given)
    Generate(commands::generate::GenerateArgs),

    /// Generate a depth-limited include matrix for recursive dispatch
    Nested(commands::nested::NestedArgs),

    /// Summarize the build catalog
    List(commands::list::ListArgs),
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => commands::generate::execute(args),
        Some(Commands::Nested(args)) => commands::nested::execute(args),
        Some(Commands::List(args)) => commands::list::execute(args),
        None => commands::generate::execute(cli.generate),
    }
}
