mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_annotate, run_compile, run_normalize, run_stats};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize(args) => {
            run_normalize(args)?;
        }
        Commands::Compile(args) => {
            run_compile(args)?;
        }
        Commands::Annotate(args) => {
            run_annotate(args)?;
        }
        Commands::Stats(args) => {
            run_stats(args)?;
        }
    }

    Ok(())
}
