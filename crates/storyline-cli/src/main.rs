use clap::Parser;

use storyline_cli::cli::{Cli, Command};
use storyline_cli::commands;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Detect(args) => {
            let output = commands::detect(args)?;
            print!("{output}");
        }
        Command::Stopwords(args) => {
            let count = commands::stopwords(args)?;
            eprintln!("wrote {count} stop words to {}", args.output.display());
        }
    }
    Ok(())
}
