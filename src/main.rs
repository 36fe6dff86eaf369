use anyhow::Result;
use clap::Parser;
use inigen::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
