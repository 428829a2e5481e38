use apidesc_cli::commands::{self, Commands};
use clap::Parser;

/// Rewrite verbose API descriptions into concise text
#[derive(Debug, Parser)]
#[command(name = "apidesc", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose, cli.quiet);
    cli.command.execute(cli.quiet)
}
