//! CLI command implementations

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

pub mod generate_rules;
pub mod list;
pub mod optimize;
pub mod translate;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Optimize description dictionaries for one or more languages
    Optimize(optimize::OptimizeArgs),

    /// Check that a rules file parses and its patterns compile
    Validate(validate::ValidateArgs),

    /// Write a commented rules template for a new language
    GenerateRules(generate_rules::GenerateRulesArgs),

    /// Replace dictionary keys in an OpenAPI document with translations
    Translate(translate::TranslateArgs),

    /// List available components
    List {
        /// Configuration file
        #[arg(short, long, value_name = "FILE", env = "APIDESC_CONFIG")]
        config: Option<PathBuf>,

        /// Directory holding the rule files
        #[arg(short, long, value_name = "DIR")]
        rules_dir: Option<PathBuf>,

        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List configured languages and their rule files
    Languages,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Optimize(args) => args.execute(quiet),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateRules(args) => args.execute(),
            Commands::Translate(args) => args.execute(),
            Commands::List {
                config,
                rules_dir,
                subcommand: ListCommands::Languages,
            } => list::languages(config.as_deref(), rules_dir.as_deref()),
        }
    }
}

/// Initialize logging based on verbosity level. `RUST_LOG` takes
/// precedence.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbose)))
        .format_timestamp(None)
        .init();
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
