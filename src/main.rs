//! Nueva Intake CLI
//!
//! Command-line interface for grouping uploaded creative files into projects.

use anyhow::Context;
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use nueva_intake::cli::commands::{self, ProposeOptions};
use nueva_intake::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; log records from the command layer are forwarded too
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Nueva Intake v{}", env!("CARGO_PKG_VERSION"));

    let rules = commands::load_rules(cli.rules.as_deref()).context("failed to load intake rules")?;

    match cli.command {
        Some(Commands::Propose {
            paths,
            recursive,
            json,
            placeholder_metadata,
        }) => {
            let options = ProposeOptions {
                recursive,
                json,
                placeholder_metadata,
            };
            commands::propose(&paths, rules, &options).context("failed to propose projects")?;
        }
        Some(Commands::Classify { filenames }) => commands::classify(&filenames, rules)?,
        Some(Commands::Rules) => commands::show_rules(&rules)?,
        None => {
            println!("Nueva Intake v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
        }
    }

    Ok(())
}
