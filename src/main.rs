//! taxonomy-links CLI
//!
//! Usage: taxonomy-links <COMMAND>
//!
//! Commands:
//!   render        Render a vocabulary (sub)tree as a nested list
//!   vocabularies  List vocabularies available in the vocabulary directory

mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use taxonomy_links::config;
use taxonomy_links::presentation::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let loaded =
        config::load(cli.config.as_deref(), &cwd).context("failed to load configuration")?;
    for warning in &loaded.warnings {
        log::warn!("{}", warning);
    }

    match cli.command {
        Commands::Render {
            source,
            format,
            ascii,
            output,
        } => commands::render::cmd_render(&loaded, &source, format, ascii, output.as_deref()),
        Commands::Records { source } => commands::records::cmd_records(&loaded, &source),
        Commands::Vocabularies { vocabularies } => {
            commands::vocabularies::cmd_vocabularies(&loaded, vocabularies.as_deref())
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
