//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --verbose) are inherited by all subcommands
//! - Flags given on the command line override config file and environment

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// taxonomy-links - render taxonomy trees as nested link lists
#[derive(Parser, Debug)]
#[command(name = "taxonomy-links")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./taxonomy-links.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the terms come from and which part of the tree to take
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Directory containing vocabulary files
    #[arg(long, value_name = "DIR")]
    pub vocabularies: Option<PathBuf>,

    /// Vocabulary machine name
    #[arg(long, value_name = "VID")]
    pub vocabulary: Option<String>,

    /// Term id serving as the top of the tree (coerced to an integer)
    #[arg(long, value_name = "TID", allow_hyphen_values = true)]
    pub parent: Option<String>,

    /// Only include terms shallower than this many levels
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a vocabulary (sub)tree as a nested list
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Use ASCII bullets in text output
        #[arg(long)]
        ascii: bool,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the raw depth-tagged term sequence (debugging)
    #[command(hide = true)]
    Records {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List vocabularies available in the vocabulary directory
    Vocabularies {
        /// Directory containing vocabulary files
        #[arg(long, value_name = "DIR")]
        vocabularies: Option<PathBuf>,
    },
}
