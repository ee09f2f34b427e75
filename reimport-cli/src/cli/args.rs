use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Rewrite stale `use` paths after modules move into shared crates
#[derive(Parser, Debug)]
#[command(name = "reimport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite imports in every source file under ROOT
    Migrate {
        /// Source directory to scan (defaults from config, then ".")
        root: Option<PathBuf>,

        /// File extension to process
        #[arg(short = 'e', long)]
        extension: Option<String>,

        /// Directory names to skip at any depth, in addition to hidden ones
        /// (replaces the configured list when given)
        #[arg(long = "exclude-dir", value_delimiter = ',', value_name = "NAME")]
        exclude_dirs: Vec<String>,

        /// Run every rule but write nothing
        #[arg(long)]
        dry_run: bool,

        /// Show a unified diff for every updated file
        #[arg(long)]
        diff: bool,

        /// Append a timestamped record of the run to this file
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the console trail
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the built-in rewrite rules in application order
    Rules {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
