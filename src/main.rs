/// The Big IDEA:
/// The Node.js compatibility test corpus is vendored and regenerated from
/// upstream, and one JSON config decides everything: which files belong to
/// which suite, which files the regeneration must never touch, and which
/// files are excluded on specific platforms. This tool is the single place
/// that config gets read and turned into usable lists (the runnable test
/// paths, the parallel/sequential split, and the compiled ignore patterns)
/// so the sync scripts and the test driver never re-derive them by hand.
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use node_compat_sync::core::config::ConfigStore;
use node_compat_sync::utils;

#[derive(Parser)]
#[command(name = "node-compat-sync")]
#[command(about = "Derives runnable path lists from the Node.js compat test suite config")]
struct Cli {
    /// Path to the suite config (defaults to config.json next to the tool)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every runnable test path derived from the `tests` map
    List,
    /// Print the parallel/sequential split of the runnable test paths
    Partition,
    /// Print the compiled ignore patterns guarding automatic regeneration
    Ignored,
    /// Validate the suite config and report issues
    Check,
    /// Print a summary of suites, partitions and ignore patterns
    Status,
    /// Write a derived manifest of paths and patterns to a file
    Export {
        /// Destination file
        path: String,
        /// Output format: json, yaml or toml
        #[arg(long, default_value = "json")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = match cli.config {
        Some(path) => ConfigStore::new_at(path),
        None => ConfigStore::new()?,
    };

    match cli.command {
        Commands::List => utils::list_paths(&store),
        Commands::Partition => utils::show_partition(&store),
        Commands::Ignored => utils::show_ignored(&store),
        Commands::Check => utils::check_config(&store),
        Commands::Status => utils::show_status(&store),
        Commands::Export { path, format } => utils::export_manifest(&store, &path, format),
    }
}
