//! CLI argument definitions using clap.
//!
//! Running `citylist` with no arguments converts `uscities.csv` into
//! `cities.js`. Flags override the config file, which overrides the defaults.
//!
//! ## Commands
//!
//! - (none): Generate the JavaScript module
//! - `init`: Write a default `.citylistrc.json`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Overrides for a single generate run.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// CSV file to read (overrides config file)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Header of the column holding city names (overrides config file)
    #[arg(short, long)]
    pub column: Option<String>,

    /// JavaScript file to write (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the exported constant (overrides config file)
    #[arg(long)]
    pub export_name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .citylistrc.json configuration file
    Init,
}
