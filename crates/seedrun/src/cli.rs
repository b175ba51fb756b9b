//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Database seed execution CLI
///
/// Runs SQL seed files against a Supabase project, statement by statement.
#[derive(Parser, Debug)]
#[command(name = "seedrun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover seed files and execute them against the database
    Run(RunCommand),

    /// Show which files would run, and in what order, without executing
    List(ListCommand),

    /// Check configuration and endpoint reachability
    Doctor,

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
pub struct RunCommand {
    /// Project root to search for seed files (defaults to the current directory)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args, Debug)]
pub struct ListCommand {
    /// Project root to search for seed files (defaults to the current directory)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
