//! seedrun - Database seed execution CLI
//!
//! Discovers SQL seed files in a project tree and executes them,
//! statement by statement, against a Supabase project via the
//! `exec_sql` RPC endpoint.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("seedrun=info".parse()?))
        .init();

    let cli = Cli::parse();

    // Execute command. Only configuration failure propagates out of here
    // as a non-zero exit; per-file and per-statement failures are
    // reported on stdout and still exit zero.
    match cli.command {
        Commands::Run(cmd) => commands::run::execute(cmd).await,
        Commands::List(cmd) => commands::list::execute(cmd),
        Commands::Doctor => commands::doctor::execute().await,
        Commands::Version => {
            println!("seedrun {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
