//! Discovery preview command.
//!
//! Prints the files that would run and their execution order without
//! touching the network, so no credentials are required.

use anyhow::Result;
use colored::Colorize;

use seedrun_core::discover::{PRIORITY_ORDER, discover_seed_files, schedule};

use crate::cli::ListCommand;

pub fn execute(cmd: ListCommand) -> Result<()> {
    let files = discover_seed_files(&cmd.root)?;
    if files.is_empty() {
        println!("{}", "✗ No seed files found!".red());
        return Ok(());
    }

    println!("Found {} seed files. Execution order:", files.len());
    for (i, file) in schedule(files).into_iter().enumerate() {
        let marker = if PRIORITY_ORDER.contains(&file.name.as_str()) {
            "priority".cyan()
        } else {
            "".normal()
        };
        println!("  {:>3}. {} {}", i + 1, file.name, marker);
    }

    Ok(())
}
