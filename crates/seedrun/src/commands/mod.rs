//! Command implementations for the seedrun CLI.
//!
//! Each submodule implements the logic for one subcommand.

pub mod doctor;
pub mod list;
pub mod run;
