//! seedrun-core - Core library for seedrun
//!
//! Shared functionality behind the seedrun CLI:
//!
//! - **config**: Environment-based Supabase configuration
//! - **client**: Supabase REST client (exec_sql RPC)
//! - **discover**: Seed-file discovery and priority scheduling
//! - **statement**: Naive `;`-based statement splitting
//! - **outcome**: Per-file outcomes and the run summary

pub mod client;
pub mod config;
pub mod discover;
pub mod error;
pub mod outcome;
pub mod statement;

// Re-export commonly used types
pub use client::SeedClient;
pub use config::Config;
pub use discover::SeedFile;
pub use error::{SeedError, SeedResult};
pub use outcome::{FileOutcome, RunSummary};
