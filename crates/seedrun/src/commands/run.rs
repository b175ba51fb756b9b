//! Seed execution command.
//!
//! The full pipeline: load config, discover seed files, order them by
//! the fixed priority list, execute each file statement by statement,
//! then print a summary. Files run strictly sequentially; a statement
//! error is logged and counted but never aborts the file or the run.

use anyhow::Result;
use colored::Colorize;

use seedrun_core::config::Config;
use seedrun_core::discover::{discover_seed_files, schedule};
use seedrun_core::outcome::{FileOutcome, RunSummary};
use seedrun_core::statement::split_statements;
use seedrun_core::{SeedClient, SeedFile};

use crate::cli::RunCommand;

pub async fn execute(cmd: RunCommand) -> Result<()> {
    println!("{}", "Starting database seed execution".cyan().bold());
    println!("{}", "─".repeat(50));

    // Configuration failure is the only fatal path: it propagates out of
    // main as a non-zero exit and is reported exactly once there.
    let config = Config::from_env()?;

    println!("Connecting to Supabase at: {}", config.url);
    let client = SeedClient::new(&config)?;

    let files = discover_seed_files(&cmd.root)?;
    if files.is_empty() {
        println!("{}", "✗ No seed files found!".red());
        return Ok(());
    }

    println!();
    println!("Found {} seed files:", files.len());
    for file in &files {
        println!("   - {}", file.name);
    }
    println!();

    let total = files.len();
    let mut summary = RunSummary::default();

    for file in schedule(files) {
        summary.record(execute_file(&client, &file).await);
    }

    print_summary(&summary, total);
    Ok(())
}

/// Execute every statement in one file, printing progress inline.
async fn execute_file(client: &SeedClient, file: &SeedFile) -> FileOutcome {
    println!("{}", format!("▶ Executing {}...", file.name).cyan());

    let sql = match std::fs::read_to_string(&file.path) {
        Ok(sql) => sql,
        Err(e) => {
            println!("  {}", format!("✗ Failed to read {}: {}", file.name, e).red());
            return FileOutcome::read_failure(file.clone(), e.to_string());
        }
    };

    let mut executed = 0;
    let mut errors = 0;

    for statement in split_statements(&sql) {
        match client.exec_sql(&statement).await {
            Ok(()) => executed += 1,
            Err(e) => {
                println!("  {}", format!("⚠ Error in statement: {}", e).yellow());
                errors += 1;
            }
        }
    }

    let result = format!("Executed {} statements, {} errors", executed, errors);
    if errors == 0 {
        println!("  {}", format!("✓ {}", result).green());
    } else {
        println!("  {}", format!("✗ {}", result).yellow());
    }

    FileOutcome { file: file.clone(), executed, errors, read_error: None }
}

fn print_summary(summary: &RunSummary, total: usize) {
    println!();
    println!("{}", "─".repeat(50));
    println!("{}", "Execution Summary".cyan().bold());
    println!("{}", format!("✓ Succeeded: {} files", summary.succeeded_count()).green());
    println!("{}", format!("✗ Failed: {} files", summary.failed_count()).red());

    if summary.failed_count() > 0 {
        println!();
        println!("{}", "Failed files:".red());
        for outcome in summary.failed() {
            println!("   - {}", outcome.file.name);
        }
    }

    if summary.succeeded_count() > 0 {
        println!();
        println!("{}", "Succeeded files:".green());
        for outcome in summary.succeeded() {
            println!("   - {}", outcome.file.name);
        }
    }

    println!();
    println!(
        "Seed execution completed! {}/{} files processed.",
        summary.succeeded_count(),
        total
    );

    if summary.is_healthy(total) {
        println!(
            "{}",
            "✓ Database should now be populated with comprehensive content.".green()
        );
    } else {
        println!(
            "{}",
            "⚠ Some files failed. Please check the errors above.".yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    use seedrun_core::config::{ENV_ANON_KEY, ENV_URL};

    /// Client bound to a port nothing listens on; every call errors.
    fn unreachable_client() -> SeedClient {
        let config = Config {
            url: "http://localhost:1".to_string(),
            anon_key: "test-key".to_string(),
        };
        SeedClient::new(&config).expect("Failed to create client")
    }

    #[tokio::test]
    async fn test_unreadable_file_is_a_read_failure() {
        let client = unreachable_client();

        let file = SeedFile {
            path: PathBuf::from("/nonexistent/seed_missing.sql"),
            name: "seed_missing.sql".to_string(),
        };

        // No statements are attempted; the failure is recorded, not raised.
        let outcome = execute_file(&client, &file).await;
        assert!(outcome.read_error.is_some());
        assert!(!outcome.is_success());
        assert_eq!(outcome.executed, 0);
        assert_eq!(outcome.errors, 0);
    }

    #[tokio::test]
    async fn test_every_statement_failing_counts_every_statement() {
        let temp = tempdir().expect("Failed to create temp dir");
        let path = temp.path().join("seed_bad.sql");
        std::fs::write(
            &path,
            "INSERT INTO t VALUES (1);\nINSERT INTO t VALUES (2);\nINSERT INTO t VALUES (3);",
        )
        .expect("Failed to write seed file");

        let client = unreachable_client();
        let file = SeedFile { path, name: "seed_bad.sql".to_string() };

        let outcome = execute_file(&client, &file).await;

        // All three statements are attempted; each failure is counted and
        // the file is classified failed with error count = statement count.
        assert_eq!(outcome.errors, 3);
        assert_eq!(outcome.executed, 0);
        assert!(outcome.read_error.is_none());
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_config_error_message_survives_propagation() {
        let err = Config::from_values(None, None).unwrap_err();

        // The error is reported once, at propagation out of main; the
        // message the user sees must still name both required variables.
        let propagated = anyhow::Error::from(err);
        let msg = propagated.to_string();
        assert!(msg.contains(ENV_URL));
        assert!(msg.contains(ENV_ANON_KEY));
    }
}
