//! Diagnostics command.

use anyhow::Result;
use colored::Colorize;

use seedrun_core::config::{Config, ENV_ANON_KEY, ENV_URL};
use seedrun_core::SeedClient;

pub async fn execute() -> Result<()> {
    println!("{}", "seedrun Doctor".cyan().bold());
    println!("{}", "─".repeat(50));
    println!();

    let mut issues = Vec::new();

    // Check configuration
    print!("  Configuration: ");
    let config = match Config::from_env() {
        Ok(config) => {
            println!("{}", "✓ loaded".green());
            Some(config)
        }
        Err(e) => {
            println!("{}", format!("✗ {}", e).red());
            issues.push(format!("Set {} and {} (a .env file works)", ENV_URL, ENV_ANON_KEY));
            None
        }
    };

    // Check endpoint reachability
    if let Some(config) = config {
        print!("  API ({}): ", config.url);
        match SeedClient::new(&config) {
            Ok(client) => {
                if client.health_check().await {
                    println!("{}", "✓ reachable".green());
                } else {
                    println!("{}", "✗ unreachable".red());
                    issues.push("Cannot reach the Supabase REST endpoint".to_string());
                }
            }
            Err(e) => {
                println!("{}", format!("✗ {}", e).red());
                issues.push("Failed to construct the HTTP client".to_string());
            }
        }
    }

    // Summary
    println!();
    if issues.is_empty() {
        println!("{}", "✓ All checks passed".green().bold());
    } else {
        println!("{}", format!("✗ {} issue(s) found:", issues.len()).red().bold());
        for issue in &issues {
            println!("  • {}", issue);
        }
    }

    Ok(())
}
