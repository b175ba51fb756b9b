//! Configuration management for seedrun.
//!
//! Credentials are read once at startup from the process environment,
//! with a `.env` file loaded first if one is present. There is no config
//! file and no defaults: both values are required, and a missing value
//! is fatal to the whole run.

use serde::{Deserialize, Serialize};

use crate::error::{SeedError, SeedResult};

/// Environment variable holding the Supabase project URL.
pub const ENV_URL: &str = "VITE_SUPABASE_URL";

/// Environment variable holding the Supabase anon key.
pub const ENV_ANON_KEY: &str = "VITE_SUPABASE_ANON_KEY";

/// Supabase connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Supabase project (e.g. `https://xyz.supabase.co`).
    pub url: String,

    /// Anon key used for both the `apikey` header and bearer auth.
    pub anon_key: String,
}

impl Config {
    /// Load configuration from the environment (after `.env`, if present).
    pub fn from_env() -> SeedResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_values(
            std::env::var(ENV_URL).ok(),
            std::env::var(ENV_ANON_KEY).ok(),
        )
    }

    /// Validate raw values into a config. Empty strings count as missing.
    pub fn from_values(url: Option<String>, anon_key: Option<String>) -> SeedResult<Self> {
        let url = url.filter(|v| !v.trim().is_empty());
        let anon_key = anon_key.filter(|v| !v.trim().is_empty());

        match (url, anon_key) {
            (Some(url), Some(anon_key)) => Ok(Self {
                url: url.trim_end_matches('/').to_string(),
                anon_key,
            }),
            _ => Err(SeedError::Config(format!(
                "Missing Supabase configuration. Required: {} and {}",
                ENV_URL, ENV_ANON_KEY
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_ok() {
        let config = Config::from_values(
            Some("https://xyz.supabase.co".to_string()),
            Some("anon-key".to_string()),
        )
        .expect("Failed to build config");

        assert_eq!(config.url, "https://xyz.supabase.co");
        assert_eq!(config.anon_key, "anon-key");
    }

    #[test]
    fn test_from_values_trims_trailing_slash() {
        let config = Config::from_values(
            Some("https://xyz.supabase.co/".to_string()),
            Some("anon-key".to_string()),
        )
        .expect("Failed to build config");

        assert_eq!(config.url, "https://xyz.supabase.co");
    }

    #[test]
    fn test_from_values_missing_url() {
        let err = Config::from_values(None, Some("anon-key".to_string())).unwrap_err();
        let msg = err.to_string();

        // The message must name both required variables
        assert!(msg.contains(ENV_URL));
        assert!(msg.contains(ENV_ANON_KEY));
    }

    #[test]
    fn test_from_values_empty_key_counts_as_missing() {
        let err =
            Config::from_values(Some("https://xyz.supabase.co".to_string()), Some("  ".to_string()))
                .unwrap_err();

        assert!(matches!(err, SeedError::Config(_)));
    }
}
