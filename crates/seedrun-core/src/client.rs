//! Supabase REST client.
//!
//! The tool consumes exactly one remote procedure: the `exec_sql` RPC
//! exposed through PostgREST, which takes a literal SQL string and either
//! succeeds or raises. Statements are submitted one at a time; there is
//! no batching and no transaction around a file.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{SeedError, SeedResult};

/// Client handle bound to a Supabase project URL and anon key.
pub struct SeedClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

#[derive(Debug, Serialize)]
struct ExecSqlRequest<'a> {
    sql: &'a str,
}

impl SeedClient {
    /// Create a new client from config.
    pub fn new(config: &Config) -> SeedResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SeedError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        })
    }

    /// Base URL this client is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with the Supabase auth headers.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Execute a single SQL statement via the `exec_sql` RPC.
    ///
    /// A non-2xx response is surfaced as an API error carrying the status
    /// and whatever body PostgREST returned.
    pub async fn exec_sql(&self, sql: &str) -> SeedResult<()> {
        debug!(bytes = sql.len(), "submitting statement");

        let response = self
            .request(reqwest::Method::POST, "/rest/v1/rpc/exec_sql")
            .json(&ExecSqlRequest { sql })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SeedError::Api(format!("{}: {}", status, body.trim())));
        }

        Ok(())
    }

    /// Check whether the REST endpoint is reachable with our key.
    pub async fn health_check(&self) -> bool {
        let response = self.request(reqwest::Method::GET, "/rest/v1/").send().await;

        response.map(|r| r.status().is_success()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            url: "https://xyz.supabase.co".to_string(),
            anon_key: "anon-key".to_string(),
        }
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = Config {
            url: "https://xyz.supabase.co/".to_string(),
            ..test_config()
        };
        let client = SeedClient::new(&config).expect("Failed to create client");

        assert_eq!(client.base_url(), "https://xyz.supabase.co");
    }

    #[test]
    fn test_exec_sql_request_body_shape() {
        let body = serde_json::to_value(ExecSqlRequest { sql: "SELECT 1" })
            .expect("Failed to serialize");

        assert_eq!(body, serde_json::json!({ "sql": "SELECT 1" }));
    }
}
