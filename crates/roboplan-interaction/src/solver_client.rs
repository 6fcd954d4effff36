//! SolverClient - shared HTTP plumbing for the logic solver's REST endpoints.
//!
//! Every solver endpoint is a GET with query parameters answering JSON.
//! A `400` carries `{"error": "..."}` and becomes `InvalidInput`; anything
//! else that is not a success becomes a `Gateway` error.

use reqwest::{Client, StatusCode};
use roboplan_core::config::SolverConfig;
use roboplan_core::error::{PlanError, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize)]
struct SolverErrorBody {
    error: String,
}

/// HTTP client bound to one solver deployment.
#[derive(Clone)]
pub struct SolverClient {
    client: Client,
    config: SolverConfig,
}

impl SolverClient {
    /// Creates a client for the given settings.
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PlanError::config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Issues a GET and decodes the JSON answer.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!(target: "solver", "[SolverClient] {} GET {} {:?}", operation, url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.transport_error(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(target: "solver", "[SolverClient] {} answered {}: {}", operation, status, body);
            return Err(interpret_error(status, &body));
        }

        response.json::<T>().await.map_err(|e| {
            PlanError::gateway(format!("Failed to parse solver {} response: {}", operation, e))
        })
    }

    fn transport_error(&self, operation: &str, err: reqwest::Error) -> PlanError {
        if err.is_timeout() {
            PlanError::Timeout {
                operation: operation.to_string(),
                after: self.config.timeout(),
            }
        } else {
            PlanError::gateway(format!("Solver {} request failed: {}", operation, err))
        }
    }
}

/// Maps a non-success solver answer to the error taxonomy.
pub fn interpret_error(status: StatusCode, body: &str) -> PlanError {
    if status == StatusCode::BAD_REQUEST {
        let message = serde_json::from_str::<SolverErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.to_string());
        return PlanError::invalid_input(message);
    }
    PlanError::gateway(format!("Solver error ({}): {}", status, body))
}
