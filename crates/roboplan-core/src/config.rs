//! Solver connection settings.

use crate::error::{PlanError, Result};
use crate::geometry::CoordinateTransformer;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wire names of the solver's query parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QueryParams {
    pub origin_floor: String,
    pub origin_cell: String,
    pub destination_floor: String,
    pub destination_cell: String,
    pub robisep_id: String,
    pub algorithm: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            origin_floor: "originFloor".to_string(),
            origin_cell: "originCel".to_string(),
            destination_floor: "destinationFloor".to_string(),
            destination_cell: "destinationCel".to_string(),
            robisep_id: "robisepId".to_string(),
            algorithm: "algorithm".to_string(),
        }
    }
}

/// Everything the planning services need to reach the solver.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// Scheme and authority, e.g. `http://localhost:5000`.
    pub host: String,
    pub path_prefix: String,
    pub path_endpoint: String,
    pub sequence_endpoint: String,
    pub timeout_secs: u64,
    /// Difference between domain (0-indexed) and solver cell indices.
    pub coordinate_offset: i64,
    pub query_params: QueryParams,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:5000".to_string(),
            path_prefix: "/api".to_string(),
            path_endpoint: "/lowest-cost-path".to_string(),
            sequence_endpoint: "/task-sequence".to_string(),
            timeout_secs: 30,
            coordinate_offset: CoordinateTransformer::DEFAULT_OFFSET,
            query_params: QueryParams::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(PlanError::config("solver host must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(PlanError::config("solver timeout must be greater than zero"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn transformer(&self) -> CoordinateTransformer {
        CoordinateTransformer::new(self.coordinate_offset)
    }

    pub fn path_url(&self) -> String {
        self.url_for(&self.path_endpoint)
    }

    pub fn sequence_url(&self) -> String {
        self.url_for(&self.sequence_endpoint)
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}{}{}",
            self.host.trim_end_matches('/'),
            self.path_prefix,
            endpoint
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SolverConfig::default();
        config.validate().unwrap();
        assert_eq!(config.path_url(), "http://localhost:5000/api/lowest-cost-path");
        assert_eq!(config.sequence_url(), "http://localhost:5000/api/task-sequence");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SolverConfig = toml::from_str(
            r#"
host = "http://solver:8080/"
timeout_secs = 5

[query_params]
algorithm = "alg"
"#,
        )
        .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.path_url(), "http://solver:8080/api/lowest-cost-path");
        assert_eq!(config.query_params.algorithm, "alg");
        assert_eq!(config.query_params.robisep_id, "robisepId");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SolverConfig::default();
        config.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(PlanError::Config(_))));

        let mut config = SolverConfig::default();
        config.host = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
