//! SolverPathGateway - `PathGateway` over the solver's lowest-cost path endpoint.

use crate::solver_client::SolverClient;
use async_trait::async_trait;
use roboplan_core::error::Result;
use roboplan_core::geometry::SolverCell;
use roboplan_core::solver::{PathGateway, PathResult};

pub struct SolverPathGateway {
    client: SolverClient,
}

impl SolverPathGateway {
    pub fn new(client: SolverClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PathGateway for SolverPathGateway {
    async fn get_lowest_cost_path(
        &self,
        origin_floor_id: &str,
        origin_cell: SolverCell,
        destination_floor_id: &str,
        destination_cell: SolverCell,
    ) -> Result<PathResult> {
        let config = self.client.config();
        let params = &config.query_params;
        let query = [
            (params.origin_floor.as_str(), origin_floor_id.to_string()),
            (params.origin_cell.as_str(), origin_cell.to_string()),
            (params.destination_floor.as_str(), destination_floor_id.to_string()),
            (params.destination_cell.as_str(), destination_cell.to_string()),
        ];

        let result: PathResult = self
            .client
            .get_json("lowest-cost-path", &config.path_url(), &query)
            .await?;

        tracing::debug!(
            target: "solver",
            "[SolverPathGateway] {} tokens, cost {}",
            result.path.len(),
            result.cost
        );
        Ok(result)
    }
}
