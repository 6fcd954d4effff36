//! SolverTaskGateway - `TaskGateway` over the solver's task sequencing endpoint.

use crate::solver_client::SolverClient;
use async_trait::async_trait;
use roboplan_core::error::Result;
use roboplan_core::solver::{SequenceAlgorithm, SolverSequence, TaskGateway};

pub struct SolverTaskGateway {
    client: SolverClient,
}

impl SolverTaskGateway {
    pub fn new(client: SolverClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaskGateway for SolverTaskGateway {
    async fn get_task_sequence_by_robisep_id(
        &self,
        robisep_id: &str,
        algorithm: SequenceAlgorithm,
    ) -> Result<SolverSequence> {
        let config = self.client.config();
        let params = &config.query_params;
        let query = [
            (params.robisep_id.as_str(), robisep_id.to_string()),
            (params.algorithm.as_str(), algorithm.to_string()),
        ];

        self.client
            .get_json("task-sequence", &config.sequence_url(), &query)
            .await
    }
}
