//! PathService - resolves the cheapest route between two rooms.

use roboplan_core::error::{PlanError, Result};
use roboplan_core::facility::{BuildingRepository, FloorRepository, RoomRepository};
use roboplan_core::geometry::CoordinateTransformer;
use roboplan_core::solver::{PathGateway, RouteToken};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// A human-readable route and its cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSummary {
    /// Steps joined with `" - "`, e.g. `cell(2,3) - elevator(A_1 > A_2)`.
    pub path: String,
    /// Cost with two decimals.
    pub cost: String,
}

pub struct PathService {
    floor_repository: Arc<dyn FloorRepository>,
    room_repository: Arc<dyn RoomRepository>,
    building_repository: Arc<dyn BuildingRepository>,
    path_gateway: Arc<dyn PathGateway>,
    transformer: CoordinateTransformer,
    timeout: Duration,
}

impl PathService {
    pub fn new(
        floor_repository: Arc<dyn FloorRepository>,
        room_repository: Arc<dyn RoomRepository>,
        building_repository: Arc<dyn BuildingRepository>,
        path_gateway: Arc<dyn PathGateway>,
        transformer: CoordinateTransformer,
        timeout: Duration,
    ) -> Self {
        Self {
            floor_repository,
            room_repository,
            building_repository,
            path_gateway,
            transformer,
            timeout,
        }
    }

    /// Asks the solver for the cheapest route from the origin room's door to
    /// the destination room's door.
    ///
    /// Entities are looked up in a fixed order and the first missing one
    /// ends the call.
    ///
    /// # Errors
    ///
    /// - `EntityDoesNotExist` for an unknown floor or room
    /// - `InvalidInput` when the solver rejects the query
    /// - `Gateway` / `Timeout` when the solver is unreachable or slow
    pub async fn resolve_path(
        &self,
        origin_floor_id: &str,
        origin_room_id: &str,
        destination_floor_id: &str,
        destination_room_id: &str,
    ) -> Result<Vec<PathSummary>> {
        self.floor_repository
            .find_by_domain_id(origin_floor_id)
            .await?
            .ok_or_else(|| PlanError::not_found("Floor", "The origin floor does not exist."))?;
        self.floor_repository
            .find_by_domain_id(destination_floor_id)
            .await?
            .ok_or_else(|| PlanError::not_found("Floor", "The destination floor does not exist."))?;
        let origin_room = self
            .room_repository
            .find_by_domain_id(origin_room_id)
            .await?
            .ok_or_else(|| PlanError::not_found("Room", "The origin room does not exist."))?;
        let destination_room = self
            .room_repository
            .find_by_domain_id(destination_room_id)
            .await?
            .ok_or_else(|| PlanError::not_found("Room", "The destination room does not exist."))?;

        let origin_cell = self
            .transformer
            .threshold_cell(origin_room.door_position, origin_room.door_orientation);
        let destination_cell = self
            .transformer
            .threshold_cell(destination_room.door_position, destination_room.door_orientation);

        tracing::info!(
            "[PathService] Resolving {}@{} -> {}@{}",
            origin_cell,
            origin_floor_id,
            destination_cell,
            destination_floor_id
        );

        let call = self.path_gateway.get_lowest_cost_path(
            origin_floor_id,
            origin_cell,
            destination_floor_id,
            destination_cell,
        );
        let result = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| PlanError::Timeout {
                operation: "lowest-cost-path".to_string(),
                after: self.timeout,
            })??;

        let mut steps = Vec::with_capacity(result.path.len());
        for raw in &result.path {
            match raw.parse::<RouteToken>() {
                Ok(token) => steps.push(self.render(token).await?),
                Err(e) => tracing::debug!("[PathService] Dropping route token: {}", e),
            }
        }

        Ok(vec![PathSummary {
            path: steps.join(" - "),
            cost: format!("{:.2}", result.cost),
        }])
    }

    async fn render(&self, token: RouteToken) -> Result<String> {
        Ok(match token {
            RouteToken::Cell(coordinates) => format!("cell({})", coordinates),
            RouteToken::Corridor { from, to } => format!(
                "passage({} > {})",
                self.floor_label(&from).await?,
                self.floor_label(&to).await?
            ),
            RouteToken::Elevator { from, to } => format!(
                "elevator({} > {})",
                self.floor_label(&from).await?,
                self.floor_label(&to).await?
            ),
        })
    }

    async fn floor_label(&self, floor_id: &str) -> Result<String> {
        let Some(floor) = self.floor_repository.find_by_domain_id(floor_id).await? else {
            tracing::warn!("[PathService] Route mentions unknown floor '{}'", floor_id);
            return Ok(floor_id.to_string());
        };
        match self
            .building_repository
            .find_by_domain_id(&floor.building_id)
            .await?
        {
            Some(building) => Ok(floor.label(&building)),
            None => {
                tracing::warn!(
                    "[PathService] Floor '{}' references unknown building '{}'",
                    floor_id,
                    floor.building_id
                );
                Ok(floor_id.to_string())
            }
        }
    }
}
