//! FloorPlanService - compiles a floor into the solver's occupancy facts.
//!
//! A floor is rasterised over its building's footprint: room interiors are
//! blocked, the cell in front of every door is opened, and each elevator
//! blocks its own cell while opening its threshold.

use roboplan_core::error::{PlanError, Result};
use roboplan_core::facility::{
    BuildingRepository, ElevatorRepository, FloorRepository, RoomRepository,
};
use roboplan_core::geometry::{CoordinateTransformer, Position, SolverCell};
use roboplan_core::grid::{BLOCKED, FREE, FloorPlan, OccupancyGrid};
use std::sync::Arc;

pub struct FloorPlanService {
    floor_repository: Arc<dyn FloorRepository>,
    building_repository: Arc<dyn BuildingRepository>,
    room_repository: Arc<dyn RoomRepository>,
    elevator_repository: Arc<dyn ElevatorRepository>,
    transformer: CoordinateTransformer,
}

impl FloorPlanService {
    pub fn new(
        floor_repository: Arc<dyn FloorRepository>,
        building_repository: Arc<dyn BuildingRepository>,
        room_repository: Arc<dyn RoomRepository>,
        elevator_repository: Arc<dyn ElevatorRepository>,
        transformer: CoordinateTransformer,
    ) -> Self {
        Self {
            floor_repository,
            building_repository,
            room_repository,
            elevator_repository,
            transformer,
        }
    }

    /// Compiles the floor into `m(floorId, column, row, value)` facts.
    ///
    /// # Errors
    ///
    /// - `EntityDoesNotExist` when the floor or its building is unknown
    /// - `DatabaseError` when a lookup fails
    pub async fn compile_floor_plan(&self, floor_id: &str) -> Result<FloorPlan> {
        let grid = self.compile_grid(floor_id).await?;
        tracing::info!(
            "[FloorPlanService] Compiled floor '{}' ({}x{})",
            floor_id,
            grid.height(),
            grid.width()
        );
        Ok(FloorPlan::from_grid(floor_id, &grid, self.transformer.offset()))
    }

    /// Builds the occupancy grid without encoding it.
    pub async fn compile_grid(&self, floor_id: &str) -> Result<OccupancyGrid> {
        self.rasterise(floor_id)
            .await
            .map_err(PlanError::into_boundary)
    }

    async fn rasterise(&self, floor_id: &str) -> Result<OccupancyGrid> {
        let floor = self
            .floor_repository
            .find_by_domain_id(floor_id)
            .await?
            .ok_or_else(|| PlanError::not_found("Floor", "The floor does not exist."))?;
        let building = self
            .building_repository
            .find_by_domain_id(&floor.building_id)
            .await?
            .ok_or_else(|| PlanError::not_found("Building", "The building does not exist."))?;

        let rooms = self.room_repository.find_by_floor_id(floor_id).await?;
        let elevators = self.elevator_repository.find_all_by_floor_id(floor_id).await?;

        let mut grid = OccupancyGrid::new(building.dimensions);

        for x in 0..building.dimensions.length {
            for y in 0..building.dimensions.width {
                let position = Position::new(x, y);
                if rooms.iter().any(|room| room.contains(position)) {
                    grid.set(position, BLOCKED);
                }
            }
        }

        for room in &rooms {
            let threshold = self
                .transformer
                .threshold_cell(room.door_position, room.door_orientation);
            self.open(&mut grid, threshold, "room", &room.id);
        }

        for elevator in &elevators {
            if !grid.set(elevator.position, BLOCKED) {
                tracing::warn!(
                    "[FloorPlanService] Elevator '{}' lies outside floor '{}', skipped",
                    elevator.id,
                    floor_id
                );
            }
            let threshold = self
                .transformer
                .threshold_cell(elevator.position, elevator.orientation);
            self.open(&mut grid, threshold, "elevator", &elevator.id);
        }

        tracing::debug!(
            "[FloorPlanService] Floor '{}': {} rooms, {} elevators",
            floor_id,
            rooms.len(),
            elevators.len()
        );
        Ok(grid)
    }

    fn open(&self, grid: &mut OccupancyGrid, threshold: SolverCell, kind: &str, id: &str) {
        if !grid.set_solver_cell(threshold, self.transformer.offset(), FREE) {
            tracing::warn!(
                "[FloorPlanService] Threshold {} of {} '{}' falls outside the grid, skipped",
                threshold,
                kind,
                id
            );
        }
    }
}
