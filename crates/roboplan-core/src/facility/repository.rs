//! Facility repository traits.
//!
//! Lookup interfaces for the spatial entities. Storage is a collaborator
//! concern; the planning services only ever read through these traits.

use super::model::{Building, Elevator, Floor, Room};
use crate::error::Result;
use async_trait::async_trait;

/// Read access to buildings.
#[async_trait]
pub trait BuildingRepository: Send + Sync {
    /// Finds a building by its domain id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Building))`: Building found
    /// - `Ok(None)`: Building not found
    /// - `Err(PlanError)`: Error occurred during retrieval
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Building>>;
}

/// Read access to floors.
#[async_trait]
pub trait FloorRepository: Send + Sync {
    /// Finds a floor by its domain id.
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Floor>>;
}

/// Read access to rooms.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Finds a room by its domain id.
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Room>>;

    /// Lists the rooms on a floor.
    ///
    /// Implementations must return rooms in a stable order so compiled
    /// floor plans are reproducible.
    async fn find_by_floor_id(&self, floor_id: &str) -> Result<Vec<Room>>;
}

/// Read access to elevators.
#[async_trait]
pub trait ElevatorRepository: Send + Sync {
    /// Finds an elevator by its domain id.
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Elevator>>;

    /// Lists the elevators that open onto a floor, in a stable order.
    async fn find_all_by_floor_id(&self, floor_id: &str) -> Result<Vec<Elevator>>;
}
