//! Facility snapshot DTOs.
//!
//! A snapshot is a flat TOML document: entities reference each other by id,
//! and `FacilitySnapshotDTO::into_domain` resolves those references into the
//! nested domain objects.

mod facility;
mod task;

pub use facility::{BuildingDTO, ElevatorDTO, FloorDTO, RobisepDTO, RobisepTypeDTO, RoomDTO};
pub use task::{PickUpAndDeliveryTaskDTO, SurveillanceTaskDTO};

use roboplan_core::error::{PlanError, Result};
use roboplan_core::facility::{Building, Elevator, Floor, Room};
use roboplan_core::robisep::{Robisep, RobisepType};
use roboplan_core::task::{PickUpAndDeliveryTask, SurveillanceTask, Task};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Root of a facility snapshot file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilitySnapshotDTO {
    #[serde(default, rename = "building")]
    pub buildings: Vec<BuildingDTO>,
    #[serde(default, rename = "floor")]
    pub floors: Vec<FloorDTO>,
    #[serde(default, rename = "room")]
    pub rooms: Vec<RoomDTO>,
    #[serde(default, rename = "elevator")]
    pub elevators: Vec<ElevatorDTO>,
    #[serde(default, rename = "robisep_type")]
    pub robisep_types: Vec<RobisepTypeDTO>,
    #[serde(default, rename = "robisep")]
    pub robiseps: Vec<RobisepDTO>,
    #[serde(default, rename = "surveillance_task")]
    pub surveillance_tasks: Vec<SurveillanceTaskDTO>,
    #[serde(default, rename = "pick_up_and_delivery_task")]
    pub pick_up_and_delivery_tasks: Vec<PickUpAndDeliveryTaskDTO>,
}

/// A snapshot with every reference resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facility {
    pub buildings: Vec<Building>,
    pub floors: Vec<Floor>,
    pub rooms: Vec<Room>,
    pub elevators: Vec<Elevator>,
    pub robisep_types: Vec<RobisepType>,
    pub robiseps: Vec<Robisep>,
    pub surveillance_tasks: Vec<SurveillanceTask>,
    pub pick_up_and_delivery_tasks: Vec<PickUpAndDeliveryTask>,
}

/// Id-indexed views used while resolving references.
pub(crate) struct Lookup<'a> {
    pub rooms: HashMap<&'a str, &'a Room>,
    pub robisep_types: HashMap<&'a str, &'a RobisepType>,
    pub robiseps: HashMap<&'a str, &'a Robisep>,
}

impl Lookup<'_> {
    pub fn room(&self, id: &str) -> Result<Room> {
        self.rooms
            .get(id)
            .map(|r| (*r).clone())
            .ok_or_else(|| PlanError::not_found("room", format!("The room '{}' does not exist.", id)))
    }

    pub fn robisep_type(&self, id: &str) -> Result<RobisepType> {
        self.robisep_types
            .get(id)
            .map(|t| (*t).clone())
            .ok_or_else(|| {
                PlanError::not_found("robisep_type", format!("The robisep type '{}' does not exist.", id))
            })
    }

    pub fn robisep(&self, id: &str) -> Result<Robisep> {
        self.robiseps
            .get(id)
            .map(|r| (*r).clone())
            .ok_or_else(|| PlanError::not_found("robisep", format!("The robisep '{}' does not exist.", id)))
    }
}

impl FacilitySnapshotDTO {
    /// Resolves references and checks the invariants grid compilation and
    /// sequencing rely on.
    pub fn into_domain(self) -> Result<Facility> {
        let buildings: Vec<Building> = self.buildings.into_iter().map(Into::into).collect();
        let floors: Vec<Floor> = self.floors.into_iter().map(Into::into).collect();
        let rooms: Vec<Room> = self.rooms.into_iter().map(Into::into).collect();
        let elevators: Vec<Elevator> = self.elevators.into_iter().map(Into::into).collect();
        let robisep_types: Vec<RobisepType> =
            self.robisep_types.into_iter().map(Into::into).collect();

        let buildings_by_id: HashMap<&str, &Building> =
            buildings.iter().map(|b| (b.id.as_str(), b)).collect();
        let floors_by_id: HashMap<&str, &Floor> = floors.iter().map(|f| (f.id.as_str(), f)).collect();

        for floor in &floors {
            if !buildings_by_id.contains_key(floor.building_id.as_str()) {
                return Err(PlanError::not_found(
                    "building",
                    format!("The building '{}' of floor '{}' does not exist.", floor.building_id, floor.id),
                ));
            }
        }

        for room in &rooms {
            let building = floor_building(&floors_by_id, &buildings_by_id, &room.floor_id)?;
            if !room.fits_within(&building.dimensions) {
                return Err(PlanError::invalid_input(format!(
                    "The room '{}' does not fit within building '{}'.",
                    room.name, building.code
                )));
            }
        }

        for elevator in &elevators {
            let building = floor_building(&floors_by_id, &buildings_by_id, &elevator.floor_id)?;
            if !building.dimensions.contains(elevator.position) {
                return Err(PlanError::invalid_input(format!(
                    "The elevator '{}' lies outside building '{}'.",
                    elevator.id, building.code
                )));
            }
        }

        let types_by_id: HashMap<&str, &RobisepType> =
            robisep_types.iter().map(|t| (t.id.as_str(), t)).collect();
        let robiseps = self
            .robiseps
            .into_iter()
            .map(|dto| dto.into_domain(&types_by_id))
            .collect::<Result<Vec<_>>>()?;

        let lookup = Lookup {
            rooms: rooms.iter().map(|r| (r.id.as_str(), r)).collect(),
            robisep_types: types_by_id,
            robiseps: robiseps.iter().map(|r| (r.id.as_str(), r)).collect(),
        };

        let surveillance_tasks = self
            .surveillance_tasks
            .into_iter()
            .map(|dto| dto.into_domain(&lookup))
            .collect::<Result<Vec<_>>>()?;
        let pick_up_and_delivery_tasks = self
            .pick_up_and_delivery_tasks
            .into_iter()
            .map(|dto| dto.into_domain(&lookup))
            .collect::<Result<Vec<_>>>()?;

        let mut codes = HashSet::new();
        let all_codes = surveillance_tasks
            .iter()
            .map(|t| t.task_code())
            .chain(pick_up_and_delivery_tasks.iter().map(|t| t.task_code()));
        for code in all_codes {
            if !codes.insert(code) {
                return Err(PlanError::invalid_input(format!(
                    "The task code {} is used more than once.",
                    code
                )));
            }
        }

        Ok(Facility {
            buildings,
            floors,
            rooms,
            elevators,
            robisep_types,
            robiseps,
            surveillance_tasks,
            pick_up_and_delivery_tasks,
        })
    }
}

fn floor_building<'a>(
    floors: &HashMap<&str, &'a Floor>,
    buildings: &HashMap<&str, &'a Building>,
    floor_id: &str,
) -> Result<&'a Building> {
    let floor = floors
        .get(floor_id)
        .ok_or_else(|| PlanError::not_found("floor", format!("The floor '{}' does not exist.", floor_id)))?;
    buildings.get(floor.building_id.as_str()).copied().ok_or_else(|| {
        PlanError::not_found(
            "building",
            format!("The building '{}' does not exist.", floor.building_id),
        )
    })
}

impl From<&Facility> for FacilitySnapshotDTO {
    fn from(facility: &Facility) -> Self {
        Self {
            buildings: facility.buildings.iter().map(Into::into).collect(),
            floors: facility.floors.iter().map(Into::into).collect(),
            rooms: facility.rooms.iter().map(Into::into).collect(),
            elevators: facility.elevators.iter().map(Into::into).collect(),
            robisep_types: facility.robisep_types.iter().map(Into::into).collect(),
            robiseps: facility.robiseps.iter().map(Into::into).collect(),
            surveillance_tasks: facility.surveillance_tasks.iter().map(Into::into).collect(),
            pick_up_and_delivery_tasks: facility
                .pick_up_and_delivery_tasks
                .iter()
                .map(Into::into)
                .collect(),
        }
    }
}
