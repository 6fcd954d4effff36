//! Building, floor, room, elevator and robot DTOs.

use roboplan_core::error::{PlanError, Result};
use roboplan_core::facility::{Building, Dimensions, Elevator, Floor, Room};
use roboplan_core::geometry::{Orientation, Position};
use roboplan_core::robisep::{Robisep, RobisepType};
use roboplan_core::task::TaskType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingDTO {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub name: String,
    pub length: u32,
    pub width: u32,
}

impl From<BuildingDTO> for Building {
    fn from(dto: BuildingDTO) -> Self {
        Building {
            id: dto.id,
            code: dto.code,
            name: dto.name,
            dimensions: Dimensions::new(dto.length, dto.width),
        }
    }
}

impl From<&Building> for BuildingDTO {
    fn from(building: &Building) -> Self {
        BuildingDTO {
            id: building.id.clone(),
            code: building.code.clone(),
            name: building.name.clone(),
            length: building.dimensions.length,
            width: building.dimensions.width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorDTO {
    pub id: String,
    pub building_id: String,
    pub floor_number: i32,
}

impl From<FloorDTO> for Floor {
    fn from(dto: FloorDTO) -> Self {
        Floor {
            id: dto.id,
            building_id: dto.building_id,
            floor_number: dto.floor_number,
        }
    }
}

impl From<&Floor> for FloorDTO {
    fn from(floor: &Floor) -> Self {
        FloorDTO {
            id: floor.id.clone(),
            building_id: floor.building_id.clone(),
            floor_number: floor.floor_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDTO {
    pub id: String,
    pub floor_id: String,
    pub name: String,
    pub initial_position: Position,
    pub final_position: Position,
    pub door_position: Position,
    pub door_orientation: Orientation,
}

impl From<RoomDTO> for Room {
    fn from(dto: RoomDTO) -> Self {
        Room {
            id: dto.id,
            floor_id: dto.floor_id,
            name: dto.name,
            initial_position: dto.initial_position,
            final_position: dto.final_position,
            door_position: dto.door_position,
            door_orientation: dto.door_orientation,
        }
    }
}

impl From<&Room> for RoomDTO {
    fn from(room: &Room) -> Self {
        RoomDTO {
            id: room.id.clone(),
            floor_id: room.floor_id.clone(),
            name: room.name.clone(),
            initial_position: room.initial_position,
            final_position: room.final_position,
            door_position: room.door_position,
            door_orientation: room.door_orientation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorDTO {
    pub id: String,
    pub floor_id: String,
    pub position: Position,
    pub orientation: Orientation,
}

impl From<ElevatorDTO> for Elevator {
    fn from(dto: ElevatorDTO) -> Self {
        Elevator {
            id: dto.id,
            floor_id: dto.floor_id,
            position: dto.position,
            orientation: dto.orientation,
        }
    }
}

impl From<&Elevator> for ElevatorDTO {
    fn from(elevator: &Elevator) -> Self {
        ElevatorDTO {
            id: elevator.id.clone(),
            floor_id: elevator.floor_id.clone(),
            position: elevator.position,
            orientation: elevator.orientation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobisepTypeDTO {
    pub id: String,
    pub designation: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    pub task_types: Vec<TaskType>,
}

impl From<RobisepTypeDTO> for RobisepType {
    fn from(dto: RobisepTypeDTO) -> Self {
        RobisepType {
            id: dto.id,
            designation: dto.designation,
            brand: dto.brand,
            model: dto.model,
            task_types: dto.task_types,
        }
    }
}

impl From<&RobisepType> for RobisepTypeDTO {
    fn from(robisep_type: &RobisepType) -> Self {
        RobisepTypeDTO {
            id: robisep_type.id.clone(),
            designation: robisep_type.designation.clone(),
            brand: robisep_type.brand.clone(),
            model: robisep_type.model.clone(),
            task_types: robisep_type.task_types.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobisepDTO {
    pub id: String,
    pub nickname: String,
    #[serde(default)]
    pub serial_number: String,
    pub code: String,
    pub robisep_type_id: String,
    pub room_id: String,
}

impl RobisepDTO {
    pub(crate) fn into_domain(self, types: &HashMap<&str, &RobisepType>) -> Result<Robisep> {
        let robisep_type = types
            .get(self.robisep_type_id.as_str())
            .map(|t| (*t).clone())
            .ok_or_else(|| {
                PlanError::not_found(
                    "robisep_type",
                    format!("The robisep type '{}' does not exist.", self.robisep_type_id),
                )
            })?;

        Ok(Robisep {
            id: self.id,
            nickname: self.nickname,
            serial_number: self.serial_number,
            code: self.code,
            robisep_type,
            room_id: self.room_id,
        })
    }
}

impl From<&Robisep> for RobisepDTO {
    fn from(robisep: &Robisep) -> Self {
        RobisepDTO {
            id: robisep.id.clone(),
            nickname: robisep.nickname.clone(),
            serial_number: robisep.serial_number.clone(),
            code: robisep.code.clone(),
            robisep_type_id: robisep.robisep_type.id.clone(),
            room_id: robisep.room_id.clone(),
        }
    }
}
