//! Facility domain model.

use crate::geometry::{Orientation, Position};
use serde::{Deserialize, Serialize};

/// Rectangular footprint of a building, in cells.
///
/// `length` runs along the domain x-axis (grid rows), `width` along the
/// y-axis (grid columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: u32,
    pub width: u32,
}

impl Dimensions {
    pub fn new(length: u32, width: u32) -> Self {
        Self { length, width }
    }

    /// Whether a 0-indexed position lies inside the footprint.
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.length && position.y < self.width
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    /// Short code used in floor labels, e.g. `B` in `B_2`.
    pub code: String,
    pub name: String,
    pub dimensions: Dimensions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: String,
    pub building_id: String,
    pub floor_number: i32,
}

impl Floor {
    /// Human-readable label `"{buildingCode}_{floorNumber}"`.
    pub fn label(&self, building: &Building) -> String {
        format!("{}_{}", building.code, self.floor_number)
    }
}

/// A room on a floor.
///
/// The footprint spans `initial_position..=final_position` on both axes and
/// is solid except for the threshold in front of its door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub floor_id: String,
    pub name: String,
    pub initial_position: Position,
    pub final_position: Position,
    pub door_position: Position,
    pub door_orientation: Orientation,
}

impl Room {
    /// Whether a cell falls inside the room's inclusive rectangle.
    ///
    /// Corners may be given in either order.
    pub fn contains(&self, position: Position) -> bool {
        let (x_min, x_max) = ordered(self.initial_position.x, self.final_position.x);
        let (y_min, y_max) = ordered(self.initial_position.y, self.final_position.y);
        (x_min..=x_max).contains(&position.x) && (y_min..=y_max).contains(&position.y)
    }

    /// Whether both corners lie inside the building footprint.
    pub fn fits_within(&self, dimensions: &Dimensions) -> bool {
        dimensions.contains(self.initial_position) && dimensions.contains(self.final_position)
    }
}

fn ordered(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elevator {
    pub id: String,
    pub floor_id: String,
    pub position: Position,
    pub orientation: Orientation,
}
