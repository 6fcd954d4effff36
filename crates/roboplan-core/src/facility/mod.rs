//! Facility domain module.
//!
//! Buildings, floors, rooms and elevators: the spatial model the solver
//! reasons about.
//!
//! # Module Structure
//!
//! - `model`: `Building`, `Floor`, `Room`, `Elevator` and their value objects
//! - `repository`: lookup traits for each entity

mod model;
pub mod repository;

pub use model::{Building, Dimensions, Elevator, Floor, Room};
pub use repository::{BuildingRepository, ElevatorRepository, FloorRepository, RoomRepository};
