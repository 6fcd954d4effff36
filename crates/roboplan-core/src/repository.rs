//! Repository trait re-exports.
//!
//! This module provides centralized access to all repository traits.

pub use crate::facility::{BuildingRepository, ElevatorRepository, FloorRepository, RoomRepository};
pub use crate::robisep::RobisepRepository;
pub use crate::task::TaskRepository;
