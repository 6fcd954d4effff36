//! Task domain module.
//!
//! Task requests a robot can be asked to carry out, their lifecycle, and the
//! repository interface the sequencing service persists through.
//!
//! # Module Structure
//!
//! - `state`: `TaskState` and the transition table
//! - `model`: `SurveillanceTask`, `PickUpAndDeliveryTask` and the `Task` trait
//! - `repository`: generic task repository trait

mod model;
pub mod repository;
mod state;

pub use model::{PersonContact, PickUpAndDeliveryTask, SurveillanceTask, Task, TaskDetails, TaskType};
pub use repository::TaskRepository;
pub use state::{TaskEvent, TaskState};
