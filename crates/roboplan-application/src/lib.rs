//! Use cases over the facility model and the logic solver.

pub mod floor_plan_service;
pub mod path_service;
pub mod task_lifecycle_service;
pub mod task_sequence_service;

#[cfg(test)]
mod test_support;

pub use floor_plan_service::FloorPlanService;
pub use path_service::{PathService, PathSummary};
pub use task_lifecycle_service::{TaskLifecycleService, TaskTransition};
pub use task_sequence_service::TaskSequenceService;
