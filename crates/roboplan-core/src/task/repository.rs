//! Task repository trait.
//!
//! Defines the interface for task persistence operations.

use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for one kind of task.
///
/// Surveillance and pick-up-and-delivery tasks live in separate stores, so
/// the trait is generic over the task kind (`TaskRepository<SurveillanceTask>`,
/// `TaskRepository<PickUpAndDeliveryTask>`).
#[async_trait]
pub trait TaskRepository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Finds a task by its unique code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Task found
    /// - `Ok(None)`: No task with this code
    /// - `Err(PlanError)`: Error occurred during retrieval
    async fn find_by_code(&self, task_code: u32) -> Result<Option<T>>;

    /// Lists every task currently in the `ACCEPTED` state.
    async fn find_accepted(&self) -> Result<Vec<T>>;

    /// Stores a new task.
    async fn save(&self, task: &T) -> Result<()>;

    /// Replaces a stored task, matched by code.
    ///
    /// Fails with `EntityDoesNotExist` when no task has that code.
    async fn update(&self, task: &T) -> Result<()>;
}
