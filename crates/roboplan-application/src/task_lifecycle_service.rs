//! TaskLifecycleService - accepts and refuses requested tasks.

use roboplan_core::error::{PlanError, Result};
use roboplan_core::robisep::RobisepRepository;
use roboplan_core::task::{
    PickUpAndDeliveryTask, SurveillanceTask, Task, TaskRepository, TaskState, TaskType,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A task's state after a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTransition {
    pub task_code: u32,
    pub task_type: TaskType,
    pub task_state: TaskState,
    pub robisep_nickname: Option<String>,
}

impl TaskTransition {
    fn of<T: Task>(task: &T) -> Self {
        Self {
            task_code: task.task_code(),
            task_type: task.task_type(),
            task_state: task.state(),
            robisep_nickname: task.details().robisep.as_ref().map(|r| r.nickname.clone()),
        }
    }
}

pub struct TaskLifecycleService {
    pick_up_and_delivery_repository: Arc<dyn TaskRepository<PickUpAndDeliveryTask>>,
    surveillance_repository: Arc<dyn TaskRepository<SurveillanceTask>>,
    robisep_repository: Arc<dyn RobisepRepository>,
}

impl TaskLifecycleService {
    pub fn new(
        pick_up_and_delivery_repository: Arc<dyn TaskRepository<PickUpAndDeliveryTask>>,
        surveillance_repository: Arc<dyn TaskRepository<SurveillanceTask>>,
        robisep_repository: Arc<dyn RobisepRepository>,
    ) -> Self {
        Self {
            pick_up_and_delivery_repository,
            surveillance_repository,
            robisep_repository,
        }
    }

    /// Accepts a requested task and assigns it to a robot.
    ///
    /// The robot must be of the model the task asks for and certified for
    /// the task's kind.
    pub async fn accept_task(&self, task_code: u32, robisep_id: &str) -> Result<TaskTransition> {
        let robisep = self
            .robisep_repository
            .find_by_domain_id(robisep_id)
            .await?
            .ok_or_else(|| PlanError::not_found("Robisep", "The robisep does not exist."))?;

        let transition = if let Some(mut task) = self
            .pick_up_and_delivery_repository
            .find_by_code(task_code)
            .await?
        {
            task.accept(robisep)?;
            self.pick_up_and_delivery_repository.update(&task).await?;
            TaskTransition::of(&task)
        } else if let Some(mut task) = self.surveillance_repository.find_by_code(task_code).await? {
            task.accept(robisep)?;
            self.surveillance_repository.update(&task).await?;
            TaskTransition::of(&task)
        } else {
            return Err(task_not_found());
        };

        tracing::info!(
            "[TaskLifecycleService] Task {} accepted for robisep '{}'",
            task_code,
            robisep_id
        );
        Ok(transition)
    }

    /// Refuses a requested task.
    pub async fn refuse_task(&self, task_code: u32) -> Result<TaskTransition> {
        let transition = if let Some(mut task) = self
            .pick_up_and_delivery_repository
            .find_by_code(task_code)
            .await?
        {
            task.refuse()?;
            self.pick_up_and_delivery_repository.update(&task).await?;
            TaskTransition::of(&task)
        } else if let Some(mut task) = self.surveillance_repository.find_by_code(task_code).await? {
            task.refuse()?;
            self.surveillance_repository.update(&task).await?;
            TaskTransition::of(&task)
        } else {
            return Err(task_not_found());
        };

        tracing::info!("[TaskLifecycleService] Task {} refused", task_code);
        Ok(transition)
    }
}

fn task_not_found() -> PlanError {
    PlanError::not_found("Task", "The task does not exist.")
}
