//! TaskSequenceService - orders every robot's accepted tasks through the solver.
//!
//! Robots are processed one after another and every robot gets exactly one
//! entry. A failing solver call yields an empty entry; a repository failure
//! while planning stops that robot early and keeps what was already planned.
//! Sequencing the same robot twice at once is serialized by a per-robot
//! lock, and tasks are re-read under that lock before they are marked, so a
//! task planned by a concurrent run is skipped.

use roboplan_core::error::{PlanError, Result};
use roboplan_core::robisep::RobisepRepository;
use roboplan_core::solver::{
    SequenceAlgorithm, SolverSequence, TaskGateway, TaskSequenceEntry, TaskSequenceResult,
};
use roboplan_core::task::{PickUpAndDeliveryTask, SurveillanceTask, Task, TaskRepository};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Outcome of trying to plan one task code in one repository.
enum Planning {
    Planned {
        entry: TaskSequenceEntry,
        nickname: Option<String>,
    },
    Rejected,
    Missing,
}

pub struct TaskSequenceService {
    pick_up_and_delivery_repository: Arc<dyn TaskRepository<PickUpAndDeliveryTask>>,
    surveillance_repository: Arc<dyn TaskRepository<SurveillanceTask>>,
    robisep_repository: Arc<dyn RobisepRepository>,
    task_gateway: Arc<dyn TaskGateway>,
    timeout: Duration,
    /// Entries live only while some run holds or waits on them.
    robisep_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl TaskSequenceService {
    pub fn new(
        pick_up_and_delivery_repository: Arc<dyn TaskRepository<PickUpAndDeliveryTask>>,
        surveillance_repository: Arc<dyn TaskRepository<SurveillanceTask>>,
        robisep_repository: Arc<dyn RobisepRepository>,
        task_gateway: Arc<dyn TaskGateway>,
        timeout: Duration,
    ) -> Self {
        Self {
            pick_up_and_delivery_repository,
            surveillance_repository,
            robisep_repository,
            task_gateway,
            timeout,
            robisep_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Computes one sequence per robot that has accepted tasks.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when no accepted task is assigned to any robot
    /// - `DatabaseError` when the accepted tasks cannot be listed
    pub async fn compute_sequences(
        &self,
        algorithm: SequenceAlgorithm,
    ) -> Result<Vec<TaskSequenceResult>> {
        self.sequence_all(algorithm)
            .await
            .map_err(PlanError::into_boundary)
    }

    async fn sequence_all(&self, algorithm: SequenceAlgorithm) -> Result<Vec<TaskSequenceResult>> {
        let robisep_ids = self.assigned_robiseps().await?;
        if robisep_ids.is_empty() {
            return Err(PlanError::invalid_input("There are no tasks to sequence."));
        }

        tracing::info!(
            "[TaskSequenceService] Sequencing {} robisep(s) with {}",
            robisep_ids.len(),
            algorithm
        );

        let mut results = Vec::with_capacity(robisep_ids.len());
        for robisep_id in &robisep_ids {
            results.push(self.sequence_robisep(robisep_id, algorithm).await);
        }
        Ok(results)
    }

    /// Distinct robots bound to accepted tasks, pick-up-and-delivery first.
    async fn assigned_robiseps(&self) -> Result<Vec<String>> {
        let pick_ups = self.pick_up_and_delivery_repository.find_accepted().await?;
        let surveillances = self.surveillance_repository.find_accepted().await?;

        let mut ids: Vec<String> = Vec::new();
        let assigned = pick_ups
            .iter()
            .map(|t| t.details())
            .chain(surveillances.iter().map(|t| t.details()))
            .filter_map(|d| d.robisep.as_ref().map(|r| r.id.clone()));
        for id in assigned {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    async fn robisep_lock(&self, robisep_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.robisep_locks.lock().await;
        locks
            .entry(robisep_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn sequence_robisep(
        &self,
        robisep_id: &str,
        algorithm: SequenceAlgorithm,
    ) -> TaskSequenceResult {
        let lock = self.robisep_lock(robisep_id).await;
        let result = {
            let _guard = lock.lock().await;
            self.sequence_locked(robisep_id, algorithm).await
        };

        let mut locks = self.robisep_locks.lock().await;
        // one reference in the map, one here
        if Arc::strong_count(&lock) == 2 {
            locks.remove(robisep_id);
        }
        result
    }

    async fn sequence_locked(
        &self,
        robisep_id: &str,
        algorithm: SequenceAlgorithm,
    ) -> TaskSequenceResult {
        let solver_sequence = match self.request_sequence(robisep_id, algorithm).await {
            Ok(sequence) => sequence,
            Err(e) => {
                tracing::warn!(
                    "[TaskSequenceService] No sequence for robisep '{}': {}",
                    robisep_id,
                    e
                );
                return TaskSequenceResult::empty(self.nickname_of(robisep_id).await);
            }
        };

        let mut nickname = None;
        let mut sequence = Vec::new();
        for token in solver_sequence.task_tokens() {
            let Ok(task_code) = token.trim().parse::<u32>() else {
                tracing::warn!(
                    "[TaskSequenceService] Ignoring non-task token '{}' for robisep '{}'",
                    token,
                    robisep_id
                );
                continue;
            };

            let outcome = match self.plan_code(task_code).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!(
                        "[TaskSequenceService] Stopped planning robisep '{}' at task {}: {}",
                        robisep_id,
                        task_code,
                        e
                    );
                    break;
                }
            };

            match outcome {
                Planning::Planned {
                    entry,
                    nickname: planned_by,
                } => {
                    if nickname.is_none() {
                        nickname = planned_by;
                    }
                    sequence.push(entry);
                }
                Planning::Rejected => {}
                Planning::Missing => tracing::warn!(
                    "[TaskSequenceService] Solver returned unknown task code {} for robisep '{}'",
                    task_code,
                    robisep_id
                ),
            }
        }

        let robisep_nickname = match nickname {
            Some(nickname) => nickname,
            None => self.nickname_of(robisep_id).await,
        };

        tracing::info!(
            "[TaskSequenceService] Robisep '{}' planned {} task(s), cost {}",
            robisep_nickname,
            sequence.len(),
            solver_sequence.cost
        );

        TaskSequenceResult {
            robisep_nickname,
            sequence,
            cost: solver_sequence.cost,
        }
    }

    /// Plans `task_code` in whichever repository holds it, pick-up-and-delivery first.
    async fn plan_code(&self, task_code: u32) -> Result<Planning> {
        let outcome = plan_task(self.pick_up_and_delivery_repository.as_ref(), task_code).await?;
        if !matches!(outcome, Planning::Missing) {
            return Ok(outcome);
        }
        plan_task(self.surveillance_repository.as_ref(), task_code).await
    }

    async fn request_sequence(
        &self,
        robisep_id: &str,
        algorithm: SequenceAlgorithm,
    ) -> Result<SolverSequence> {
        let call = self
            .task_gateway
            .get_task_sequence_by_robisep_id(robisep_id, algorithm);
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| PlanError::Timeout {
                operation: "task-sequence".to_string(),
                after: self.timeout,
            })?
    }

    /// The robot's nickname, or its id when it cannot be looked up.
    async fn nickname_of(&self, robisep_id: &str) -> String {
        match self.robisep_repository.find_by_domain_id(robisep_id).await {
            Ok(Some(robisep)) => robisep.nickname,
            Ok(None) => robisep_id.to_string(),
            Err(e) => {
                tracing::warn!(
                    "[TaskSequenceService] Nickname lookup for '{}' failed: {}",
                    robisep_id,
                    e
                );
                robisep_id.to_string()
            }
        }
    }
}

async fn plan_task<T>(repository: &dyn TaskRepository<T>, task_code: u32) -> Result<Planning>
where
    T: Task + 'static,
{
    let Some(mut task) = repository.find_by_code(task_code).await? else {
        return Ok(Planning::Missing);
    };

    if let Err(e) = task.mark_as_planned() {
        tracing::warn!("[TaskSequenceService] Task {} skipped: {}", task_code, e);
        return Ok(Planning::Rejected);
    }
    repository.update(&task).await?;

    let details = task.details();
    Ok(Planning::Planned {
        entry: TaskSequenceEntry {
            task_code,
            task_type: task.task_type(),
            robisep_type: details.robisep_type.designation.clone(),
            task_state: details.state,
            goal: task.goal_description(),
        },
        nickname: details.robisep.as_ref().map(|r| r.nickname.clone()),
    })
}
