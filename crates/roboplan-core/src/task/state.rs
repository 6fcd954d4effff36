//! Task lifecycle.

use crate::error::{PlanError, Result};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Where a task is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TaskState {
    /// Submitted by a user, awaiting a decision.
    Requested,
    /// Approved and bound to a robot.
    Accepted,
    /// Rejected; terminal.
    Refused,
    /// Placed in a robot's execution sequence; terminal.
    Planned,
}

/// Something that moves a task between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TaskEvent {
    Accept,
    Refuse,
    Plan,
}

impl TaskState {
    /// Applies `event` and returns the next state.
    ///
    /// Only `REQUESTED -> ACCEPTED`, `REQUESTED -> REFUSED` and
    /// `ACCEPTED -> PLANNED` are legal; everything else is `InvalidInput`.
    pub fn apply(self, event: TaskEvent) -> Result<TaskState> {
        match (self, event) {
            (TaskState::Requested, TaskEvent::Accept) => Ok(TaskState::Accepted),
            (TaskState::Requested, TaskEvent::Refuse) => Ok(TaskState::Refused),
            (TaskState::Accepted, TaskEvent::Plan) => Ok(TaskState::Planned),
            (state, event) => Err(PlanError::invalid_input(format!(
                "Cannot {} a task that is {}.",
                event, state
            ))),
        }
    }
}
