//! Task domain model.

use super::state::{TaskEvent, TaskState};
use crate::error::{PlanError, Result};
use crate::facility::Room;
use crate::robisep::{Robisep, RobisepType};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The kinds of work a robot can be certified for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskType {
    Surveillance,
    PickUpAndDelivery,
}

/// Fields every task carries regardless of its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    pub id: String,
    /// Unique positive code; the sequencing solver refers to tasks by it.
    pub task_code: u32,
    pub state: TaskState,
    /// The robot model required to carry the task out.
    pub robisep_type: RobisepType,
    /// Bound when the task is accepted.
    pub robisep: Option<Robisep>,
    /// Email of the user who requested the task.
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonContact {
    pub name: String,
    pub phone_number: String,
}

/// Common behaviour of both task kinds.
pub trait Task: Send + Sync {
    fn details(&self) -> &TaskDetails;

    fn details_mut(&mut self) -> &mut TaskDetails;

    fn task_type(&self) -> TaskType;

    /// The rooms the robot starts and finishes the task in.
    fn goal_rooms(&self) -> (&Room, &Room);

    fn task_code(&self) -> u32 {
        self.details().task_code
    }

    fn state(&self) -> TaskState {
        self.details().state
    }

    fn goal_description(&self) -> String {
        let (start, end) = self.goal_rooms();
        format!("start: {} - End: {}", start.name, end.name)
    }

    /// Accepts the task and binds it to `robisep`.
    ///
    /// The robot's model must match the required one and be certified for
    /// this task kind.
    fn accept(&mut self, robisep: Robisep) -> Result<()> {
        let required = &self.details().robisep_type;
        if robisep.robisep_type.designation != required.designation {
            return Err(PlanError::invalid_input(format!(
                "The robisep '{}' is of type '{}' but the task requires '{}'.",
                robisep.nickname, robisep.robisep_type.designation, required.designation
            )));
        }
        if !robisep.robisep_type.can_perform(self.task_type()) {
            return Err(PlanError::invalid_input(format!(
                "The robisep type '{}' cannot perform {} tasks.",
                robisep.robisep_type.designation,
                self.task_type()
            )));
        }

        let details = self.details_mut();
        details.state = details.state.apply(TaskEvent::Accept)?;
        details.robisep = Some(robisep);
        Ok(())
    }

    fn refuse(&mut self) -> Result<()> {
        let details = self.details_mut();
        details.state = details.state.apply(TaskEvent::Refuse)?;
        Ok(())
    }

    fn mark_as_planned(&mut self) -> Result<()> {
        let details = self.details_mut();
        details.state = details.state.apply(TaskEvent::Plan)?;
        Ok(())
    }
}

/// Watch a route between two rooms on the same floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveillanceTask {
    #[serde(flatten)]
    pub details: TaskDetails,
    pub starting_point_to_watch: Room,
    pub ending_point_to_watch: Room,
    pub contact: PersonContact,
}

impl Task for SurveillanceTask {
    fn details(&self) -> &TaskDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut TaskDetails {
        &mut self.details
    }

    fn task_type(&self) -> TaskType {
        TaskType::Surveillance
    }

    fn goal_rooms(&self) -> (&Room, &Room) {
        (&self.starting_point_to_watch, &self.ending_point_to_watch)
    }
}

/// Carry an item from one room to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickUpAndDeliveryTask {
    #[serde(flatten)]
    pub details: TaskDetails,
    pub pick_up_room: Room,
    pub delivery_room: Room,
    pub pick_up_contact: PersonContact,
    pub delivery_contact: PersonContact,
    pub description: String,
    pub confirmation_code: u32,
}

impl Task for PickUpAndDeliveryTask {
    fn details(&self) -> &TaskDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut TaskDetails {
        &mut self.details
    }

    fn task_type(&self) -> TaskType {
        TaskType::PickUpAndDelivery
    }

    fn goal_rooms(&self) -> (&Room, &Room) {
        (&self.pick_up_room, &self.delivery_room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Orientation, Position};

    fn room(name: &str) -> Room {
        Room {
            id: format!("room-{name}"),
            floor_id: "f1".to_string(),
            name: name.to_string(),
            initial_position: Position::new(0, 0),
            final_position: Position::new(1, 1),
            door_position: Position::new(1, 1),
            door_orientation: Orientation::South,
        }
    }

    fn carrier_type() -> RobisepType {
        RobisepType {
            id: "type-1".to_string(),
            designation: "Carrier".to_string(),
            brand: "Acme".to_string(),
            model: "C-1".to_string(),
            task_types: vec![TaskType::PickUpAndDelivery],
        }
    }

    fn robisep(robisep_type: RobisepType) -> Robisep {
        Robisep {
            id: "rob-1".to_string(),
            nickname: "Speedy".to_string(),
            serial_number: "SN-1".to_string(),
            code: "R1".to_string(),
            robisep_type,
            room_id: "room-A".to_string(),
        }
    }

    fn delivery_task() -> PickUpAndDeliveryTask {
        PickUpAndDeliveryTask {
            details: TaskDetails {
                id: "task-1".to_string(),
                task_code: 7,
                state: TaskState::Requested,
                robisep_type: carrier_type(),
                robisep: None,
                email: "user@isep.ipp.pt".to_string(),
            },
            pick_up_room: room("A101"),
            delivery_room: room("B202"),
            pick_up_contact: PersonContact {
                name: "Ana".to_string(),
                phone_number: "912345678".to_string(),
            },
            delivery_contact: PersonContact {
                name: "Rui".to_string(),
                phone_number: "923456789".to_string(),
            },
            description: "Exam papers".to_string(),
            confirmation_code: 1234,
        }
    }

    #[test]
    fn test_goal_description() {
        let task = delivery_task();
        assert_eq!(task.goal_description(), "start: A101 - End: B202");
    }

    #[test]
    fn test_accept_binds_robisep() {
        let mut task = delivery_task();
        task.accept(robisep(carrier_type())).unwrap();
        assert_eq!(task.state(), TaskState::Accepted);
        assert_eq!(task.details.robisep.as_ref().unwrap().nickname, "Speedy");
    }

    #[test]
    fn test_accept_rejects_incapable_robisep() {
        let mut task = delivery_task();
        let mut wrong = carrier_type();
        wrong.task_types = vec![TaskType::Surveillance];

        let err = task.accept(robisep(wrong)).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(task.state(), TaskState::Requested);
        assert!(task.details.robisep.is_none());
    }

    #[test]
    fn test_accept_rejects_other_designation() {
        let mut task = delivery_task();
        let mut other = carrier_type();
        other.designation = "Heavy".to_string();
        assert!(task.accept(robisep(other)).is_err());
    }

    #[test]
    fn test_mark_as_planned_requires_accepted() {
        let mut task = delivery_task();
        assert!(task.mark_as_planned().is_err());

        task.accept(robisep(carrier_type())).unwrap();
        task.mark_as_planned().unwrap();
        assert_eq!(task.state(), TaskState::Planned);
        assert!(task.mark_as_planned().is_err());
    }

    #[test]
    fn test_refuse_twice_fails() {
        let mut task = delivery_task();
        task.refuse().unwrap();
        assert_eq!(task.state(), TaskState::Refused);
        assert!(task.refuse().is_err());
        assert!(task.accept(robisep(carrier_type())).is_err());
    }
}
