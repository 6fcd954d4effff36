//! Robisep domain model.

use crate::task::TaskType;
use serde::{Deserialize, Serialize};

/// A robot model and the task kinds it is certified to execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobisepType {
    pub id: String,
    /// Unique designation, e.g. `"Surveyor-X"`.
    pub designation: String,
    pub brand: String,
    pub model: String,
    pub task_types: Vec<TaskType>,
}

impl RobisepType {
    pub fn can_perform(&self, task_type: TaskType) -> bool {
        self.task_types.contains(&task_type)
    }
}

/// A robot instance deployed in the facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robisep {
    pub id: String,
    pub nickname: String,
    pub serial_number: String,
    pub code: String,
    pub robisep_type: RobisepType,
    /// Room the robot is currently parked in.
    pub room_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_perform() {
        let robisep_type = RobisepType {
            id: "t1".to_string(),
            designation: "Carrier".to_string(),
            brand: "Acme".to_string(),
            model: "C-1".to_string(),
            task_types: vec![TaskType::PickUpAndDelivery],
        };
        assert!(robisep_type.can_perform(TaskType::PickUpAndDelivery));
        assert!(!robisep_type.can_perform(TaskType::Surveillance));
    }
}
