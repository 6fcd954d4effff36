//! Task DTOs.

use super::Lookup;
use roboplan_core::error::{PlanError, Result};
use roboplan_core::task::{
    PersonContact, PickUpAndDeliveryTask, SurveillanceTask, TaskDetails, TaskState,
};
use serde::{Deserialize, Serialize};

fn default_state() -> TaskState {
    TaskState::Requested
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveillanceTaskDTO {
    pub id: String,
    pub task_code: u32,
    #[serde(default = "default_state")]
    pub state: TaskState,
    pub robisep_type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robisep_id: Option<String>,
    pub email: String,
    pub starting_room_id: String,
    pub ending_room_id: String,
    pub contact_name: String,
    pub contact_phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickUpAndDeliveryTaskDTO {
    pub id: String,
    pub task_code: u32,
    #[serde(default = "default_state")]
    pub state: TaskState,
    pub robisep_type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robisep_id: Option<String>,
    pub email: String,
    pub pick_up_room_id: String,
    pub delivery_room_id: String,
    pub pick_up_contact_name: String,
    pub pick_up_contact_phone: String,
    pub delivery_contact_name: String,
    pub delivery_contact_phone: String,
    #[serde(default)]
    pub description: String,
    pub confirmation_code: u32,
}

fn details(
    lookup: &Lookup<'_>,
    id: String,
    task_code: u32,
    state: TaskState,
    robisep_type_id: &str,
    robisep_id: Option<&str>,
    email: String,
) -> Result<TaskDetails> {
    let robisep = robisep_id.map(|rid| lookup.robisep(rid)).transpose()?;
    if matches!(state, TaskState::Accepted | TaskState::Planned) && robisep.is_none() {
        return Err(PlanError::invalid_input(format!(
            "The task {} is {} but has no robisep assigned.",
            task_code, state
        )));
    }

    Ok(TaskDetails {
        id,
        task_code,
        state,
        robisep_type: lookup.robisep_type(robisep_type_id)?,
        robisep,
        email,
    })
}

impl SurveillanceTaskDTO {
    pub(crate) fn into_domain(self, lookup: &Lookup<'_>) -> Result<SurveillanceTask> {
        let starting = lookup.room(&self.starting_room_id)?;
        let ending = lookup.room(&self.ending_room_id)?;
        if starting.id == ending.id {
            return Err(PlanError::invalid_input(format!(
                "The surveillance task {} starts and ends in the same room.",
                self.task_code
            )));
        }
        if starting.floor_id != ending.floor_id {
            return Err(PlanError::invalid_input(format!(
                "The surveillance task {} must watch rooms on the same floor.",
                self.task_code
            )));
        }

        Ok(SurveillanceTask {
            details: details(
                lookup,
                self.id,
                self.task_code,
                self.state,
                &self.robisep_type_id,
                self.robisep_id.as_deref(),
                self.email,
            )?,
            starting_point_to_watch: starting,
            ending_point_to_watch: ending,
            contact: PersonContact {
                name: self.contact_name,
                phone_number: self.contact_phone,
            },
        })
    }
}

impl From<&SurveillanceTask> for SurveillanceTaskDTO {
    fn from(task: &SurveillanceTask) -> Self {
        SurveillanceTaskDTO {
            id: task.details.id.clone(),
            task_code: task.details.task_code,
            state: task.details.state,
            robisep_type_id: task.details.robisep_type.id.clone(),
            robisep_id: task.details.robisep.as_ref().map(|r| r.id.clone()),
            email: task.details.email.clone(),
            starting_room_id: task.starting_point_to_watch.id.clone(),
            ending_room_id: task.ending_point_to_watch.id.clone(),
            contact_name: task.contact.name.clone(),
            contact_phone: task.contact.phone_number.clone(),
        }
    }
}

impl PickUpAndDeliveryTaskDTO {
    pub(crate) fn into_domain(self, lookup: &Lookup<'_>) -> Result<PickUpAndDeliveryTask> {
        let pick_up = lookup.room(&self.pick_up_room_id)?;
        let delivery = lookup.room(&self.delivery_room_id)?;
        if pick_up.id == delivery.id {
            return Err(PlanError::invalid_input(format!(
                "The pick-up and delivery task {} picks up and delivers in the same room.",
                self.task_code
            )));
        }

        Ok(PickUpAndDeliveryTask {
            details: details(
                lookup,
                self.id,
                self.task_code,
                self.state,
                &self.robisep_type_id,
                self.robisep_id.as_deref(),
                self.email,
            )?,
            pick_up_room: pick_up,
            delivery_room: delivery,
            pick_up_contact: PersonContact {
                name: self.pick_up_contact_name,
                phone_number: self.pick_up_contact_phone,
            },
            delivery_contact: PersonContact {
                name: self.delivery_contact_name,
                phone_number: self.delivery_contact_phone,
            },
            description: self.description,
            confirmation_code: self.confirmation_code,
        })
    }
}

impl From<&PickUpAndDeliveryTask> for PickUpAndDeliveryTaskDTO {
    fn from(task: &PickUpAndDeliveryTask) -> Self {
        PickUpAndDeliveryTaskDTO {
            id: task.details.id.clone(),
            task_code: task.details.task_code,
            state: task.details.state,
            robisep_type_id: task.details.robisep_type.id.clone(),
            robisep_id: task.details.robisep.as_ref().map(|r| r.id.clone()),
            email: task.details.email.clone(),
            pick_up_room_id: task.pick_up_room.id.clone(),
            delivery_room_id: task.delivery_room.id.clone(),
            pick_up_contact_name: task.pick_up_contact.name.clone(),
            pick_up_contact_phone: task.pick_up_contact.phone_number.clone(),
            delivery_contact_name: task.delivery_contact.name.clone(),
            delivery_contact_phone: task.delivery_contact.phone_number.clone(),
            description: task.description.clone(),
            confirmation_code: task.confirmation_code,
        }
    }
}
