//! Task sequencing queries and their reconciled results.

use crate::error::{PlanError, Result};
use crate::task::{TaskState, TaskType};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// Search strategy the solver uses to order a robot's tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SequenceAlgorithm {
    /// Exhaustive search over every ordering; exact but slow.
    Permutation,
    /// Genetic search; approximate, scales to long task lists.
    Genetic,
}

impl SequenceAlgorithm {
    /// Parses a caller-supplied algorithm name.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| {
            PlanError::invalid_input(format!("Unknown sequencing algorithm '{}'.", name))
        })
    }
}

/// Raw answer of the sequencing solver for one robot.
///
/// `sequence` starts and ends with depot markers; every token in between is
/// a task code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSequence {
    #[serde(rename = "Sequence")]
    pub sequence: Vec<String>,
    pub cost: f64,
}

impl SolverSequence {
    /// The tokens between the leading and trailing depot markers.
    pub fn task_tokens(&self) -> &[String] {
        if self.sequence.len() < 2 {
            return &[];
        }
        &self.sequence[1..self.sequence.len() - 1]
    }
}

/// Gateway to the solver's sequencing endpoint.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Asks the solver for the best order of a robot's accepted tasks.
    async fn get_task_sequence_by_robisep_id(
        &self,
        robisep_id: &str,
        algorithm: SequenceAlgorithm,
    ) -> Result<SolverSequence>;
}

/// One planned task in a robot's sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSequenceEntry {
    pub task_code: u32,
    pub task_type: TaskType,
    /// Designation of the robot type the task requires.
    pub robisep_type: String,
    pub task_state: TaskState,
    pub goal: String,
}

/// The ordered plan for one robot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSequenceResult {
    pub robisep_nickname: String,
    #[serde(rename = "Sequence")]
    pub sequence: Vec<TaskSequenceEntry>,
    pub cost: f64,
}

impl TaskSequenceResult {
    /// The entry reported for a robot whose solver call failed.
    pub fn empty(robisep_nickname: impl Into<String>) -> Self {
        Self {
            robisep_nickname: robisep_nickname.into(),
            sequence: Vec::new(),
            cost: 0.0,
        }
    }
}
