//! Fixtures and mock collaborators shared by the service tests.

use async_trait::async_trait;
use roboplan_core::error::{PlanError, Result};
use roboplan_core::facility::{
    Building, Dimensions, Elevator, Floor, FloorRepository, Room, RoomRepository,
};
use roboplan_core::geometry::{Orientation, Position, SolverCell};
use roboplan_core::robisep::{Robisep, RobisepType};
use roboplan_core::solver::{
    PathGateway, PathResult, SequenceAlgorithm, SolverSequence, TaskGateway,
};
use roboplan_core::task::{
    PersonContact, PickUpAndDeliveryTask, SurveillanceTask, Task, TaskDetails, TaskRepository,
    TaskState, TaskType,
};
use roboplan_infrastructure::InMemoryStore;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub fn building(id: &str, code: &str, length: u32, width: u32) -> Building {
    Building {
        id: id.to_string(),
        code: code.to_string(),
        name: format!("Building {}", code),
        dimensions: Dimensions::new(length, width),
    }
}

pub fn floor(id: &str, building_id: &str, floor_number: i32) -> Floor {
    Floor {
        id: id.to_string(),
        building_id: building_id.to_string(),
        floor_number,
    }
}

pub fn room(
    id: &str,
    floor_id: &str,
    initial: (u32, u32),
    last: (u32, u32),
    door: (u32, u32),
    orientation: Orientation,
) -> Room {
    Room {
        id: id.to_string(),
        floor_id: floor_id.to_string(),
        name: id.to_uppercase(),
        initial_position: Position::new(initial.0, initial.1),
        final_position: Position::new(last.0, last.1),
        door_position: Position::new(door.0, door.1),
        door_orientation: orientation,
    }
}

pub fn elevator(id: &str, floor_id: &str, at: (u32, u32), orientation: Orientation) -> Elevator {
    Elevator {
        id: id.to_string(),
        floor_id: floor_id.to_string(),
        position: Position::new(at.0, at.1),
        orientation,
    }
}

pub fn carrier_type() -> RobisepType {
    RobisepType {
        id: "type-carrier".to_string(),
        designation: "Carrier".to_string(),
        brand: "Acme".to_string(),
        model: "C1".to_string(),
        task_types: vec![TaskType::PickUpAndDelivery],
    }
}

pub fn watcher_type() -> RobisepType {
    RobisepType {
        id: "type-watcher".to_string(),
        designation: "Watcher".to_string(),
        brand: "Acme".to_string(),
        model: "W1".to_string(),
        task_types: vec![TaskType::Surveillance],
    }
}

pub fn robisep(id: &str, nickname: &str, robisep_type: RobisepType) -> Robisep {
    Robisep {
        id: id.to_string(),
        nickname: nickname.to_string(),
        serial_number: format!("SN-{}", id),
        code: id.to_uppercase(),
        robisep_type,
        room_id: "r1".to_string(),
    }
}

fn contact(name: &str) -> PersonContact {
    PersonContact {
        name: name.to_string(),
        phone_number: "912345678".to_string(),
    }
}

fn details(
    code: u32,
    state: TaskState,
    robisep_type: RobisepType,
    robisep: Option<Robisep>,
) -> TaskDetails {
    TaskDetails {
        id: format!("task-{}", code),
        task_code: code,
        state,
        robisep_type,
        robisep,
        email: "requester@isep.ipp.pt".to_string(),
    }
}

pub fn pick_up_task(code: u32, state: TaskState, robisep: Option<Robisep>) -> PickUpAndDeliveryTask {
    PickUpAndDeliveryTask {
        details: details(code, state, carrier_type(), robisep),
        pick_up_room: room("a101", "a1", (0, 0), (1, 1), (1, 1), Orientation::South),
        delivery_room: room("a102", "a1", (3, 0), (4, 1), (3, 1), Orientation::North),
        pick_up_contact: contact("Ana"),
        delivery_contact: contact("Rui"),
        description: "Toner cartridges".to_string(),
        confirmation_code: 4321,
    }
}

pub fn surveillance_task(code: u32, state: TaskState, robisep: Option<Robisep>) -> SurveillanceTask {
    SurveillanceTask {
        details: details(code, state, watcher_type(), robisep),
        starting_point_to_watch: room("a101", "a1", (0, 0), (1, 1), (1, 1), Orientation::South),
        ending_point_to_watch: room("a102", "a1", (3, 0), (4, 1), (3, 1), Orientation::North),
        contact: contact("Eva"),
    }
}

/// Floor repository that records every lookup.
pub struct RecordingFloorRepository {
    inner: InMemoryStore<Floor>,
    pub lookups: Mutex<Vec<String>>,
}

impl RecordingFloorRepository {
    pub fn new(floors: Vec<Floor>) -> Self {
        Self {
            inner: InMemoryStore::with_items(floors),
            lookups: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FloorRepository for RecordingFloorRepository {
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Floor>> {
        self.lookups.lock().unwrap().push(id.to_string());
        self.inner.find_by_domain_id(id).await
    }
}

/// Room repository that records every lookup.
pub struct RecordingRoomRepository {
    inner: InMemoryStore<Room>,
    pub lookups: Mutex<Vec<String>>,
}

impl RecordingRoomRepository {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            inner: InMemoryStore::with_items(rooms),
            lookups: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RoomRepository for RecordingRoomRepository {
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Room>> {
        self.lookups.lock().unwrap().push(id.to_string());
        self.inner.find_by_domain_id(id).await
    }

    async fn find_by_floor_id(&self, floor_id: &str) -> Result<Vec<Room>> {
        self.lookups.lock().unwrap().push(floor_id.to_string());
        self.inner.find_by_floor_id(floor_id).await
    }
}

/// In-memory task store whose `update` fails for one task code.
pub struct FailingUpdateRepository<T> {
    pub inner: InMemoryStore<T>,
    failing_code: u32,
}

impl<T: Clone> FailingUpdateRepository<T> {
    pub fn new(tasks: Vec<T>, failing_code: u32) -> Self {
        Self {
            inner: InMemoryStore::with_items(tasks),
            failing_code,
        }
    }
}

#[async_trait]
impl<T> TaskRepository<T> for FailingUpdateRepository<T>
where
    T: Task + Clone + 'static,
{
    async fn find_by_code(&self, task_code: u32) -> Result<Option<T>> {
        self.inner.find_by_code(task_code).await
    }

    async fn find_accepted(&self) -> Result<Vec<T>> {
        self.inner.find_accepted().await
    }

    async fn save(&self, task: &T) -> Result<()> {
        self.inner.save(task).await
    }

    async fn update(&self, task: &T) -> Result<()> {
        if task.task_code() == self.failing_code {
            return Err(PlanError::database("write failed"));
        }
        self.inner.update(task).await
    }
}

/// Task repository whose reads always fail.
pub struct UnavailableTaskRepository;

#[async_trait]
impl<T> TaskRepository<T> for UnavailableTaskRepository
where
    T: Send + Sync + 'static,
{
    async fn find_by_code(&self, _task_code: u32) -> Result<Option<T>> {
        Err(PlanError::database("connection refused"))
    }

    async fn find_accepted(&self) -> Result<Vec<T>> {
        Err(PlanError::database("connection refused"))
    }

    async fn save(&self, _task: &T) -> Result<()> {
        Err(PlanError::database("connection refused"))
    }

    async fn update(&self, _task: &T) -> Result<()> {
        Err(PlanError::database("connection refused"))
    }
}

pub type PathCall = (String, SolverCell, String, SolverCell);

pub struct MockPathGateway {
    response: Result<PathResult>,
    pub calls: Mutex<Vec<PathCall>>,
}

impl MockPathGateway {
    pub fn answering(path: &[&str], cost: f64) -> Self {
        Self {
            response: Ok(PathResult {
                path: path.iter().map(|t| t.to_string()).collect(),
                cost,
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: PlanError) -> Self {
        Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PathGateway for MockPathGateway {
    async fn get_lowest_cost_path(
        &self,
        origin_floor_id: &str,
        origin_cell: SolverCell,
        destination_floor_id: &str,
        destination_cell: SolverCell,
    ) -> Result<PathResult> {
        self.calls.lock().unwrap().push((
            origin_floor_id.to_string(),
            origin_cell,
            destination_floor_id.to_string(),
            destination_cell,
        ));
        self.response.clone()
    }
}

/// Answers per robot; robots without a scripted answer get a gateway error.
#[derive(Default)]
pub struct MockTaskGateway {
    answers: HashMap<String, SolverSequence>,
    delay: Option<Duration>,
    pub calls: Mutex<Vec<(String, SequenceAlgorithm)>>,
}

impl MockTaskGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, robisep_id: &str, tokens: &[&str], cost: f64) -> Self {
        self.answers.insert(
            robisep_id.to_string(),
            SolverSequence {
                sequence: tokens.iter().map(|t| t.to_string()).collect(),
                cost,
            },
        );
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl TaskGateway for MockTaskGateway {
    async fn get_task_sequence_by_robisep_id(
        &self,
        robisep_id: &str,
        algorithm: SequenceAlgorithm,
    ) -> Result<SolverSequence> {
        self.calls
            .lock()
            .unwrap()
            .push((robisep_id.to_string(), algorithm));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answers
            .get(robisep_id)
            .cloned()
            .ok_or_else(|| PlanError::gateway("Solver error (500 Internal Server Error): boom"))
    }
}
