//! In-memory repository implementations.
//!
//! One generic `InMemoryStore<T>` implements every lookup trait for its
//! entity type. Items keep insertion order so floor-plan compilation and
//! sequencing iterate deterministically.

use async_trait::async_trait;
use roboplan_core::error::{PlanError, Result};
use roboplan_core::facility::{
    Building, BuildingRepository, Elevator, ElevatorRepository, Floor, FloorRepository, Room,
    RoomRepository,
};
use roboplan_core::robisep::{Robisep, RobisepRepository};
use roboplan_core::task::{Task, TaskRepository, TaskState};
use tokio::sync::RwLock;

/// Insertion-ordered, lock-protected collection of entities.
pub struct InMemoryStore<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Clone> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Appends an item.
    pub async fn insert(&self, item: T) {
        self.items.write().await.push(item);
    }

    /// Snapshot of all items in insertion order.
    pub async fn all(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    async fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.items.read().await.iter().find(|item| predicate(item)).cloned()
    }

    async fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.items
            .read()
            .await
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}

impl<T: Clone> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BuildingRepository for InMemoryStore<Building> {
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Building>> {
        Ok(self.find_first(|b| b.id == id).await)
    }
}

#[async_trait]
impl FloorRepository for InMemoryStore<Floor> {
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Floor>> {
        Ok(self.find_first(|f| f.id == id).await)
    }
}

#[async_trait]
impl RoomRepository for InMemoryStore<Room> {
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Room>> {
        Ok(self.find_first(|r| r.id == id).await)
    }

    async fn find_by_floor_id(&self, floor_id: &str) -> Result<Vec<Room>> {
        Ok(self.filter(|r| r.floor_id == floor_id).await)
    }
}

#[async_trait]
impl ElevatorRepository for InMemoryStore<Elevator> {
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Elevator>> {
        Ok(self.find_first(|e| e.id == id).await)
    }

    async fn find_all_by_floor_id(&self, floor_id: &str) -> Result<Vec<Elevator>> {
        Ok(self.filter(|e| e.floor_id == floor_id).await)
    }
}

#[async_trait]
impl RobisepRepository for InMemoryStore<Robisep> {
    async fn find_by_domain_id(&self, id: &str) -> Result<Option<Robisep>> {
        Ok(self.find_first(|r| r.id == id).await)
    }
}

#[async_trait]
impl<T> TaskRepository<T> for InMemoryStore<T>
where
    T: Task + Clone + 'static,
{
    async fn find_by_code(&self, task_code: u32) -> Result<Option<T>> {
        Ok(self.find_first(|t| t.task_code() == task_code).await)
    }

    async fn find_accepted(&self) -> Result<Vec<T>> {
        Ok(self.filter(|t| t.state() == TaskState::Accepted).await)
    }

    async fn save(&self, task: &T) -> Result<()> {
        let mut items = self.items.write().await;
        if items.iter().any(|t| t.task_code() == task.task_code()) {
            return Err(PlanError::database(format!(
                "A task with code {} already exists",
                task.task_code()
            )));
        }
        items.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &T) -> Result<()> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|t| t.task_code() == task.task_code()) {
            Some(stored) => {
                *stored = task.clone();
                Ok(())
            }
            None => Err(PlanError::not_found(
                "task",
                format!("The task with code {} does not exist.", task.task_code()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roboplan_core::geometry::{Orientation, Position};
    use roboplan_core::robisep::RobisepType;
    use roboplan_core::task::{PersonContact, SurveillanceTask, TaskDetails, TaskType};

    fn room(id: &str, floor_id: &str) -> Room {
        Room {
            id: id.to_string(),
            floor_id: floor_id.to_string(),
            name: id.to_uppercase(),
            initial_position: Position::new(0, 0),
            final_position: Position::new(1, 1),
            door_position: Position::new(1, 1),
            door_orientation: Orientation::South,
        }
    }

    fn surveillance_task(code: u32, state: TaskState) -> SurveillanceTask {
        SurveillanceTask {
            details: TaskDetails {
                id: format!("task-{code}"),
                task_code: code,
                state,
                robisep_type: RobisepType {
                    id: "type-1".to_string(),
                    designation: "Watcher".to_string(),
                    brand: "Acme".to_string(),
                    model: "W".to_string(),
                    task_types: vec![TaskType::Surveillance],
                },
                robisep: None,
                email: "guard@isep.ipp.pt".to_string(),
            },
            starting_point_to_watch: room("a", "f1"),
            ending_point_to_watch: room("b", "f1"),
            contact: PersonContact {
                name: "Guard".to_string(),
                phone_number: "911111111".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_rooms_by_floor_keep_insertion_order() {
        let store = InMemoryStore::with_items(vec![
            room("r2", "f1"),
            room("r9", "f2"),
            room("r1", "f1"),
        ]);
        let rooms = store.find_by_floor_id("f1").await.unwrap();
        let ids: Vec<_> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r2", "r1"]);
        assert!(RoomRepository::find_by_domain_id(&store, "nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_task_find_accepted_and_update() {
        let store = InMemoryStore::new();
        store.save(&surveillance_task(1, TaskState::Accepted)).await.unwrap();
        store.save(&surveillance_task(2, TaskState::Requested)).await.unwrap();

        let accepted = store.find_accepted().await.unwrap();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].task_code(), 1);

        let mut task = store.find_by_code(1).await.unwrap().unwrap();
        task.mark_as_planned().unwrap();
        store.update(&task).await.unwrap();

        let stored = store.find_by_code(1).await.unwrap().unwrap();
        assert_eq!(stored.state(), TaskState::Planned);
        assert!(store.find_accepted().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_task_save_rejects_duplicate_code() {
        let store = InMemoryStore::new();
        store.save(&surveillance_task(5, TaskState::Requested)).await.unwrap();
        let err = store
            .save(&surveillance_task(5, TaskState::Requested))
            .await
            .unwrap_err();
        assert!(err.is_database_error());
    }

    #[tokio::test]
    async fn test_task_update_missing_code() {
        let store: InMemoryStore<SurveillanceTask> = InMemoryStore::new();
        let err = store
            .update(&surveillance_task(3, TaskState::Accepted))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
